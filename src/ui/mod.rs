//! Operator-facing user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped or headless runs
//! - [`MockUI`] for tests
//! - Download progress bars and the prompt/error styling
//!
//! # Example
//!
//! ```
//! use waf_launcher::ui::{Keystroke, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_keystrokes(vec![Keystroke::Char('y')]);
//!
//! let key = ui.read_keystroke("Continue [Y/n]? ").unwrap();
//! assert_eq!(key, Keystroke::Char('y'));
//! assert_eq!(ui.prompts_shown(), &["Continue [Y/n]? "]);
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod terminal;
pub mod theme;

pub use mock::{MockProgress, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::TransferProgress;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, LauncherTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the operator on stdout.
    fn message(&mut self, msg: &str);

    /// Display an error message on stderr.
    fn error(&mut self, msg: &str);

    /// Show `prompt` and read a single keystroke.
    ///
    /// The prompt is flushed before reading and a newline is echoed after.
    fn read_keystroke(&mut self, prompt: &str) -> Result<Keystroke>;

    /// Start a byte-progress display for a transfer.
    fn start_progress(&mut self, label: &str) -> Box<dyn ProgressHandle>;
}

/// Handle for controlling a transfer progress display.
pub trait ProgressHandle {
    /// Set the expected total, once known.
    fn set_length(&mut self, len: u64);

    /// Record `delta` more bytes transferred.
    fn advance(&mut self, delta: u64);

    /// Mark the transfer as complete.
    fn finish(&mut self);

    /// Mark the transfer as failed.
    fn abandon(&mut self);
}

/// A single key read from the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// Enter / Return, or an empty line.
    Enter,
    /// A printable or control character.
    Char(char),
    /// A non-character key (arrows, function keys, escape).
    Other,
    /// Input closed before anything was read.
    Eof,
}

impl From<console::Key> for Keystroke {
    fn from(key: console::Key) -> Self {
        match key {
            console::Key::Enter => Keystroke::Enter,
            console::Key::Char(c) => Keystroke::Char(c),
            _ => Keystroke::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_enter_maps_to_enter() {
        assert_eq!(Keystroke::from(console::Key::Enter), Keystroke::Enter);
    }

    #[test]
    fn console_char_maps_to_char() {
        assert_eq!(
            Keystroke::from(console::Key::Char('n')),
            Keystroke::Char('n')
        );
    }

    #[test]
    fn console_other_keys_map_to_other() {
        assert_eq!(Keystroke::from(console::Key::Escape), Keystroke::Other);
        assert_eq!(Keystroke::from(console::Key::ArrowUp), Keystroke::Other);
    }
}
