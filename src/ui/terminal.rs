//! Interactive terminal UI.

use console::Term;
use std::io::{IsTerminal, Write};

use crate::config::Settings;
use crate::error::Result;

use super::{
    should_use_colors, Keystroke, LauncherTheme, NonInteractiveUI, OutputMode, ProgressHandle,
    TransferProgress, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: LauncherTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, no_color: bool) -> Self {
        let theme = if should_use_colors(no_color) {
            LauncherTheme::new()
        } else {
            LauncherTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn read_keystroke(&mut self, prompt: &str) -> Result<Keystroke> {
        self.out.write_str(&self.theme.format_prompt(prompt))?;
        self.out.flush()?;

        let key = Keystroke::from(self.out.read_key()?);
        match key {
            Keystroke::Char(c) if !c.is_control() => self.out.write_line(&c.to_string())?,
            _ => self.out.write_line("")?,
        }

        Ok(key)
    }

    fn start_progress(&mut self, label: &str) -> Box<dyn ProgressHandle> {
        if self.mode.shows_progress() {
            Box::new(TransferProgress::new(label))
        } else {
            Box::new(TransferProgress::hidden())
        }
    }
}

/// Create the appropriate UI based on context.
///
/// Single-keystroke reads need a terminal on both ends; anything else gets
/// the line-based [`NonInteractiveUI`].
pub fn create_ui(settings: &Settings) -> Box<dyn UserInterface> {
    if Term::stdout().is_term() && std::io::stdin().is_terminal() {
        Box::new(TerminalUI::new(settings.output_mode(), settings.no_color))
    } else {
        Box::new(NonInteractiveUI::new())
    }
}
