//! Recording UI for tests.
//!
//! Keystrokes are served from a queue; an empty queue behaves like closed
//! input, so an unattended test never consents to an install.
//!
//! # Example
//!
//! ```
//! use waf_launcher::ui::{Keystroke, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_keystrokes(vec![Keystroke::Enter]);
//!
//! ui.message("Downloading python 2.7");
//! assert_eq!(ui.read_keystroke("Go? ").unwrap(), Keystroke::Enter);
//! assert_eq!(ui.read_keystroke("Go? ").unwrap(), Keystroke::Eof);
//!
//! assert!(ui.has_message("python 2.7"));
//! ```

use std::collections::VecDeque;

use crate::error::Result;

use super::{Keystroke, ProgressHandle, UserInterface};

/// Records everything shown to the operator.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    errors: Vec<String>,
    transfers: Vec<String>,
    keystrokes: VecDeque<Keystroke>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a UI with no queued input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue keystrokes returned by successive `read_keystroke` calls.
    pub fn queue_keystrokes(&mut self, keys: Vec<Keystroke>) {
        self.keystrokes.extend(keys);
    }

    /// Lines passed to `message`, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Lines passed to `error`, in order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Labels of started transfers.
    pub fn transfers(&self) -> &[String] {
        &self.transfers
    }

    /// Prompts shown by `read_keystroke`.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Whether any message contains `needle`.
    pub fn has_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    /// Whether any error contains `needle`.
    pub fn has_error(&self, needle: &str) -> bool {
        self.errors.iter().any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn read_keystroke(&mut self, prompt: &str) -> Result<Keystroke> {
        self.prompts_shown.push(prompt.to_string());
        Ok(self.keystrokes.pop_front().unwrap_or(Keystroke::Eof))
    }

    fn start_progress(&mut self, label: &str) -> Box<dyn ProgressHandle> {
        self.transfers.push(label.to_string());
        Box::new(MockProgress::new())
    }
}

/// Progress handle that remembers what it was told.
#[derive(Debug, Default)]
pub struct MockProgress {
    length: Option<u64>,
    position: u64,
    finished: bool,
    abandoned: bool,
}

impl MockProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(&self) -> Option<u64> {
        self.length
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_abandoned(&self) -> bool {
        self.abandoned
    }
}

impl ProgressHandle for MockProgress {
    fn set_length(&mut self, len: u64) {
        self.length = Some(len);
    }

    fn advance(&mut self, delta: u64) {
        self.position += delta;
    }

    fn finish(&mut self) {
        self.finished = true;
    }

    fn abandon(&mut self) {
        self.abandoned = true;
    }
}
