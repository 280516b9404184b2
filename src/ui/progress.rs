//! Transfer progress bars.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::ProgressHandle;

const BAR_TEMPLATE: &str =
    "{spinner:.magenta} {msg} [{bar:30.magenta/dim}] {binary_bytes}/{binary_total_bytes}";
const SPINNER_TEMPLATE: &str = "{spinner:.magenta} {msg} {binary_bytes}";

/// A byte-counting progress bar for downloads.
///
/// Starts as a spinner and switches to a bar once the total size is known.
pub struct TransferProgress {
    bar: ProgressBar,
}

impl TransferProgress {
    /// Create a visible progress display with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(style(SPINNER_TEMPLATE));
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Create a progress display that doesn't show (quiet or non-TTY output).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Bytes recorded so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
        .progress_chars("█▉▊▋▌▍▎▏ ")
}

impl ProgressHandle for TransferProgress {
    fn set_length(&mut self, len: u64) {
        self.bar.set_style(style(BAR_TEMPLATE));
        self.bar.set_length(len);
    }

    fn advance(&mut self, delta: u64) {
        self.bar.inc(delta);
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.bar.abandon();
    }
}
