//! Non-interactive UI for piped or headless runs.

use std::io::{self, BufRead, Write};

use crate::error::Result;

use super::{Keystroke, ProgressHandle, TransferProgress, UserInterface};

/// UI implementation for when stdin or stdout is not a terminal.
///
/// Single-key reads are not available here, so the prompt reads one line and
/// classifies its first character. Closed input reads as [`Keystroke::Eof`].
#[derive(Debug, Default)]
pub struct NonInteractiveUI;

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn read_keystroke(&mut self, prompt: &str) -> Result<Keystroke> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let key = keystroke_from_reader(&mut io::stdin().lock())?;
        writeln!(stdout)?;
        Ok(key)
    }

    fn start_progress(&mut self, _label: &str) -> Box<dyn ProgressHandle> {
        Box::new(TransferProgress::hidden())
    }
}

/// Read one line from `reader` and reduce it to a keystroke.
///
/// An empty line is Enter; otherwise the first character counts.
pub fn keystroke_from_reader<R: BufRead>(reader: &mut R) -> io::Result<Keystroke> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(Keystroke::Eof);
    }

    let line = line.trim_end_matches(['\r', '\n']);
    Ok(match line.chars().next() {
        Some(c) => Keystroke::Char(c),
        None => Keystroke::Enter,
    })
}
