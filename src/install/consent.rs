//! Operator consent for the automatic install.

use tracing::warn;

use crate::messages::INSTALL_PROMPT;
use crate::ui::{Keystroke, UserInterface};

/// The operator's answer to the install prompt. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallDecision {
    /// Download and install.
    Yes,
    /// Leave the machine alone.
    No,
}

/// Classify a keystroke. `y`, `Y` and Enter mean yes; anything else means no.
pub fn classify(key: Keystroke) -> InstallDecision {
    match key {
        Keystroke::Enter | Keystroke::Char('y' | 'Y' | '\r' | '\n') => InstallDecision::Yes,
        _ => InstallDecision::No,
    }
}

/// Ask the operator whether to download and install the runtime.
///
/// An input error counts as no.
pub fn prompt_install(ui: &mut dyn UserInterface) -> InstallDecision {
    match ui.read_keystroke(INSTALL_PROMPT) {
        Ok(key) => classify(key),
        Err(e) => {
            warn!(error = %e, "could not read install consent");
            InstallDecision::No
        }
    }
}
