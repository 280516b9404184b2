//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Debug logging on; everything shown.
    Verbose,
    /// Status messages and progress bars.
    #[default]
    Normal,
    /// Status messages only, no progress bars.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows progress bars.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
