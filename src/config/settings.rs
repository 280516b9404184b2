//! Operator switches read from the environment.
//!
//! Every command-line argument belongs to the target tool, so the launcher
//! takes its own switches from environment variables instead.

use crate::ui::OutputMode;

/// Enables debug logging.
pub const DEBUG_VAR: &str = "WAF_LAUNCHER_DEBUG";

/// Suppresses progress bars.
pub const QUIET_VAR: &str = "WAF_LAUNCHER_QUIET";

/// Disables colored output (<https://no-color.org/>).
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Launcher switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Log at debug level.
    pub debug: bool,
    /// Minimal output.
    pub quiet: bool,
    /// Plain, uncolored output.
    pub no_color: bool,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key: &str| std::env::var(key))
    }

    /// Read settings with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn from_env_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        Self {
            debug: is_enabled(env_fn(DEBUG_VAR)),
            quiet: is_enabled(env_fn(QUIET_VAR)),
            no_color: env_fn(NO_COLOR_VAR).is_ok(),
        }
    }

    /// Output mode selected by these settings.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.debug {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

fn is_enabled(value: Result<String, std::env::VarError>) -> bool {
    match value {
        Ok(v) => !matches!(v.trim().to_lowercase().as_str(), "" | "0" | "false" | "no"),
        Err(_) => false,
    }
}
