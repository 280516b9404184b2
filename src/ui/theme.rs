//! Prompt and error styling.

use console::Style;

/// Styles applied by the terminal UI.
#[derive(Debug, Clone)]
pub struct LauncherTheme {
    /// Install consent prompt.
    pub prompt: Style,
    /// Startup failures.
    pub error: Style,
}

impl Default for LauncherTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LauncherTheme {
    /// Bold prompt, red errors.
    pub fn new() -> Self {
        Self {
            prompt: Style::new().bold(),
            error: Style::new().red().bold(),
        }
    }

    /// No styling at all (non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            prompt: Style::new(),
            error: Style::new(),
        }
    }

    /// Style the consent prompt. The text itself is left untouched.
    pub fn format_prompt(&self, prompt: &str) -> String {
        self.prompt.apply_to(prompt).to_string()
    }

    /// Style an error line.
    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(msg).to_string()
    }
}

/// Colors are used only on a terminal, and never when `NO_COLOR` is set.
pub fn should_use_colors(no_color: bool) -> bool {
    if no_color || std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
