//! UI context for environment detection.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Resolved output mode
    pub mode: OutputMode,
    /// Suppress non-essential output
    pub quiet: bool,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(json_flag: bool, no_color_flag: bool, quiet: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        let color = is_tty && !no_color_flag && !no_color_env && !term_is_dumb;
        let mode = OutputMode::resolve(json_flag, is_tty, term_is_dumb);

        Self { color, mode, quiet }
    }

    /// Plain context without color, for tests.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            color: false,
            mode: OutputMode::Plain,
            quiet: false,
        }
    }

    /// Pretty context without color, for tests.
    #[cfg(test)]
    pub fn pretty() -> Self {
        Self {
            color: false,
            mode: OutputMode::Pretty,
            quiet: false,
        }
    }
}
