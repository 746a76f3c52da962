//! Terminal output layer for the CLI
//!
//! Resolves output preferences once at startup into a `UiContext` that
//! command runners thread through their rendering.

mod terminal;
mod text;

pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use text::ColoredText;

use stagehand::config::ColorMode;

use crate::cli::ColorChoice;

/// Resolved output context for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorChoice>,
        config_color: ColorMode,
    ) -> Self {
        Self::from_caps(json, verbose, cli_color, config_color, detect_capabilities())
    }

    fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorChoice>,
        config_color: ColorMode,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorChoice::Never) => false,
            Some(ColorChoice::Always) => true,
            Some(ColorChoice::Auto) | None => match config_color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose,
            color,
            unicode: caps.supports_unicode,
        }
    }

    /// Warning prefix icon, degraded for ascii terminals
    pub fn warn_icon(&self) -> &'static str {
        if self.unicode {
            "⚠"
        } else {
            "!"
        }
    }

    /// Success prefix icon
    pub fn ok_icon(&self) -> &'static str {
        if self.unicode {
            "✓"
        } else {
            "+"
        }
    }

    /// Error prefix icon
    pub fn err_icon(&self) -> &'static str {
        if self.unicode {
            "✗"
        } else {
            "x"
        }
    }

    /// Print a warning line immediately, to stderr.
    pub fn warn(&self, message: &str) {
        eprintln!(
            "{} {}",
            ColoredText::warning(self.warn_icon()).render(self.color),
            message
        );
    }
}
