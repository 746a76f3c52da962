//! Command runners
//!
//! Each runner turns CLI arguments into a library request, renders
//! progress through the UI layer, and leaves exit-code mapping to main.

pub mod deploy;
pub mod launch;
pub mod version;

use std::path::Path;

use anyhow::Result;
use stagehand::config::{Config, ConfigWarning};

use crate::ui::UiContext;

/// Load configuration for a command.
///
/// An explicit `--config` path is fatal if unreadable and surfaces its
/// unknown-key warnings; the implicit lookup falls back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>)> {
    match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            Ok((config.with_env_overrides(), warnings))
        }
        None => Ok((Config::load_or_default(None)?, Vec::new())),
    }
}

/// Print unknown-key warnings the way they were detected: immediately.
pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        let mut message = format!("unknown config key '{}' in {}", w.key, location);
        if let Some(suggestion) = &w.suggestion {
            message.push_str(&format!(" - did you mean '{suggestion}'?"));
        }
        ui.warn(&message);
    }
}
