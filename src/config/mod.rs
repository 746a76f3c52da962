//! Configuration for Stagehand
//!
//! An optional `stagehand.toml` provides deploy defaults, output
//! preferences, and the launch program table. Precedence, lowest to
//! highest: file, `STAGEHAND_*` environment variables, CLI flags.

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{ColorMode, Config, DeployConfig, LaunchConfig, OutputConfig, ProgramSpec};
