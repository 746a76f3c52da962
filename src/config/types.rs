//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::StagehandResult;

use super::loader::{self, ConfigWarning};

/// Top-level `stagehand.toml` contents
///
/// Every section is optional; a missing file yields `Config::default()`.
/// CLI flags and `STAGEHAND_*` environment variables override file values.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub deploy: DeployConfig,
    pub output: OutputConfig,
    pub launch: LaunchConfig,
}

/// Defaults for the deploy subcommand
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DeployConfig {
    pub config_root: PathBuf,
    pub programs_root: PathBuf,
    pub backup: bool,
    pub apply_to_all_versions: bool,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            config_root: PathBuf::from("./Config"),
            programs_root: PathBuf::from("./Programs"),
            backup: false,
            apply_to_all_versions: false,
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub color: ColorMode,
}

/// Color behavior, CLI `--color` wins over this
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Programs the `launch` subcommand starts
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LaunchConfig {
    #[serde(rename = "program")]
    pub programs: Vec<ProgramSpec>,
}

/// One `[[launch.program]]` entry
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProgramSpec {
    /// Component name, prefix-matched against the programs root
    pub name: String,
    /// Executable path, relative to the resolved install directory unless
    /// absolute
    pub exe: PathBuf,
    /// Argument string passed through verbatim
    #[serde(default)]
    pub args: String,
    /// Working directory override; defaults to the install directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Request an elevated launch
    #[serde(default)]
    pub elevate: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StagehandResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StagehandResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, `./stagehand.toml`, the user config
    /// directory, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> StagehandResult<Self> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (STAGEHAND_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
