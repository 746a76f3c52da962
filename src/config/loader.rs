//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StagehandError, StagehandResult};

use super::types::Config;

/// File name looked up next to the invocation point
pub const CONFIG_FILE_NAME: &str = "stagehand.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StagehandResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StagehandError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, `./stagehand.toml`, user config, or defaults.
///
/// An explicit path that does not parse is fatal; the implicit lookups fall
/// through silently so a configless invocation just works.
pub fn load_or_default(explicit: Option<&Path>) -> StagehandResult<Config> {
    if let Some(path) = explicit {
        let (config, _warnings) = load_with_warnings(path)?;
        return Ok(with_env_overrides(config));
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        if let Ok(config) = Config::load(&local) {
            return Ok(with_env_overrides(config));
        }
    }

    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join("stagehand/config.toml");
        if user_config.exists() {
            if let Ok(config) = Config::load(&user_config) {
                return Ok(with_env_overrides(config));
            }
        }
    }

    Ok(with_env_overrides(Config::default()))
}

/// Apply environment variable overrides (STAGEHAND_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(root) = std::env::var("STAGEHAND_CONFIG_ROOT") {
        config.deploy.config_root = PathBuf::from(root);
    }

    if let Ok(root) = std::env::var("STAGEHAND_PROGRAMS_ROOT") {
        config.deploy.programs_root = PathBuf::from(root);
    }

    if let Ok(val) = std::env::var("STAGEHAND_BACKUP") {
        config.deploy.backup = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy",
        "config_root",
        "programs_root",
        "backup",
        "apply_to_all_versions",
        "output",
        "color",
        "launch",
        "program",
        "name",
        "exe",
        "args",
        "dir",
        "elevate",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        if best.map(|(_, d)| dist < d).unwrap_or(true) {
            best = Some((candidate, dist));
        }
    }

    best.filter(|&(_, dist)| dist > 0 && dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
