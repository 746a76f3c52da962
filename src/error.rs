//! Error types for Stagehand
//!
//! Uses `thiserror` for library errors. The binary layer wraps these in
//! `anyhow` and maps the fatal variants onto process exit codes.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stagehand operations
pub type StagehandResult<T> = Result<T, StagehandError>;

/// Main error type for Stagehand operations
///
/// Fatal variants (`MissingRoot`, `NoComponents`, `InvalidConfig`) abort a
/// run. `SourceMissing` and `SourceEmpty` are recoverable: the orchestrator
/// downgrades them to warnings and skips the component.
#[derive(Error, Debug)]
pub enum StagehandError {
    /// Configuration root or programs root does not exist
    #[error("{kind} root not found: {path}")]
    MissingRoot { kind: RootKind, path: PathBuf },

    /// No component names could be derived from the configuration root
    #[error("no components found under {root} - nothing to deploy")]
    NoComponents { root: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Component source directory does not exist
    #[error("component source missing: {path}")]
    SourceMissing { path: PathBuf },

    /// Component source directory contains no files
    #[error("component source is empty: {path}")]
    SourceEmpty { path: PathBuf },

    /// Launch entry references a program with no installed directory
    #[error("no installed directory matches program '{name}'")]
    ProgramNotInstalled { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which of the two run-level root directories failed the precondition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    Config,
    Programs,
}

impl std::fmt::Display for RootKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RootKind::Config => write!(f, "configuration"),
            RootKind::Programs => write!(f, "programs"),
        }
    }
}

impl StagehandError {
    /// True for errors the orchestrator treats as per-component warnings
    pub fn is_component_recoverable(&self) -> bool {
        matches!(
            self,
            StagehandError::SourceMissing { .. } | StagehandError::SourceEmpty { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_missing_root() {
        let err = StagehandError::MissingRoot {
            kind: RootKind::Programs,
            path: PathBuf::from("./Programs"),
        };
        assert_eq!(err.to_string(), "programs root not found: ./Programs");
    }

    #[test]
    fn test_error_display_no_components() {
        let err = StagehandError::NoComponents {
            root: PathBuf::from("./Config"),
        };
        assert_eq!(
            err.to_string(),
            "no components found under ./Config - nothing to deploy"
        );
    }

    #[test]
    fn test_source_errors_are_recoverable() {
        let missing = StagehandError::SourceMissing {
            path: PathBuf::from("Config/grafana"),
        };
        let fatal = StagehandError::NoComponents {
            root: PathBuf::from("Config"),
        };
        assert!(missing.is_component_recoverable());
        assert!(!fatal.is_component_recoverable());
    }
}
