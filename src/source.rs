//! Component source enumeration
//!
//! Lists every file under a component's configuration tree, keeping paths
//! relative to the tree root so the sync stage can mirror the structure
//! into each target directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StagehandError, StagehandResult};

/// A file under a component's source root
///
/// `relative` is computed against the canonicalized root, so symlinked or
/// trailing-separator roots cannot break the prefix stripping. Immutable
/// for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Canonical absolute path
    pub absolute: PathBuf,
    /// Path relative to the source root, nested structure preserved
    pub relative: PathBuf,
}

/// Recursively enumerate all files under `source_root`.
///
/// Directory entries are sorted by name at each level so output is stable
/// across platforms; no ordering is promised beyond that.
///
/// Errors: `SourceMissing` if the root does not exist, `SourceEmpty` if it
/// exists but holds no files. Both are component-recoverable - the
/// orchestrator warns and skips.
pub fn enumerate(source_root: &Path) -> StagehandResult<Vec<SourceFile>> {
    if !source_root.is_dir() {
        return Err(StagehandError::SourceMissing {
            path: source_root.to_path_buf(),
        });
    }

    let root = source_root.canonicalize()?;
    let mut files = Vec::new();
    collect_files(&root, &root, &mut files)?;

    if files.is_empty() {
        return Err(StagehandError::SourceEmpty {
            path: source_root.to_path_buf(),
        });
    }

    Ok(files)
}

fn collect_files(root: &Path, current: &Path, files: &mut Vec<SourceFile>) -> StagehandResult<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(current)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_files(root, &path, files)?;
        } else {
            let absolute = path.canonicalize()?;
            let relative = absolute
                .strip_prefix(root)
                .unwrap_or(&absolute)
                .to_path_buf();
            files.push(SourceFile { absolute, relative });
        }
    }

    Ok(())
}
