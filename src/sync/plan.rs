//! Sync planning - computes operations, performs no writes
//!
//! One `CopyOperation` pairs one source file with one target directory.
//! The plan captures everything execution needs to decide: the mirrored
//! destination path, the parent directory to create if missing, and the
//! backup path if an existing destination must be preserved first.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::resolver::TargetDirectory;
use crate::source::SourceFile;
use crate::sync::backup::backup_path;
use crate::sync::SyncOptions;

/// The unit of sync work: one source file applied to one target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOperation {
    /// Source file to read
    pub source: PathBuf,
    /// Path relative to the component source root, for display
    pub relative: PathBuf,
    /// Destination: `target.path / relative`
    pub dest: PathBuf,
    /// Parent directory to create first, when it does not exist yet
    pub create_parent: Option<PathBuf>,
    /// Backup to take before overwrite, when enabled and the dest exists
    pub backup: Option<PathBuf>,
}

/// Plan one component's files against one target directory.
///
/// All operations in a plan share the same `now`, so every backup taken in
/// one run of one target carries the same timestamp suffix. The planner
/// only reads the filesystem; dry-run and real execution both consume the
/// same plan.
pub fn plan_target(
    files: &[SourceFile],
    target: &TargetDirectory,
    options: SyncOptions,
    now: DateTime<Utc>,
) -> Vec<CopyOperation> {
    files
        .iter()
        .map(|file| {
            let dest = target.path.join(&file.relative);

            let create_parent = dest
                .parent()
                .filter(|parent| !parent.is_dir())
                .map(|parent| parent.to_path_buf());

            let backup = if options.backup && dest.is_file() {
                Some(backup_path(&dest, now))
            } else {
                None
            };

            CopyOperation {
                source: file.absolute.clone(),
                relative: file.relative.clone(),
                dest,
                create_parent,
                backup,
            }
        })
        .collect()
}
