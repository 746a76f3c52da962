//! Sync execution - performs planned operations, or narrates them
//!
//! A failed backup or parent creation abandons that file's copy and is
//! recorded as a file-level error; the remaining operations still run.

use std::fs;
use std::io;
use std::path::Path;

use crate::sync::{CopyOperation, SyncEvent, TargetOutcome};

/// Execute a target's planned operations in order.
///
/// With `dry_run` set, no filesystem call is made; the same events fire so
/// the caller can render intentions. Events stream per operation for
/// immediate output.
pub fn execute_target<F>(
    operations: &[CopyOperation],
    dry_run: bool,
    mut callback: Option<F>,
) -> TargetOutcome
where
    F: FnMut(SyncEvent),
{
    let mut outcome = TargetOutcome::default();

    for (index, op) in operations.iter().enumerate() {
        let relative = op.relative.display().to_string();

        if let Some(ref mut cb) = callback {
            cb(SyncEvent::ItemStart {
                index,
                relative: relative.clone(),
            });
        }

        if let Some(parent) = &op.create_parent {
            if !dry_run {
                if let Err(e) = fs::create_dir_all(parent) {
                    emit_error(&mut callback, &mut outcome, index, &relative, &e);
                    continue;
                }
            }
            if let Some(ref mut cb) = callback {
                cb(SyncEvent::ParentCreated {
                    index,
                    path: parent.display().to_string(),
                });
            }
        }

        if let Some(backup) = &op.backup {
            if !dry_run {
                if let Err(e) = fs::copy(&op.dest, backup) {
                    // Never overwrite a file whose backup failed.
                    emit_error(&mut callback, &mut outcome, index, &relative, &e);
                    continue;
                }
            }
            outcome.backed_up += 1;
            if let Some(ref mut cb) = callback {
                cb(SyncEvent::BackupCreated {
                    index,
                    backup: backup.display().to_string(),
                });
            }
        }

        if !dry_run {
            if let Err(e) = atomic_copy(&op.source, &op.dest) {
                emit_error(&mut callback, &mut outcome, index, &relative, &e);
                continue;
            }
        }
        outcome.copied += 1;
        if let Some(ref mut cb) = callback {
            cb(SyncEvent::ItemCopied {
                index,
                dest: op.dest.display().to_string(),
            });
        }
    }

    outcome
}

fn emit_error<F>(
    callback: &mut Option<F>,
    outcome: &mut TargetOutcome,
    index: usize,
    relative: &str,
    error: &io::Error,
) where
    F: FnMut(SyncEvent),
{
    if let Some(cb) = callback {
        cb(SyncEvent::ItemError {
            index,
            relative: relative.to_string(),
            message: error.to_string(),
        });
    }
    outcome.errors.push(format!("{relative}: {error}"));
}

/// Full-content copy via temp file + rename in the destination directory.
///
/// An interrupted run can leave a stray `.tmp` sibling but never a
/// truncated destination.
fn atomic_copy(source: &Path, dest: &Path) -> io::Result<()> {
    let dir = dest.parent().unwrap_or_else(|| Path::new("."));
    let mut reader = fs::File::open(source)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    io::copy(&mut reader, &mut tmp)?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}
