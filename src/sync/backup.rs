//! Backup artifact naming
//!
//! An existing destination file is copied aside before overwrite, to a
//! sibling named `<file>.bak.<YYYYMMDDHHMMSS>`. The UTC timestamp is
//! fixed-width and second-resolution, so artifact names sort
//! chronologically and are unique per run.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Timestamp layout for backup suffixes
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Compute the backup path for a destination file at a given instant.
///
/// The suffix is appended to the full file name, so
/// `prometheus-config.yaml` becomes
/// `prometheus-config.yaml.bak.20260806120000` alongside the original.
pub fn backup_path(dest: &Path, at: DateTime<Utc>) -> PathBuf {
    let mut name = OsString::from(dest.file_name().unwrap_or(dest.as_os_str()));
    name.push(format!(".bak.{}", at.format(TIMESTAMP_FORMAT)));
    dest.with_file_name(name)
}
