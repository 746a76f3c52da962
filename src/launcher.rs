//! Process launcher
//!
//! Thin collaborator of the deployment engine: starts each configured
//! program as a detached child process inside its resolved install
//! directory. Consumes nothing from deployment besides the resolver.
//! Launched processes are not monitored or restarted.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::ProgramSpec;
use crate::error::{RootKind, StagehandError, StagehandResult};
use crate::resolver::resolve_targets;

/// Per-run launch results
#[derive(Debug, Clone, Default)]
pub struct LaunchReport {
    /// Programs started successfully
    pub launched: Vec<String>,
    /// Programs that failed, with the failure message
    pub failed: Vec<(String, String)>,
    /// Programs excluded by `--skip`
    pub skipped: Vec<String>,
    /// Non-fatal notes (e.g. elevation unsupported)
    pub warnings: Vec<String>,
}

impl LaunchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fully resolved invocation for one program
#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    exe: PathBuf,
    cwd: PathBuf,
    args: Vec<String>,
}

/// Launch every configured program not named in `skip`.
///
/// Each program resolves its install directory the same way deploy does
/// (latest matching version). One program's failure is recorded and the
/// rest still launch; the caller decides the exit code from the report.
pub fn launch_programs(
    programs: &[ProgramSpec],
    programs_root: &Path,
    skip: &[String],
    elevate_all: bool,
) -> StagehandResult<LaunchReport> {
    if !programs_root.is_dir() {
        return Err(StagehandError::MissingRoot {
            kind: RootKind::Programs,
            path: programs_root.to_path_buf(),
        });
    }

    let mut report = LaunchReport::default();

    for spec in programs {
        if skip.iter().any(|s| s == &spec.name) {
            report.skipped.push(spec.name.clone());
            continue;
        }

        let targets = resolve_targets(programs_root, &spec.name, false)?;
        let install_dir = match targets.into_iter().next() {
            Some(target) => target.path,
            None => {
                let err = StagehandError::ProgramNotInstalled {
                    name: spec.name.clone(),
                };
                report.failed.push((spec.name.clone(), err.to_string()));
                continue;
            }
        };

        if spec.elevate || elevate_all {
            report.warnings.push(format!(
                "{}: elevated launch is not supported on this platform, starting normally",
                spec.name
            ));
        }

        let invocation = resolve_invocation(spec, &install_dir);
        match spawn_detached(&invocation) {
            Ok(()) => report.launched.push(spec.name.clone()),
            Err(e) => report.failed.push((spec.name.clone(), e.to_string())),
        }
    }

    Ok(report)
}

/// Resolve executable, working directory, and argument vector.
///
/// Relative `exe` and `dir` are anchored at the install directory. The
/// argument string splits on whitespace; arguments containing spaces
/// belong in separate config entries.
fn resolve_invocation(spec: &ProgramSpec, install_dir: &Path) -> Invocation {
    let exe = if spec.exe.is_absolute() {
        spec.exe.clone()
    } else {
        install_dir.join(&spec.exe)
    };

    let cwd = match &spec.dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => install_dir.join(dir),
        None => install_dir.to_path_buf(),
    };

    let args = spec.args.split_whitespace().map(String::from).collect();

    Invocation { exe, cwd, args }
}

/// Spawn and immediately detach; the child outlives this process.
fn spawn_detached(invocation: &Invocation) -> std::io::Result<()> {
    Command::new(&invocation.exe)
        .args(&invocation.args)
        .current_dir(&invocation.cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(drop)
}
