//! Deploy orchestration
//!
//! Walks the configured (or discovered) component names through the
//! resolver, the source enumerator, and the sync stages, accumulating a
//! `RunSummary`. Warnings surface as events at the point of detection;
//! only the two root preconditions and an empty component list are fatal.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{RootKind, StagehandError, StagehandResult};
use crate::report::{ComponentReport, RunSummary, SkipReason};
use crate::resolver::resolve_targets;
use crate::source::enumerate;
use crate::sync::{execute_target, plan_target, SyncEvent, SyncOptions};

/// Everything a run needs, built once at the process boundary.
///
/// There is no ambient state: no cwd changes, no environment reads past
/// this point.
#[derive(Debug, Clone)]
pub struct DeployRequest {
    /// Root holding one subdirectory of configuration per component
    pub config_root: PathBuf,
    /// Root holding the versioned program install directories
    pub programs_root: PathBuf,
    /// Explicit component allow-list; empty means discover from config root
    pub components: Vec<String>,
    /// Deploy into every matching version instead of the most recent
    pub apply_to_all_versions: bool,
    /// Back up existing destination files before overwrite
    pub backup: bool,
    /// Narrate intended actions without touching the filesystem
    pub dry_run: bool,
}

/// Progress event emitted while deploying
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// A component's processing begins
    ComponentStart { component: String },
    /// A component was skipped; the run continues
    Warning {
        component: String,
        reason: SkipReason,
        detail: String,
    },
    /// A target directory was resolved for a component
    TargetResolved { component: String, target: String },
    /// Per-file sync progress within (component, target)
    Sync {
        component: String,
        target: String,
        event: SyncEvent,
    },
}

/// Run a deployment without progress reporting.
pub fn run(request: &DeployRequest) -> StagehandResult<RunSummary> {
    run_with_callback::<fn(DeployEvent)>(request, None)
}

/// Run a deployment, streaming events to `callback`.
pub fn run_with_callback<F>(
    request: &DeployRequest,
    mut callback: Option<F>,
) -> StagehandResult<RunSummary>
where
    F: FnMut(DeployEvent),
{
    check_root(&request.config_root, RootKind::Config)?;
    check_root(&request.programs_root, RootKind::Programs)?;

    let components = if request.components.is_empty() {
        discover_components(&request.config_root)?
    } else {
        request.components.clone()
    };
    if components.is_empty() {
        return Err(StagehandError::NoComponents {
            root: request.config_root.clone(),
        });
    }

    let options = SyncOptions {
        backup: request.backup,
        dry_run: request.dry_run,
    };
    // One timestamp per run: every backup taken in this invocation shares
    // the same suffix, and the next invocation gets a later one.
    let now = Utc::now();

    let mut summary = RunSummary::new();

    for component in &components {
        emit(&mut callback, DeployEvent::ComponentStart {
            component: component.clone(),
        });

        let targets = resolve_targets(
            &request.programs_root,
            component,
            request.apply_to_all_versions,
        )?;
        if targets.is_empty() {
            emit(&mut callback, DeployEvent::Warning {
                component: component.clone(),
                reason: SkipReason::NoTargets,
                detail: format!(
                    "no directory under {} starts with '{}'",
                    request.programs_root.display(),
                    component
                ),
            });
            summary.record(ComponentReport::skipped(component, SkipReason::NoTargets));
            continue;
        }

        let source_root = request.config_root.join(component);
        let files = match enumerate(&source_root) {
            Ok(files) => files,
            Err(e) if e.is_component_recoverable() => {
                let reason = match e {
                    StagehandError::SourceEmpty { .. } => SkipReason::SourceEmpty,
                    _ => SkipReason::SourceMissing,
                };
                emit(&mut callback, DeployEvent::Warning {
                    component: component.clone(),
                    reason,
                    detail: e.to_string(),
                });
                summary.record(ComponentReport::skipped(component, reason));
                continue;
            }
            Err(e) => return Err(e),
        };

        let mut errors = 0;
        for target in &targets {
            emit(&mut callback, DeployEvent::TargetResolved {
                component: component.clone(),
                target: target.name(),
            });

            let operations = plan_target(&files, target, options, now);
            let target_name = target.name();
            let component_name = component.clone();
            let outcome = execute_target(
                &operations,
                request.dry_run,
                callback.as_mut().map(|cb| {
                    move |event: SyncEvent| {
                        cb(DeployEvent::Sync {
                            component: component_name.clone(),
                            target: target_name.clone(),
                            event,
                        })
                    }
                }),
            );
            errors += outcome.errors.len();
        }

        summary.record(ComponentReport::deployed(
            component,
            targets.iter().map(|t| t.path.clone()).collect(),
            files.len(),
            errors,
        ));
    }

    Ok(summary)
}

/// Component names are the immediate subdirectory names of the config
/// root, sorted for a deterministic processing order.
pub fn discover_components(config_root: &Path) -> StagehandResult<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(config_root)? {
        let entry = entry?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

fn check_root(path: &Path, kind: RootKind) -> StagehandResult<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(StagehandError::MissingRoot {
            kind,
            path: path.to_path_buf(),
        })
    }
}

fn emit<F>(callback: &mut Option<F>, event: DeployEvent)
where
    F: FnMut(DeployEvent),
{
    if let Some(cb) = callback {
        cb(event);
    }
}
