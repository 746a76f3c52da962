//! End-of-run summary
//!
//! Built incrementally by the orchestrator, rendered once at completion.
//! Components that were skipped still get a line, with zero counts and the
//! reason, so the summary always accounts for everything that was asked
//! for. Never persisted.

use std::path::PathBuf;

use serde::Serialize;

/// Why a component contributed no copies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// No installed directory matched the component name
    NoTargets,
    /// `config_root/<name>` does not exist
    SourceMissing,
    /// The source tree holds no files
    SourceEmpty,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::NoTargets => "no matching install directory",
            SkipReason::SourceMissing => "source directory missing",
            SkipReason::SourceEmpty => "source directory empty",
        }
    }
}

/// One component's line in the summary
#[derive(Debug, Clone, Serialize)]
pub struct ComponentReport {
    pub name: String,
    /// Resolved install directories, in deploy order
    pub targets: Vec<PathBuf>,
    /// Source files considered (counted once per component, not per target)
    pub files: usize,
    /// File-level errors across all of this component's targets
    pub errors: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
}

impl ComponentReport {
    pub fn deployed(name: &str, targets: Vec<PathBuf>, files: usize, errors: usize) -> Self {
        Self {
            name: name.to_string(),
            targets,
            files,
            errors,
            skipped: None,
        }
    }

    pub fn skipped(name: &str, reason: SkipReason) -> Self {
        Self {
            name: name.to_string(),
            targets: Vec::new(),
            files: 0,
            errors: 0,
            skipped: Some(reason),
        }
    }

    /// Target directory names joined for one-line display
    pub fn targets_display(&self) -> String {
        if self.targets.is_empty() {
            return "-".to_string();
        }
        self.targets
            .iter()
            .map(|t| {
                t.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| t.display().to_string())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Aggregated run summary
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub components: Vec<ComponentReport>,
    /// Running total of files considered across all components
    pub total_files: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: ComponentReport) {
        self.total_files += report.files;
        self.components.push(report);
    }

    pub fn total_errors(&self) -> usize {
        self.components.iter().map(|c| c.errors).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.components
            .iter()
            .filter(|c| c.skipped.is_some())
            .count()
    }

    /// Plain-text rendering, one line per component plus the grand total.
    pub fn render_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.components.len() + 1);
        for c in &self.components {
            let line = match c.skipped {
                Some(reason) => {
                    format!("  {} -> skipped ({}), 0 files", c.name, reason.describe())
                }
                None => format!(
                    "  {} -> {} ({} files)",
                    c.name,
                    c.targets_display(),
                    c.files
                ),
            };
            lines.push(line);
        }
        lines.push(format!("  total: {} files", self.total_files));
        lines.join("\n")
    }
}
