//! Types shared by the sweep stages.

use crate::config::FailurePolicy;
use crate::error::{Result, SweepError};
use std::path::PathBuf;

/// How the run treats the working copy before deleting anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepMode {
    /// Check out the protected branch first, purge, then fetch-with-prune all remotes.
    Checkout,
    /// Leave HEAD alone, prune the configured remote first, then purge.
    ///
    /// `anchor` is the operator-supplied argument; it only selects this mode.
    Override { anchor: String },
}

impl SweepMode {
    pub fn from_anchor(anchor: Option<String>) -> Self {
        match anchor {
            Some(anchor) => SweepMode::Override { anchor },
            None => SweepMode::Checkout,
        }
    }

    /// Whether remote reconciliation runs before the purge.
    pub fn prunes_first(&self) -> bool {
        matches!(self, SweepMode::Override { .. })
    }
}

/// Everything a sweep needs to know, already merged from config and flags.
#[derive(Debug, Clone)]
pub struct SweepOptions {
    pub protected_branch: String,
    pub remote: String,
    pub mode: SweepMode,
    /// Directory for the deletion log. `None` disables the log. Ignored in
    /// override mode, which never writes one.
    pub log_dir: Option<PathBuf>,
    pub failure_policy: FailurePolicy,
    pub dry_run: bool,
}

/// Outcome of a completed sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    /// Branches selected for deletion, in enumeration order.
    pub candidates: Vec<String>,
    /// Branches actually deleted.
    pub deleted: Vec<String>,
    /// Branches whose deletion failed, with the reason. Only populated
    /// under [`FailurePolicy::BestEffort`].
    pub failed: Vec<(String, String)>,
    /// Path of the deletion log, if one was written.
    pub log_path: Option<PathBuf>,
    pub dry_run: bool,
}

impl SweepReport {
    /// Turn collected deletion failures into a single error.
    pub fn ensure_complete(&self) -> Result<()> {
        if self.failed.is_empty() {
            return Ok(());
        }

        let details: Vec<String> = self
            .failed
            .iter()
            .map(|(branch, reason)| format!("  - {}: {}", branch, reason))
            .collect();
        Err(SweepError::DeletionError(format!(
            "{} of {} branch(es) could not be deleted:\n{}",
            self.failed.len(),
            self.candidates.len(),
            details.join("\n")
        )))
    }
}

/// Per-branch results of the deletion loop.
#[derive(Debug, Default)]
pub(crate) struct PurgeOutcome {
    pub deleted: Vec<String>,
    pub failed: Vec<(String, String)>,
}
