//! Remote reconciliation: drop remote-tracking refs for branches gone upstream.

use super::types::SweepMode;
use crate::error::{Result, SweepError};
use crate::repo::Repository;

/// Prune stale remote-tracking refs.
///
/// Checkout mode fetches every remote with pruning. Override mode prunes
/// only `remote`. Local branches are untouched either way.
pub fn reconcile<R: Repository + ?Sized>(repo: &R, mode: &SweepMode, remote: &str) -> Result<()> {
    match mode {
        SweepMode::Checkout => {
            println!("Pruning stale remote-tracking references (all remotes)...");
            repo.fetch_prune_all().map_err(|e| {
                SweepError::ReconciliationError(format!("fetch --prune failed: {}", e))
            })
        }
        SweepMode::Override { .. } => {
            println!("Pruning stale remote-tracking references for '{}'...", remote);
            repo.prune_remote(remote).map_err(|e| {
                SweepError::ReconciliationError(format!(
                    "could not prune remote '{}': {}",
                    remote, e
                ))
            })
        }
    }
}
