//! The sweep workflow: checkout guard, branch purge, remote reconciliation.
//!
//! # Ordering
//!
//! - Checkout mode: check out the protected branch, write the deletion log,
//!   delete candidates, then fetch every remote with `--prune`.
//! - Override mode: prune the configured remote, then delete candidates.
//!   HEAD is never touched and no log is written.
//!
//! Local branch deletion and remote-tracking pruning work on disjoint ref
//! namespaces, so the two orderings reach the same end state.
//!
//! Every stage is fail-fast. Nothing already applied is rolled back.

mod deletion_log;
mod display;
mod guard;
mod purge;
mod reconcile;
mod types;


pub use display::print_summary;
pub use types::{SweepMode, SweepOptions, SweepReport};

use crate::error::Result;
use crate::repo::Repository;
use chrono::Local;

/// Run a sweep against `repo`.
///
/// Under the best-effort policy, deletion failures are returned in the
/// report rather than as an error; call [`SweepReport::ensure_complete`].
pub fn run_sweep<R: Repository + ?Sized>(repo: &R, options: &SweepOptions) -> Result<SweepReport> {
    if options.dry_run {
        return plan_only(repo, options);
    }

    guard::ensure_on_protected(repo, &options.mode, &options.protected_branch)?;

    if options.mode.prunes_first() {
        reconcile::reconcile(repo, &options.mode, &options.remote)?;
    }

    let (branches, candidates) = purge::collect_candidates(repo, &options.protected_branch)?;
    println!("Found {} branch(es) to delete.", candidates.len());

    if let SweepMode::Override { .. } = options.mode {
        for branch in branches.iter().filter(|b| b.is_current) {
            if candidates.contains(&branch.name) {
                log::warn!(
                    "'{}' is checked out and will fail to delete",
                    branch.name
                );
            }
        }
    }

    let log_path = match (&options.mode, &options.log_dir) {
        (SweepMode::Checkout, Some(dir)) => Some(deletion_log::write_deletion_log(
            dir,
            &candidates,
            &Local::now(),
        )?),
        _ => None,
    };

    let outcome = purge::delete_candidates(repo, &candidates, options.failure_policy)?;

    if !options.mode.prunes_first() {
        reconcile::reconcile(repo, &options.mode, &options.remote)?;
    }

    Ok(SweepReport {
        candidates,
        deleted: outcome.deleted,
        failed: outcome.failed,
        log_path,
        dry_run: false,
    })
}

fn plan_only<R: Repository + ?Sized>(repo: &R, options: &SweepOptions) -> Result<SweepReport> {
    let (branches, candidates) = purge::collect_candidates(repo, &options.protected_branch)?;
    display::print_plan(options, &branches, &candidates);

    Ok(SweepReport {
        candidates,
        dry_run: true,
        ..SweepReport::default()
    })
}
