//! Checkout guard: put the working copy on the protected branch.

use super::types::SweepMode;
use crate::error::{Result, SweepError};
use crate::repo::Repository;

/// Switch to `protected` in checkout mode; do nothing in override mode.
///
/// A failed switch is fatal and happens before any branch is enumerated.
pub fn ensure_on_protected<R: Repository + ?Sized>(
    repo: &R,
    mode: &SweepMode,
    protected: &str,
) -> Result<()> {
    match mode {
        SweepMode::Checkout => {
            println!("Switching to protected branch '{}'...", protected);
            repo.checkout(protected).map_err(|e| {
                SweepError::CheckoutError(format!(
                    "could not switch to '{}': {}\n\n\
                     No branches were deleted. Commit, stash, or discard local changes \
                     (or create '{}') and run again.",
                    protected, e, protected
                ))
            })
        }
        SweepMode::Override { anchor } => {
            log::info!("checkout skipped, operator override '{}'", anchor);
            println!("Skipping checkout (override: '{}').", anchor);
            Ok(())
        }
    }
}
