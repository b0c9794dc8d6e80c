//! Error types for the branch-sweep CLI.
//!
//! Uses thiserror for derive macros. Each stage of a sweep has its own variant
//! so the operator can tell from the message alone where the run stopped.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for sweep operations.
#[derive(Error, Debug)]
pub enum SweepError {
    /// Invalid configuration or the tool was run outside a repository.
    #[error("{0}")]
    UserError(String),

    /// A raw git invocation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The protected branch could not be checked out.
    #[error("Checkout failed: {0}")]
    CheckoutError(String),

    /// Local branches could not be listed.
    #[error("Branch enumeration failed: {0}")]
    EnumerationError(String),

    /// One or more candidate branches could not be deleted.
    #[error("Branch deletion failed: {0}")]
    DeletionError(String),

    /// Stale remote-tracking references could not be pruned.
    #[error("Remote reconciliation failed: {0}")]
    ReconciliationError(String),

    /// The deletion log could not be written.
    #[error("Deletion log could not be written: {0}")]
    LogError(String),
}

impl SweepError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::UserError(_) => exit_codes::USER_ERROR,
            SweepError::GitError(_)
            | SweepError::CheckoutError(_)
            | SweepError::EnumerationError(_)
            | SweepError::DeletionError(_)
            | SweepError::ReconciliationError(_) => exit_codes::GIT_FAILURE,
            SweepError::LogError(_) => exit_codes::LOG_FAILURE,
        }
    }
}

/// Result type alias for sweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;
