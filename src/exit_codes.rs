//! Exit code constants for the branch-sweep CLI.
//!
//! - 0: Success
//! - 1: User error (bad config, not inside a repository)
//! - 2: Usage error (emitted by clap before any command runs)
//! - 3: Git operation failure (checkout, enumeration, deletion, prune)
//! - 4: Deletion log could not be written

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid configuration or environment.
pub const USER_ERROR: i32 = 1;

/// Command-line usage error. Reserved for clap.
#[allow(dead_code)]
pub const USAGE_ERROR: i32 = 2;

/// Git operation failure in any stage of the sweep.
pub const GIT_FAILURE: i32 = 3;

/// The deletion log could not be created or written.
pub const LOG_FAILURE: i32 = 4;
