//! Capability interface over the local repository.
//!
//! The sweep never touches git directly; it drives a [`Repository`]. The
//! production implementation is [`GitCli`], which shells out through
//! [`crate::git::run_git`]. Tests substitute a recording fake.

mod git_cli;

#[cfg(test)]
pub(crate) mod fake;

pub use git_cli::GitCli;

use crate::error::Result;

/// A local branch as reported by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Short branch name (without `refs/heads/`).
    pub name: String,
    /// Whether this branch is checked out in the working copy.
    pub is_current: bool,
}

impl Branch {
    pub fn new(name: impl Into<String>, is_current: bool) -> Self {
        Self {
            name: name.into(),
            is_current,
        }
    }

    /// Exact-name match against the protected branch.
    pub fn is_protected(&self, protected: &str) -> bool {
        self.name == protected
    }
}

/// The operations a sweep needs from the underlying version-control system.
///
/// Each call is synchronous and either fully succeeds or returns an error;
/// callers attach stage context to the error.
pub trait Repository {
    /// List local branches in the order the repository reports them.
    fn list_branches(&self) -> Result<Vec<Branch>>;

    /// Switch the working copy to `branch`.
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Delete `branch` regardless of merge status.
    fn force_delete_branch(&self, branch: &str) -> Result<()>;

    /// Drop remote-tracking refs of `remote` whose branch no longer exists there.
    fn prune_remote(&self, remote: &str) -> Result<()>;

    /// Fetch every remote, pruning stale remote-tracking refs.
    fn fetch_prune_all(&self) -> Result<()>;
}
