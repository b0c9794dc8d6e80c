//! Repository context resolution for branch-sweep.
//!
//! Finds the working tree the tool was invoked from. The sweep operates on
//! that working tree's HEAD and on the repository's shared branch set.

use crate::error::{Result, SweepError};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for a sweep run. All paths are absolute.
#[derive(Debug, Clone)]
pub struct SweepContext {
    /// Directory the tool was invoked from. Default home of deletion logs.
    pub cwd: PathBuf,

    /// Top level of the working tree containing `cwd`.
    pub repo_root: PathBuf,
}

impl SweepContext {
    /// Resolve the context from the process working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(SweepContext)` - Successfully resolved context
    /// * `Err(SweepError::UserError)` - If not in a git repository (exit code 1)
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            SweepError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref();
        let repo_root = git::get_repo_root(cwd)?;
        log::debug!("repository root: {}", repo_root.display());

        Ok(Self {
            cwd: cwd.to_path_buf(),
            repo_root,
        })
    }

    /// Resolve a possibly relative path against `base`.
    pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }
}
