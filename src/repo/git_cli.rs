//! [`Repository`] implementation backed by the `git` command line.

use super::{Branch, Repository};
use crate::error::Result;
use crate::git::run_git;
use std::path::{Path, PathBuf};

const HEADS_PREFIX: &str = "refs/heads/";

/// Runs every operation as a `git` subprocess inside `repo_root`.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_root: PathBuf,
}

impl GitCli {
    pub fn new<P: AsRef<Path>>(repo_root: P) -> Self {
        Self {
            repo_root: repo_root.as_ref().to_path_buf(),
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }
}

impl Repository for GitCli {
    fn list_branches(&self) -> Result<Vec<Branch>> {
        let output = run_git(
            &self.repo_root,
            &["for-each-ref", "--format=%(HEAD)%(refname)", HEADS_PREFIX],
        )?;
        Ok(parse_branch_listing(&output.stdout))
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        // The trailing `--` keeps git from reading `branch` as a pathspec.
        run_git(&self.repo_root, &["checkout", branch, "--"])?;
        Ok(())
    }

    fn force_delete_branch(&self, branch: &str) -> Result<()> {
        run_git(&self.repo_root, &["branch", "-D", "--", branch])?;
        Ok(())
    }

    fn prune_remote(&self, remote: &str) -> Result<()> {
        run_git(&self.repo_root, &["remote", "prune", remote])?;
        Ok(())
    }

    fn fetch_prune_all(&self) -> Result<()> {
        run_git(&self.repo_root, &["fetch", "--all", "--prune"])?;
        Ok(())
    }
}

/// Parse `for-each-ref --format=%(HEAD)%(refname)` output.
///
/// Each line is `*refs/heads/<name>` for the checked-out branch and
/// ` refs/heads/<name>` otherwise. The leading space may already be trimmed
/// from the first line.
fn parse_branch_listing(stdout: &str) -> Vec<Branch> {
    stdout
        .lines()
        .filter_map(|line| {
            let (is_current, rest) = match line.strip_prefix('*') {
                Some(rest) => (true, rest),
                None => (false, line.trim_start()),
            };
            rest.strip_prefix(HEADS_PREFIX)
                .filter(|name| !name.is_empty())
                .map(|name| Branch::new(name, is_current))
        })
        .collect()
}
