//! In-memory [`Repository`] that records every call.

use super::{Branch, Repository};
use crate::error::{Result, SweepError};
use std::cell::RefCell;
use std::collections::HashSet;

/// One recorded call against a [`FakeRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List,
    Checkout(String),
    Delete(String),
    PruneRemote(String),
    FetchPruneAll,
}

#[derive(Debug, Default)]
pub(crate) struct FakeRepository {
    branches: RefCell<Vec<Branch>>,
    calls: RefCell<Vec<Call>>,
    fail_checkout: bool,
    fail_list: bool,
    fail_prune: bool,
    fail_delete: HashSet<String>,
}

impl FakeRepository {
    /// Build a repository whose branches are `names`, with `current` checked out.
    pub(crate) fn new(names: &[&str], current: &str) -> Self {
        let branches = names
            .iter()
            .map(|name| Branch::new(*name, *name == current))
            .collect();
        Self {
            branches: RefCell::new(branches),
            ..Self::default()
        }
    }

    pub(crate) fn failing_checkout(mut self) -> Self {
        self.fail_checkout = true;
        self
    }

    pub(crate) fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub(crate) fn failing_prune(mut self) -> Self {
        self.fail_prune = true;
        self
    }

    pub(crate) fn failing_delete(mut self, branch: &str) -> Self {
        self.fail_delete.insert(branch.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn branch_names(&self) -> Vec<String> {
        self.branches
            .borrow()
            .iter()
            .map(|b| b.name.clone())
            .collect()
    }

    pub(crate) fn current(&self) -> Option<String> {
        self.branches
            .borrow()
            .iter()
            .find(|b| b.is_current)
            .map(|b| b.name.clone())
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Repository for FakeRepository {
    fn list_branches(&self) -> Result<Vec<Branch>> {
        self.record(Call::List);
        if self.fail_list {
            return Err(SweepError::GitError("bad object HEAD".to_string()));
        }
        Ok(self.branches.borrow().clone())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.record(Call::Checkout(branch.to_string()));
        if self.fail_checkout {
            return Err(SweepError::GitError(
                "your local changes would be overwritten by checkout".to_string(),
            ));
        }
        let mut branches = self.branches.borrow_mut();
        if !branches.iter().any(|b| b.name == branch) {
            return Err(SweepError::GitError(format!(
                "pathspec '{}' did not match any file(s) known to git",
                branch
            )));
        }
        for b in branches.iter_mut() {
            b.is_current = b.name == branch;
        }
        Ok(())
    }

    fn force_delete_branch(&self, branch: &str) -> Result<()> {
        self.record(Call::Delete(branch.to_string()));
        let mut branches = self.branches.borrow_mut();
        let is_current = branches.iter().any(|b| b.name == branch && b.is_current);
        if is_current || self.fail_delete.contains(branch) {
            return Err(SweepError::GitError(format!(
                "cannot delete branch '{}'",
                branch
            )));
        }
        branches.retain(|b| b.name != branch);
        Ok(())
    }

    fn prune_remote(&self, remote: &str) -> Result<()> {
        self.record(Call::PruneRemote(remote.to_string()));
        if self.fail_prune {
            return Err(SweepError::GitError(format!(
                "'{}' does not appear to be a git repository",
                remote
            )));
        }
        Ok(())
    }

    fn fetch_prune_all(&self) -> Result<()> {
        self.record(Call::FetchPruneAll);
        if self.fail_prune {
            return Err(SweepError::GitError("could not read from remote".to_string()));
        }
        Ok(())
    }
}
