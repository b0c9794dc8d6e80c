//! Branch purge: choose the candidates and delete them.

use super::types::PurgeOutcome;
use crate::config::FailurePolicy;
use crate::error::{Result, SweepError};
use crate::repo::{Branch, Repository};

/// Every branch except `protected`, in the order given.
///
/// Matching is exact: `main-backup` and `old-main` are candidates when
/// `main` is protected.
pub fn select_candidates(branches: &[Branch], protected: &str) -> Vec<String> {
    branches
        .iter()
        .filter(|b| !b.is_protected(protected))
        .map(|b| b.name.clone())
        .collect()
}

/// Enumerate local branches and select the deletion candidates.
pub fn collect_candidates<R: Repository + ?Sized>(
    repo: &R,
    protected: &str,
) -> Result<(Vec<Branch>, Vec<String>)> {
    let branches = repo
        .list_branches()
        .map_err(|e| SweepError::EnumerationError(format!("could not list local branches: {}", e)))?;
    let candidates = select_candidates(&branches, protected);
    log::info!(
        "{} local branch(es), {} candidate(s) for deletion",
        branches.len(),
        candidates.len()
    );
    Ok((branches, candidates))
}

/// Force-delete every candidate in order.
///
/// Under [`FailurePolicy::FailFast`] the first failure aborts with a
/// [`SweepError::DeletionError`]; branches already deleted stay deleted.
/// Under [`FailurePolicy::BestEffort`] failures are collected and returned.
pub(crate) fn delete_candidates<R: Repository + ?Sized>(
    repo: &R,
    candidates: &[String],
    policy: FailurePolicy,
) -> Result<PurgeOutcome> {
    let mut outcome = PurgeOutcome::default();

    if candidates.is_empty() {
        println!("No branches to delete.");
        return Ok(outcome);
    }

    for branch in candidates {
        match repo.force_delete_branch(branch) {
            Ok(()) => {
                println!("Deleted: {}", branch);
                outcome.deleted.push(branch.clone());
            }
            Err(e) => match policy {
                FailurePolicy::FailFast => {
                    return Err(SweepError::DeletionError(format!(
                        "failed to delete branch '{}': {}\n\n\
                         {} branch(es) deleted earlier in this run remain deleted; \
                         {} not attempted.",
                        branch,
                        e,
                        outcome.deleted.len(),
                        candidates.len() - outcome.deleted.len() - 1
                    )));
                }
                FailurePolicy::BestEffort => {
                    log::warn!("failed to delete '{}': {}", branch, e);
                    println!("Failed:  {}", branch);
                    outcome.failed.push((branch.clone(), e.to_string()));
                }
            },
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::fake::{Call, FakeRepository};

    fn branches(names: &[&str]) -> Vec<Branch> {
        names.iter().map(|n| Branch::new(*n, false)).collect()
    }

    #[test]
    fn test_select_excludes_only_protected() {
        let all = branches(&["feature-a", "main", "feature-b"]);
        assert_eq!(select_candidates(&all, "main"), vec!["feature-a", "feature-b"]);
    }

    #[test]
    fn test_select_is_exact_match_not_substring() {
        let all = branches(&["main", "main-backup", "old-main", "mainline", "Main"]);
        assert_eq!(
            select_candidates(&all, "main"),
            vec!["main-backup", "old-main", "mainline", "Main"]
        );
    }

    #[test]
    fn test_select_independent_of_ordering() {
        let names = ["c", "main", "a", "b"];
        for rotation in 0..names.len() {
            let mut rotated = names.to_vec();
            rotated.rotate_left(rotation);
            let expected: Vec<String> = rotated
                .iter()
                .filter(|n| **n != "main")
                .map(|n| n.to_string())
                .collect();
            assert_eq!(select_candidates(&branches(&rotated), "main"), expected);
        }
    }

    #[test]
    fn test_select_only_protected_is_empty() {
        assert!(select_candidates(&branches(&["main"]), "main").is_empty());
    }

    #[test]
    fn test_collect_candidates_enumeration_failure() {
        let repo = FakeRepository::new(&["main"], "main").failing_list();
        let err = collect_candidates(&repo, "main").unwrap_err();
        assert!(matches!(err, SweepError::EnumerationError(_)));
    }

    #[test]
    fn test_delete_empty_is_noop() {
        let repo = FakeRepository::new(&["main"], "main");
        let outcome = delete_candidates(&repo, &[], FailurePolicy::FailFast).unwrap();
        assert!(outcome.deleted.is_empty());
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let repo = FakeRepository::new(&["a", "b", "c", "main"], "main").failing_delete("b");
        let candidates = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        let err = delete_candidates(&repo, &candidates, FailurePolicy::FailFast).unwrap_err();
        assert!(matches!(err, SweepError::DeletionError(_)));
        assert!(err.to_string().contains("'b'"));
        assert_eq!(
            repo.calls(),
            vec![Call::Delete("a".to_string()), Call::Delete("b".to_string())]
        );
        // "a" stays deleted, "c" was never attempted
        assert_eq!(repo.branch_names(), vec!["b", "c", "main"]);
    }

    #[test]
    fn test_best_effort_attempts_every_candidate() {
        let repo = FakeRepository::new(&["a", "b", "c", "main"], "main").failing_delete("b");
        let candidates = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        let outcome = delete_candidates(&repo, &candidates, FailurePolicy::BestEffort).unwrap();
        assert_eq!(outcome.deleted, vec!["a", "c"]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].0, "b");
        assert_eq!(repo.branch_names(), vec!["b", "main"]);
    }
}
