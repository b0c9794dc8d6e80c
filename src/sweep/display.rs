//! Output formatting for sweep plans and summaries.

use super::types::{SweepMode, SweepOptions, SweepReport};
use crate::repo::Branch;

/// Print what a sweep would do without doing it.
pub fn print_plan(options: &SweepOptions, branches: &[Branch], candidates: &[String]) {
    println!("Sweep plan:");
    println!();
    println!("  Protected branch: {}", options.protected_branch);

    match &options.mode {
        SweepMode::Checkout => {
            println!("  1. Check out '{}'", options.protected_branch);
            println!("  2. Delete {} branch(es)", candidates.len());
            println!("  3. Fetch all remotes with --prune");
        }
        SweepMode::Override { anchor } => {
            println!("  Checkout skipped (override: '{}')", anchor);
            println!("  1. Prune remote '{}'", options.remote);
            println!("  2. Delete {} branch(es)", candidates.len());
        }
    }
    println!();

    if candidates.is_empty() {
        println!("No branches to delete.");
        return;
    }

    println!("Branches to delete ({}):", candidates.len());
    for name in candidates {
        let marker = branches
            .iter()
            .find(|b| &b.name == name && b.is_current)
            .map(|_| " (checked out)")
            .unwrap_or_default();
        println!("  - {}{}", name, marker);
    }
}

/// Print the end-of-run summary.
pub fn print_summary(report: &SweepReport) {
    println!();
    if report.dry_run {
        println!("Dry-run mode: no changes made.");
        println!("Run without --dry-run to perform the sweep.");
        return;
    }

    println!("Sweep complete:");
    println!("  Deleted: {} branch(es)", report.deleted.len());
    if let Some(path) = &report.log_path {
        println!("  Log:     {}", path.display());
    }
    if !report.failed.is_empty() {
        println!("  Failed:  {} branch(es)", report.failed.len());
        for (branch, reason) in &report.failed {
            println!("    - {}: {}", branch, reason);
        }
    }
}
