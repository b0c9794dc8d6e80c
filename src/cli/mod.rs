//! CLI argument parsing for branch-sweep.
//!
//! Uses clap derive macros for declarative argument definitions. The sweep
//! itself lives in the `commands` and `sweep` modules.

use clap::Parser;
use std::path::PathBuf;

/// Delete every local branch except the protected one, then prune stale
/// remote-tracking references.
///
/// With no ANCHOR: check out the protected branch, record the branches about
/// to be deleted in `deleted_branches_<timestamp>.log`, force-delete them,
/// then fetch all remotes with --prune.
///
/// With an ANCHOR: leave the current checkout alone, prune the remote first,
/// then force-delete. No log is written.
#[derive(Parser, Debug)]
#[command(name = "branch-sweep")]
#[command(author, version, about, long_about)]
pub struct Cli {
    #[command(flatten)]
    pub args: SweepArgs,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Arguments for a sweep run.
#[derive(Parser, Debug, Default)]
pub struct SweepArgs {
    /// Skip the checkout of the protected branch. Conventionally the name of
    /// the branch you are already on; the value is not otherwise used.
    pub anchor: Option<String>,

    /// Branch that is never deleted (default: main).
    #[arg(long, value_name = "BRANCH")]
    pub protected: Option<String>,

    /// Remote pruned when ANCHOR is given (default: origin).
    #[arg(long)]
    pub remote: Option<String>,

    /// Directory for the deletion log (default: current directory).
    #[arg(long, value_name = "DIR", conflicts_with = "no_log")]
    pub log_dir: Option<PathBuf>,

    /// Do not write a deletion log.
    #[arg(long)]
    pub no_log: bool,

    /// Keep deleting after a failure and report every failed branch at the end.
    #[arg(long)]
    pub keep_going: bool,

    /// Print the plan without changing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Config file to use instead of `<repo>/.branch-sweep.yaml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
