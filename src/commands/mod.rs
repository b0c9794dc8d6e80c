//! Command implementations for branch-sweep.
//!
//! The binary has a single command; `dispatch` exists so `main` stays a thin
//! parse-run-exit shell.

mod run;

use crate::cli::Cli;
use crate::error::Result;

/// Execute the parsed command line.
pub fn dispatch(cli: Cli) -> Result<()> {
    run::cmd_run(cli.args)
}
