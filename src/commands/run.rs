//! Implementation of a `branch-sweep` run.
//!
//! Merges `.branch-sweep.yaml` with command-line overrides, resolves the
//! repository, and drives the sweep against the real `git` binary.
//!
//! # Precedence
//!
//! Flags beat the config file, which beats built-in defaults. A `--log-dir`
//! flag is relative to the current directory; a `log_dir` in the config file
//! is relative to the repository root.

use crate::cli::SweepArgs;
use crate::config::{Config, FailurePolicy};
use crate::context::SweepContext;
use crate::error::Result;
use crate::repo::GitCli;
use crate::sweep::{SweepMode, SweepOptions, print_summary, run_sweep};
use std::path::Path;

/// Execute a sweep from the current working directory.
pub fn cmd_run(args: SweepArgs) -> Result<()> {
    let ctx = SweepContext::resolve()?;
    let config = load_config(&ctx, &args)?;
    let options = build_options(&ctx, config, args)?;

    let repo = GitCli::new(&ctx.repo_root);
    log::info!(
        "sweeping {} (protected: {}, mode: {:?})",
        repo.repo_root().display(),
        options.protected_branch,
        options.mode
    );

    let report = run_sweep(&repo, &options)?;
    print_summary(&report);
    report.ensure_complete()?;

    if !report.dry_run {
        println!("Done.");
    }
    Ok(())
}

/// Load the explicit `--config` file, or the repository's optional one.
fn load_config(ctx: &SweepContext, args: &SweepArgs) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load(SweepContext::absolutize(&ctx.cwd, path)),
        None => Config::load_or_default(&ctx.repo_root),
    }
}

/// Apply flag overrides to `config` and produce the sweep options.
fn build_options(ctx: &SweepContext, mut config: Config, args: SweepArgs) -> Result<SweepOptions> {
    if let Some(protected) = args.protected {
        config.protected_branch = protected;
    }
    if let Some(remote) = args.remote {
        config.remote = remote;
    }
    if args.no_log {
        config.write_log = false;
    }
    if args.keep_going {
        config.failure_policy = FailurePolicy::BestEffort;
    }
    config.validate()?;

    let log_dir = if !config.write_log {
        None
    } else if let Some(dir) = &args.log_dir {
        Some(SweepContext::absolutize(&ctx.cwd, dir))
    } else if let Some(dir) = &config.log_dir {
        Some(SweepContext::absolutize(&ctx.repo_root, Path::new(dir)))
    } else {
        Some(ctx.cwd.clone())
    };

    Ok(SweepOptions {
        protected_branch: config.protected_branch,
        remote: config.remote,
        mode: SweepMode::from_anchor(args.anchor),
        log_dir,
        failure_policy: config.failure_policy,
        dry_run: args.dry_run,
    })
}
