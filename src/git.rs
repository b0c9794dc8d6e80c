//! Subprocess access to `git`.
//!
//! The sweep only needs pass/fail plus plain text back from git, so every
//! call is a blocking `git <args>` in the repository directory with both
//! streams captured. [`run_git`] is the path used by [`crate::repo::GitCli`];
//! [`get_repo_root`] is used once at startup to locate the working tree.

use crate::error::{Result, SweepError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured, trimmed output of a finished git process.
#[derive(Debug, Clone)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// The stream worth showing an operator: stderr, or stdout if stderr is empty.
    fn diagnostic(&self) -> &str {
        if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Spawn git, wait for it, and return its exit status alongside the output.
fn spawn(cwd: &Path, args: &[&str]) -> std::io::Result<(Option<i32>, GitOutput)> {
    log::debug!("git {} (in {})", args.join(" "), cwd.display());
    let output = Command::new("git").current_dir(cwd).args(args).output()?;

    let captured = GitOutput {
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    };
    let code = if output.status.success() {
        None
    } else {
        Some(output.status.code().unwrap_or(-1))
    };
    Ok((code, captured))
}

/// Run `git <args>` inside `cwd`.
///
/// A non-zero exit becomes [`SweepError::GitError`] carrying the subcommand,
/// exit code and git's own message. Callers wrap it with the stage that failed.
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let subcommand = args.first().copied().unwrap_or("");

    let (failure, output) = spawn(cwd.as_ref(), args).map_err(|e| {
        SweepError::GitError(format!("could not start git {}: {}", subcommand, e))
    })?;

    match failure {
        None => Ok(output),
        Some(code) => {
            log::debug!("git {} exited with {}", subcommand, code);
            Err(SweepError::GitError(format!(
                "git {} failed (exit code {}): {}",
                subcommand,
                code,
                output.diagnostic()
            )))
        }
    }
}

/// Top level of the working tree containing `cwd`.
///
/// Being outside a repository is the operator's mistake, so it maps to
/// [`SweepError::UserError`] (exit 1) rather than a git failure.
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let (failure, output) = spawn(cwd.as_ref(), &["rev-parse", "--show-toplevel"])
        .map_err(|e| SweepError::UserError(format!("could not start git: {} (is git installed?)", e)))?;

    match failure {
        None => Ok(PathBuf::from(&output.stdout)),
        Some(_) if output.stderr.contains("not a git repository") => Err(SweepError::UserError(
            "not inside a git repository. Run this command from within a git repository."
                .to_string(),
        )),
        Some(_) => Err(SweepError::UserError(format!(
            "could not locate the repository root: {}",
            output.diagnostic()
        ))),
    }
}
