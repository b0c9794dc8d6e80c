use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The process working directory is global; serialize every test that moves it.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Repository on `main` with one commit and no remotes.
pub(crate) fn create_test_repo() -> TempDir {
    create_repo(false)
}

/// Repository whose `origin` remote points back at itself, so fetch and
/// prune work without a network.
pub(crate) fn create_test_repo_with_remote() -> TempDir {
    create_repo(true)
}

fn create_repo(add_origin_remote: bool) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic default branch name regardless of init.defaultBranch.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    if add_origin_remote {
        let path_str = path.to_string_lossy().to_string();
        git(path, &["remote", "add", "origin", &path_str]);
        git(path, &["fetch", "origin"]);
    }

    temp_dir
}

/// Create `name` at HEAD without switching to it.
pub(crate) fn create_branch(repo_dir: &Path, name: &str) {
    git(repo_dir, &["branch", name]);
}

pub(crate) fn branch_exists(repo_dir: &Path, name: &str) -> bool {
    ref_exists(repo_dir, &format!("refs/heads/{}", name))
}

pub(crate) fn remote_ref_exists(repo_dir: &Path, remote: &str, name: &str) -> bool {
    ref_exists(repo_dir, &format!("refs/remotes/{}/{}", remote, name))
}

pub(crate) fn current_branch(repo_dir: &Path) -> String {
    git(repo_dir, &["rev-parse", "--abbrev-ref", "HEAD"])
}

fn ref_exists(repo_dir: &Path, full_ref: &str) -> bool {
    Command::new("git")
        .current_dir(repo_dir)
        .args(["show-ref", "--verify", "--quiet", full_ref])
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run git and panic with full output on failure. Returns trimmed stdout.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
