//! Config struct definition and defaults.

use serde::Deserialize;

/// File name looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".branch-sweep.yaml";

/// What to do when a candidate branch cannot be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Abort the run at the first failed deletion (default).
    #[default]
    FailFast,
    /// Attempt every candidate, then report all failures together.
    BestEffort,
}

/// Contents of `.branch-sweep.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The one branch that is never deleted.
    #[serde(default = "default_protected_branch")]
    pub protected_branch: String,

    /// Remote pruned when the checkout is skipped.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Whether checkout-mode runs write a deletion log.
    #[serde(default = "default_true")]
    pub write_log: bool,

    /// Directory for deletion logs. Unset means the current directory.
    #[serde(default)]
    pub log_dir: Option<String>,

    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protected_branch: default_protected_branch(),
            remote: default_remote(),
            write_log: default_true(),
            log_dir: None,
            failure_policy: FailurePolicy::default(),
        }
    }
}

fn default_protected_branch() -> String {
    "main".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_true() -> bool {
    true
}
