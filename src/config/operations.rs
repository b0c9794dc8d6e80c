//! Config loading and validation.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{Result, SweepError};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SweepError::UserError)` - Read, parse, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SweepError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.branch-sweep.yaml` from `repo_root`, or the defaults if it is absent.
    pub fn load_or_default<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let path = repo_root.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            log::info!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SweepError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `protected_branch` and `remote` must be non-empty, must not start
    ///   with `-`, and must not contain whitespace
    /// - `log_dir`, when set, must be non-empty
    pub fn validate(&self) -> Result<()> {
        validate_name("protected_branch", &self.protected_branch)?;
        validate_name("remote", &self.remote)?;

        if let Some(dir) = &self.log_dir
            && dir.trim().is_empty()
        {
            return Err(SweepError::UserError(
                "config validation failed: log_dir must not be empty when set".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_name(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SweepError::UserError(format!(
            "config validation failed: {} must not be empty",
            field
        )));
    }
    if value.starts_with('-') {
        return Err(SweepError::UserError(format!(
            "config validation failed: {} must not start with '-' (found '{}')",
            field, value
        )));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(SweepError::UserError(format!(
            "config validation failed: {} must not contain whitespace (found '{}')",
            field, value
        )));
    }
    Ok(())
}
