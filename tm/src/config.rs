//! taskman configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use todostore::MAX_TASK_LEN;

/// Main taskman configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Task list view tuning
    pub ui: UiConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Call this early in startup to fail fast with clear error messages.
    pub fn validate(&self) -> Result<()> {
        if self.ui.page_size == 0 {
            return Err(eyre::eyre!("ui.page-size must be at least 1"));
        }
        if self.ui.max_task_len == 0 {
            return Err(eyre::eyre!("ui.max-task-len must be at least 1"));
        }
        if self.ui.page_range == 0 {
            return Err(eyre::eyre!("ui.page-range must be at least 1"));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .taskman.yml
        let local_config = PathBuf::from(".taskman.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/taskman/taskman.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("taskman").join("taskman.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Task list view tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tasks per page
    #[serde(rename = "page-size")]
    pub page_size: usize,

    /// Maximum task text length in characters
    #[serde(rename = "max-task-len")]
    pub max_task_len: usize,

    /// Boundary pages always shown in the pagination strip
    #[serde(rename = "page-margin")]
    pub page_margin: usize,

    /// Pages shown around the active page in the pagination strip
    #[serde(rename = "page-range")]
    pub page_range: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            max_task_len: MAX_TASK_LEN,
            page_margin: 2,
            page_range: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.ui.page_size, 5);
        assert_eq!(config.ui.max_task_len, 40);
        assert_eq!(config.ui.page_margin, 2);
        assert_eq!(config.ui.page_range, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
ui:
  page-size: 10
  max-task-len: 60
  page-margin: 1
  page-range: 3
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.ui.page_size, 10);
        assert_eq!(config.ui.max_task_len, 60);
        assert_eq!(config.ui.page_margin, 1);
        assert_eq!(config.ui.page_range, 3);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
ui:
  page-size: 7
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.ui.page_size, 7);

        // Defaults for unspecified
        assert_eq!(config.ui.max_task_len, 40);
        assert_eq!(config.ui.page_margin, 2);
    }

    #[test]
    fn test_validation_rejects_zero_page_size() {
        let mut config = Config::default();
        config.ui.page_size = 0;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("page-size"));
    }

    #[test]
    fn test_validation_rejects_zero_length_cap() {
        let mut config = Config::default();
        config.ui.max_task_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taskman.yml");
        fs::write(&path, "ui:\n  page-size: 3\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.ui.page_size, 3);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let path = PathBuf::from("/nonexistent/taskman.yml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
