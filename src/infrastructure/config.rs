//! Configuration management

use crate::domain::Category;
use crate::error::{NotekeepError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of recent notes shown per category in the summary
pub const DEFAULT_RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "default_category_id")]
    pub default_category: String,
    pub created: DateTime<Utc>,
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_category_id() -> String {
    Category::default_category().id.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            recent_limit: DEFAULT_RECENT_LIMIT,
            default_category: default_category_id(),
            created: Utc::now(),
        }
    }

    /// Load config from .notekeep/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".notekeep").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NotekeepError::NotInitialized(path.to_path_buf())
            } else {
                NotekeepError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .notekeep/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let notekeep_dir = path.join(".notekeep");
        let config_path = notekeep_dir.join("config.toml");

        if !notekeep_dir.exists() {
            fs::create_dir(&notekeep_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Reject values that would make the notebook unusable
    pub fn validate(&self) -> Result<()> {
        if self.recent_limit == 0 {
            return Err(NotekeepError::Config(
                "recent_limit must be at least 1".to_string(),
            ));
        }
        Category::require(&self.default_category)?;
        Ok(())
    }
}
