//! Config management use case

use crate::domain::Category;
use crate::error::{NotekeepError, Result};
use crate::infrastructure::{Config, Notebook};

/// Service for managing notebook configuration
pub struct ConfigService {
    notebook: Notebook,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(notebook: Notebook) -> Self {
        ConfigService { notebook }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.notebook.load_config()?;

        match key {
            "recent_limit" => Ok(config.recent_limit.to_string()),
            "default_category" => Ok(config.default_category),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(NotekeepError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: recent_limit, default_category, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.notebook.load_config()?;

        match key {
            "recent_limit" => {
                config.recent_limit = value.parse().map_err(|_| {
                    NotekeepError::Config(format!(
                        "Invalid recent_limit: '{}'. Expected a positive number",
                        value
                    ))
                })?;
            }
            "default_category" => {
                config.default_category = Category::require(value)?.id.to_string();
            }
            "created" => {
                return Err(NotekeepError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(NotekeepError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: recent_limit, default_category",
                    key
                )));
            }
        }

        config.validate()?;
        self.notebook.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.notebook.load_config()
    }
}
