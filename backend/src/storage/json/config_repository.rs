//! # App Config Repository
//!
//! Tunable settings stored as YAML in `luckracle_config.yaml` at the root of
//! the data directory. The file is created with defaults on first access.
//!
//! ```yaml
//! history_limit: 10
//! favorite_bias_percent: 25
//! data_format_version: "1.0"
//! created_at: "2025-01-21T19:30:00Z"
//! updated_at: "2025-01-21T19:35:00Z"
//! ```

use anyhow::Result;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;

use super::connection::JsonConnection;
use crate::domain::number_generator::DEFAULT_FAVORITE_BIAS_PERCENT;
use crate::storage::traits::DEFAULT_HISTORY_LIMIT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How many past generations the history keeps
    pub history_limit: usize,
    /// Chance (0-100) that a primary draw is replaced by the favorite number
    pub favorite_bias_percent: u32,
    /// Data format version for future migrations
    pub data_format_version: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            favorite_bias_percent: DEFAULT_FAVORITE_BIAS_PERCENT,
            data_format_version: "1.0".to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(anyhow::anyhow!("history_limit must be at least 1"));
        }
        if self.favorite_bias_percent > 100 {
            return Err(anyhow::anyhow!(
                "favorite_bias_percent must be between 0 and 100, got {}",
                self.favorite_bias_percent
            ));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct ConfigRepository {
    connection: JsonConnection,
}

impl ConfigRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Load the config, writing a default file if none exists
    pub fn get_config(&self) -> Result<AppConfig> {
        let config_path = self.connection.config_file_path();

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)?;
            let config: AppConfig = serde_yaml::from_str(&yaml_content)?;
            config.validate()?;
            debug!("Loaded app config from {:?}", config_path);
            Ok(config)
        } else {
            let config = AppConfig::default();
            self.save_config(&config)?;
            info!("Created default app config at {:?}", config_path);
            Ok(config)
        }
    }

    pub fn update_config(&self, config: &AppConfig) -> Result<()> {
        config.validate()?;

        let mut updated_config = config.clone();
        updated_config.updated_at = Utc::now().to_rfc3339();

        self.save_config(&updated_config)?;
        info!("Updated app config");
        Ok(())
    }

    fn save_config(&self, config: &AppConfig) -> Result<()> {
        let yaml_content = serde_yaml::to_string(config)?;
        self.connection
            .write_atomic(&self.connection.config_file_path(), &yaml_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::TestEnvironment;

    #[test]
    fn test_get_config_creates_default() {
        let env = TestEnvironment::new().unwrap();
        let repo = ConfigRepository::new(env.connection.clone());

        let config = repo.get_config().unwrap();
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.favorite_bias_percent, 25);
        assert_eq!(config.data_format_version, "1.0");
        assert!(!config.created_at.is_empty());
        assert!(env.connection.config_file_path().exists());
    }

    #[test]
    fn test_update_config_persists() {
        let env = TestEnvironment::new().unwrap();
        let repo = ConfigRepository::new(env.connection.clone());

        let mut config = repo.get_config().unwrap();
        config.history_limit = 5;
        config.favorite_bias_percent = 27;
        repo.update_config(&config).unwrap();

        // Simulate an app restart
        let connection = JsonConnection::new(env.base_directory()).unwrap();
        let reloaded = ConfigRepository::new(connection).get_config().unwrap();
        assert_eq!(reloaded.history_limit, 5);
        assert_eq!(reloaded.favorite_bias_percent, 27);
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_keys() {
        let env = TestEnvironment::new().unwrap();
        fs::write(env.connection.config_file_path(), "history_limit: 3\n").unwrap();

        let config = ConfigRepository::new(env.connection.clone()).get_config().unwrap();
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.favorite_bias_percent, 25);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let env = TestEnvironment::new().unwrap();
        let repo = ConfigRepository::new(env.connection.clone());

        let mut config = AppConfig::default();
        config.history_limit = 0;
        assert!(repo.update_config(&config).is_err());

        config.history_limit = 10;
        config.favorite_bias_percent = 150;
        let err = repo.update_config(&config).unwrap_err();
        assert!(err.to_string().contains("favorite_bias_percent"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let env = TestEnvironment::new().unwrap();
        fs::write(env.connection.config_file_path(), "history_limit: [oops").unwrap();

        assert!(ConfigRepository::new(env.connection.clone()).get_config().is_err());
    }
}
