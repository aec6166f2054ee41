use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::types::{Config, MAX_POLL_INTERVAL_MS, MIN_POLL_INTERVAL_MS};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/medsus-profile/config.toml` on Unix,
    /// or the platform equivalent via `dirs::config_dir()`.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("medsus-profile").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing default file is not an error: `Config::default()` is used.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], the file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The poll interval is within bounds
    /// - The log level is a known level filter
    pub fn validate(&self) -> Result<(), ConfigError> {
        let interval = self.ui.poll_interval_ms;
        if !(MIN_POLL_INTERVAL_MS..=MAX_POLL_INTERVAL_MS).contains(&interval) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "poll_interval_ms must be between {} and {}, got {}",
                    MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS, interval
                ),
            });
        }

        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Unknown log level '{}'", self.logging.level),
            });
        }

        Ok(())
    }
}
