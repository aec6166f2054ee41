use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::profile::ActiveTab;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tab shown on startup (default: personal).
    #[serde(default)]
    pub initial_tab: ActiveTab,
    /// How long one event poll may block, in milliseconds (default: 250).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

/// Diagnostic log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level filter: trace, debug, info, warn, error or off (default: info).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<cache dir>/medsus-profile/profile.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

pub const MIN_POLL_INTERVAL_MS: u64 = 10;
pub const MAX_POLL_INTERVAL_MS: u64 = 5000;

fn default_poll_interval_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_tab: ActiveTab::default(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    pub fn log_path(&self) -> PathBuf {
        if let Some(file) = &self.file {
            return file.clone();
        }
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("medsus-profile").join("profile.log")
    }
}
