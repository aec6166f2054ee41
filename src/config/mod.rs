pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, UiConfig, MAX_POLL_INTERVAL_MS, MIN_POLL_INTERVAL_MS};
