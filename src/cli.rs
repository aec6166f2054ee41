use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::profile::ActiveTab;

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "medsus-profile",
    version,
    about = "Edit your MedSUS profile from the terminal"
)]
pub struct Cli {
    /// Config file to load (must exist when given)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tab to open on startup: personal, medical or preferences
    #[arg(long, value_name = "TAB")]
    pub tab: Option<ActiveTab>,

    /// Override the configured log level
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Override the configured log file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(tab) = self.tab {
            config.ui.initial_tab = tab;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}
