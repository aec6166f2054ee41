use anyhow::Context;
use clap::Parser;

use medsus_profile::cli::Cli;
use medsus_profile::config::Config;
use medsus_profile::logging::init_tracing;
use medsus_profile::submission::LocalAckSink;
use medsus_profile::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("Invalid command-line override")?;

    let log_path = init_tracing(&config.logging).context("Failed to initialize logging")?;
    tracing::info!(
        log_file = %log_path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "Starting medsus-profile"
    );

    runtime::run(&config, Box::new(LocalAckSink::new())).context("Terminal UI failed")?;
    Ok(())
}
