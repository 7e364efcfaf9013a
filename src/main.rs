// ABOUTME: Main entry point for the ghostty-manager CLI

use anyhow::Result;
use clap::Parser;
use ghostty_manager::cli::Cli;
use ghostty_manager::commands;
use ghostty_manager::config::AppPaths;
use ghostty_manager::logging::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = AppPaths::discover()?;

    setup_logging(&paths.log_dir, cli.verbose);
    tracing::debug!("Running {:?}", cli.command);

    if let Err(e) = commands::run(cli.command, &paths).await {
        tracing::error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
