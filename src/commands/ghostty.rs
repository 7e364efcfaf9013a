// ABOUTME: `start`, `stop` and `status` commands for the Ghostty process

use crate::cli::StartArgs;
use crate::commands::{fail, info, note, succeed};
use crate::terminal::{Ghostty, LaunchOptions, StartOutcome, StopOutcome};
use anyhow::{Context, Result};
use crossterm::style::Stylize;

impl From<StartArgs> for LaunchOptions {
    fn from(args: StartArgs) -> Self {
        Self {
            config_file: args.config,
            working_directory: args.directory,
            title: args.title,
            command: Vec::new(),
        }
    }
}

pub async fn start(ghostty: &Ghostty, args: StartArgs) -> Result<()> {
    let options = LaunchOptions::from(args);

    match ghostty
        .start(&options)
        .await
        .context("Failed to start Ghostty")?
    {
        StartOutcome::AlreadyRunning => info("Ghostty is already running"),
        StartOutcome::Started(_) => succeed("Ghostty started successfully"),
    }
    Ok(())
}

pub async fn stop(ghostty: &Ghostty) -> Result<()> {
    match ghostty.stop().await {
        Ok(StopOutcome::Stopped(_)) => succeed("Ghostty stopped"),
        Ok(StopOutcome::NotRunning) => info("Ghostty is not running"),
        Err(e) => {
            tracing::error!("Failed to stop Ghostty: {}", e);
            fail(format!("Failed to stop Ghostty: {}", e));
        }
    }
    Ok(())
}

pub async fn status(ghostty: &Ghostty) -> Result<()> {
    let pids = ghostty.pids().await.unwrap_or_else(|e| {
        tracing::warn!("Could not query Ghostty processes: {}", e);
        Vec::new()
    });

    if pids.is_empty() {
        println!("{} Ghostty is not running", "○".red());
    } else {
        println!("{} Ghostty is running", "●".green());
        let pids: Vec<String> = pids.iter().map(u32::to_string).collect();
        note(format!("  PID: {}", pids.join(" ")));
    }
    Ok(())
}
