// ABOUTME: `session` subcommands: list, create, attach (in a new Ghostty window) and kill

use crate::commands::{fail, info, note, succeed};
use crate::terminal::{Ghostty, LaunchOptions};
use crate::tmux::{Tmux, TmuxError};
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use std::path::PathBuf;
use tracing::debug;

pub async fn list() -> Result<()> {
    let sessions = Tmux::list_sessions().await.unwrap_or_else(|e| {
        debug!("Failed to list tmux sessions: {}", e);
        Vec::new()
    });

    if sessions.is_empty() {
        println!("{}", "No tmux sessions found".yellow());
        return Ok(());
    }

    println!("{}", "\nActive sessions:\n".bold());
    for session in sessions {
        let windows = session
            .windows
            .map_or_else(|| "?".to_string(), |n| n.to_string());
        let status = if session.attached {
            "(attached)".green()
        } else {
            "(detached)".dark_grey()
        };
        println!(
            "  {} {} {} {}",
            "●".blue(),
            session.name.bold(),
            format!("({} windows)", windows).dark_grey(),
            status
        );
    }
    println!();
    Ok(())
}

pub async fn create(name: &str, directory: Option<PathBuf>, window: &str) -> Result<()> {
    let directory = match directory {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    match Tmux::create_session(name, window, &directory).await {
        Ok(()) => {
            succeed(format!("Session \"{}\" created", name));
            note(format!("  Directory: {}", directory.display()));
            note(format!("  Window: {}", window));
            println!(
                "{}",
                format!("\nRun: ghostty-manager session attach {}", name).blue()
            );
        }
        Err(TmuxError::SessionExists(_)) => info(format!("Session \"{}\" already exists", name)),
        Err(e) => fail(format!("Failed to create session: {}", e)),
    }
    Ok(())
}

pub async fn attach(ghostty: &Ghostty, name: &str) -> Result<()> {
    if !Tmux::has_session(name).await {
        println!("{}", format!("Session \"{}\" not found", name).red());
        note("Run: ghostty-manager session list to see available sessions");
        return Ok(());
    }

    match ghostty.launch(&LaunchOptions::running(Tmux::attach_command(name))) {
        Ok(_) => println!("{}", format!("Attached to session: {}", name).green()),
        Err(e) => fail(format!("Failed to attach to session: {}", e)),
    }
    Ok(())
}

pub async fn kill(name: Option<&str>, all: bool) -> Result<()> {
    if all {
        match Tmux::kill_all().await {
            Ok(()) => succeed("All sessions killed"),
            Err(e) => fail(format!("Failed to kill sessions: {}", e)),
        }
        return Ok(());
    }

    let Some(name) = name else {
        fail("Session name required");
        return Ok(());
    };

    match Tmux::kill_session(name).await {
        Ok(()) => succeed(format!("Session \"{}\" killed", name)),
        Err(e) => fail(format!("Failed to kill session: {}", e)),
    }
    Ok(())
}
