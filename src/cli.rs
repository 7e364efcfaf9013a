// ABOUTME: Command-line surface for ghostty-manager, defined with clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "ghostty-manager",
    version,
    about = "CLI terminal manager for Ghostty workflow automation"
)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start Ghostty terminal
    Start(StartArgs),
    /// Stop Ghostty terminal
    Stop,
    /// Check Ghostty status
    Status,
    /// Manage tmux sessions
    #[command(subcommand, visible_alias = "s")]
    Session(SessionCommand),
    /// Manage Ghostty configuration
    #[command(subcommand, visible_alias = "c")]
    Config(ConfigCommand),
    /// Manage projects
    #[command(subcommand, visible_alias = "p")]
    Project(ProjectCommand),
}

#[derive(Debug, Args, Default)]
pub struct StartArgs {
    /// Use specific config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Working directory
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<PathBuf>,
    /// Window title
    #[arg(short, long)]
    pub title: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// List all tmux sessions
    #[command(visible_alias = "ls")]
    List,
    /// Create new tmux session
    Create {
        name: String,
        /// Working directory
        #[arg(short, long, value_name = "DIR")]
        directory: Option<PathBuf>,
        /// Initial window name
        #[arg(short, long, default_value = "main")]
        window: String,
    },
    /// Attach to tmux session
    #[command(visible_alias = "a")]
    Attach { name: String },
    /// Kill tmux session
    #[command(visible_alias = "k")]
    Kill {
        name: Option<String>,
        /// Kill all sessions
        #[arg(short, long)]
        all: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Get config value
    Get { key: String },
    /// Set config value
    Set { key: String, value: String },
    /// List all config values
    #[command(visible_alias = "ls")]
    List,
    /// Reset config to defaults
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// Open project in Ghostty
    Open {
        name: String,
        /// Project directory, defaults to ~/dev/<name>
        #[arg(short, long, value_name = "DIR")]
        directory: Option<PathBuf>,
    },
    /// List available projects
    List,
}
