// ABOUTME: Command handlers that turn parsed CLI commands into operations and status output
// Handlers print human-readable lines; only failures that stop a command outright return Err

pub mod config;
pub mod ghostty;
pub mod project;
pub mod session;

use crate::cli::{Command, ConfigCommand, ProjectCommand, SessionCommand};
use crate::config::AppPaths;
use crate::prompt::StdinConfirm;
use crate::terminal::Ghostty;
use anyhow::Result;
use crossterm::style::Stylize;
use std::fmt::Display;

pub async fn run(command: Command, paths: &AppPaths) -> Result<()> {
    let ghostty = Ghostty::default();

    match command {
        Command::Start(args) => ghostty::start(&ghostty, args).await,
        Command::Stop => ghostty::stop(&ghostty).await,
        Command::Status => ghostty::status(&ghostty).await,
        Command::Session(command) => match command {
            SessionCommand::List => session::list().await,
            SessionCommand::Create {
                name,
                directory,
                window,
            } => session::create(&name, directory, &window).await,
            SessionCommand::Attach { name } => session::attach(&ghostty, &name).await,
            SessionCommand::Kill { name, all } => session::kill(name.as_deref(), all).await,
        },
        Command::Config(command) => match command {
            ConfigCommand::Get { key } => config::get(paths, &key),
            ConfigCommand::Set { key, value } => config::set(paths, &key, &value),
            ConfigCommand::List => config::list(paths),
            ConfigCommand::Reset { force } => config::reset(paths, force, &mut StdinConfirm),
        },
        Command::Project(command) => match command {
            ProjectCommand::Open { name, directory } => {
                project::open(&ghostty, paths, &name, directory)
            }
            ProjectCommand::List => project::list(paths),
        },
    }
}

pub(crate) fn succeed(message: impl Display) {
    println!("{} {}", "✔".green(), message);
}

pub(crate) fn info(message: impl Display) {
    println!("{} {}", "ℹ".blue(), message);
}

pub(crate) fn fail(message: impl Display) {
    println!("{} {}", "✖".red(), message);
}

pub(crate) fn note(message: impl Display) {
    println!("{}", message.to_string().dark_grey());
}
