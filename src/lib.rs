// ABOUTME: Library crate for ghostty-manager exposing public API for testing and external use

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod project;
pub mod prompt;
pub mod terminal;
pub mod tmux;
