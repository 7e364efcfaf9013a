// ABOUTME: Error types for tmux session management
// Defines error conditions that can occur when managing host tmux sessions

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("Tmux not installed on host")]
    TmuxNotInstalled,

    #[error("Session already exists: {0}")]
    SessionExists(String),

    #[error("tmux {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
