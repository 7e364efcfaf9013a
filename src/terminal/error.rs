// ABOUTME: Error types for Ghostty process control
// Covers launching, querying and signalling the terminal emulator process

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Failed to launch {program}: {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Process query failed: {0}")]
    QueryFailed(String),

    #[error("Invalid pid: {0}")]
    InvalidPid(u32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Nix error: {0}")]
    NixError(#[from] nix::Error),
}
