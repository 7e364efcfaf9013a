// ABOUTME: Host-based tmux session management
// Manages tmux sessions running directly on the host machine

pub mod error;
pub mod session;

pub use error::TmuxError;
pub use session::{parse_session_list, SessionSummary, Tmux};
