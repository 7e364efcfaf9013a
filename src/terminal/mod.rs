// ABOUTME: Ghostty terminal emulator process management
// Launches Ghostty windows detached and finds or stops running instances

pub mod error;
pub mod ghostty;
pub mod process;

pub use error::TerminalError;
pub use ghostty::{Ghostty, LaunchOptions, StartOutcome, StopOutcome, GHOSTTY_BIN};
