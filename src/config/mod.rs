// ABOUTME: ghostty-manager settings: the JSON store, Ghostty config mirroring and paths

pub mod error;
pub mod paths;
pub mod store;
pub mod sync;

pub use error::ConfigError;
pub use paths::AppPaths;
pub use store::{defaults, ConfigStore, ResetOutcome, DEFAULTS};
pub use sync::{upsert_line, GhosttyConfigFile};
