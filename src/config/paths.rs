// ABOUTME: Filesystem locations used by ghostty-manager
// All paths derive from a single home directory so tests can point them at a temp dir

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "ghostty-manager";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub home: PathBuf,
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
    /// Ghostty's own plain-text config, patched by `config set`
    pub ghostty_config: PathBuf,
    pub projects_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl AppPaths {
    /// Resolve paths under the current user's home directory
    pub fn discover() -> Result<Self> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(Self::from_home(&home))
    }

    pub fn from_home(home: &Path) -> Self {
        let dot_config = home.join(".config");
        let config_dir = dot_config.join(APP_DIR_NAME);

        Self {
            home: home.to_path_buf(),
            config_file: config_dir.join(CONFIG_FILE_NAME),
            log_dir: config_dir.join("logs"),
            config_dir,
            ghostty_config: dot_config.join("ghostty").join("config"),
            projects_dir: home.join("dev"),
        }
    }

    /// Default working directory for `project open <name>`
    pub fn project_dir(&self, name: &str) -> PathBuf {
        self.projects_dir.join(name)
    }
}
