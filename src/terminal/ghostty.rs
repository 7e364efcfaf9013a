// ABOUTME: Ghostty terminal control: launch with options, stop, and report status
// Builds Ghostty's command line and delegates to the process primitives

use crate::terminal::error::TerminalError;
use crate::terminal::process;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::info;

pub const GHOSTTY_BIN: &str = "ghostty";

/// Command-line options for a Ghostty window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub config_file: Option<PathBuf>,
    pub working_directory: Option<PathBuf>,
    pub title: Option<String>,
    /// Program and arguments passed after `-e`
    pub command: Vec<String>,
}

impl LaunchOptions {
    /// Options that run `command` inside the new window.
    pub fn running<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// True when nothing beyond a bare `ghostty` launch was requested.
    pub fn is_plain(&self) -> bool {
        self == &Self::default()
    }

    pub fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();

        if let Some(config) = &self.config_file {
            args.push("--config-file".into());
            args.push(config.into());
        }
        if let Some(dir) = &self.working_directory {
            args.push("--working-directory".into());
            args.push(dir.into());
        }
        if let Some(title) = &self.title {
            args.push("--title".into());
            args.push(title.into());
        }
        if !self.command.is_empty() {
            args.push("-e".into());
            args.extend(self.command.iter().map(OsString::from));
        }

        args
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    AlreadyRunning,
    Started(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    NotRunning,
    Stopped(usize),
}

/// Handle on the Ghostty binary.
#[derive(Debug, Clone)]
pub struct Ghostty {
    binary: String,
}

impl Default for Ghostty {
    fn default() -> Self {
        Self::new(GHOSTTY_BIN)
    }
}

impl Ghostty {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Start Ghostty. A plain start is skipped when an instance is already
    /// running; any explicit option always opens a new window.
    pub async fn start(&self, options: &LaunchOptions) -> Result<StartOutcome, TerminalError> {
        if options.is_plain() && self.is_running().await {
            return Ok(StartOutcome::AlreadyRunning);
        }

        let pid = self.launch(options)?;
        info!("Started {} (pid {})", self.binary, pid);
        Ok(StartOutcome::Started(pid))
    }

    /// Open a new window without checking for existing instances.
    pub fn launch(&self, options: &LaunchOptions) -> Result<u32, TerminalError> {
        process::spawn_detached(&self.binary, options.to_args())
    }

    pub async fn stop(&self) -> Result<StopOutcome, TerminalError> {
        let pids = self.pids().await?;
        if pids.is_empty() {
            return Ok(StopOutcome::NotRunning);
        }

        let stopped = process::terminate(&pids)?;
        info!("Sent SIGTERM to {} {} process(es)", stopped, self.binary);
        if stopped == 0 {
            Ok(StopOutcome::NotRunning)
        } else {
            Ok(StopOutcome::Stopped(stopped))
        }
    }

    pub async fn pids(&self) -> Result<Vec<u32>, TerminalError> {
        process::find_pids(&self.binary).await
    }

    pub async fn is_running(&self) -> bool {
        process::is_running(&self.binary).await
    }
}
