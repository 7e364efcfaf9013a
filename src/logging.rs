// ABOUTME: Tracing setup: a daily log file under the app's log directory
// Stdout is reserved for command output, so logs only go to stderr when the file cannot be opened

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "ghostty_manager=info";
const VERBOSE_FILTER: &str = "ghostty_manager=debug";

pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(format!(
        "ghostty-manager-{}.log",
        chrono::Local::now().format("%Y%m%d")
    ))
}

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

pub fn setup_logging(log_dir: &Path, verbose: bool) {
    let _ = std::fs::create_dir_all(log_dir);
    let log_file = log_file_path(log_dir);

    let file = match OpenOptions::new().create(true).append(true).open(&log_file) {
        Ok(file) => file,
        Err(e) => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .with(EnvFilter::new("warn"))
                .init();
            tracing::warn!("Failed to open log file {:?}: {}", log_file, e);
            return;
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false), // No ANSI colors in log file
        )
        .with(filter(verbose))
        .init();
}
