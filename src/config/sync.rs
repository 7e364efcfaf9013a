// ABOUTME: Best-effort mirroring of single settings into Ghostty's own config file
// Patches one `key = value` line in place, or appends it, leaving every other line verbatim

use crate::config::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ghostty's plain-text config file.
#[derive(Debug, Clone)]
pub struct GhosttyConfigFile {
    path: PathBuf,
}

impl GhosttyConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Upsert `key = value` into the file, creating the file and its
    /// directory when missing.
    pub fn sync(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(ConfigError::sync(&self.path))?;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(ConfigError::sync(&self.path)(e)),
        };

        fs::write(&self.path, upsert_line(&content, key, value))
            .map_err(ConfigError::sync(&self.path))?;

        debug!("Synced {} to {}", key, self.path.display());
        Ok(())
    }
}

/// Replace the first line assigning `key` with `key = value`, or append
/// `\nkey = value` when no such line exists.
///
/// A line assigns `key` when it starts with `key` followed by optional
/// whitespace and `=`. A trailing `\r` on the replaced line is kept.
pub fn upsert_line(content: &str, key: &str, value: &str) -> String {
    let line = format!("{key} = {value}");

    let lines: Vec<&str> = content.split('\n').collect();
    let Some(index) = lines.iter().position(|existing| assigns_key(existing, key)) else {
        return format!("{content}\n{line}");
    };

    // A CRLF line keeps its carriage return
    let replacement = if lines[index].ends_with('\r') {
        format!("{line}\r")
    } else {
        line
    };

    lines
        .iter()
        .enumerate()
        .map(|(i, existing)| if i == index { replacement.as_str() } else { *existing })
        .collect::<Vec<_>>()
        .join("\n")
}

fn assigns_key(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}
