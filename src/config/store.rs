// ABOUTME: Durable key-value store for ghostty-manager settings with built-in defaults
// The store is loaded fresh for each operation and written back in full after every change

use crate::config::error::ConfigError;
use crate::prompt::Confirm;
use nix::sys::stat::{umask, Mode};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Built-in settings, mirrored into Ghostty's config when changed.
pub const DEFAULTS: &[(&str, &str)] = &[
    ("theme", "nord"),
    ("shell-integration", "detect"),
    ("shell-integration-features", "cursor,sudo,ssh-env,ssh-terminfo"),
    ("window-padding-x", "10"),
    ("window-padding-y", "10"),
    ("quit-after-last-window-closed", "true"),
    ("quit-after-last-window-closed-delay", "5m"),
];

/// The default mapping, with every value as a string.
pub fn defaults() -> BTreeMap<String, String> {
    DEFAULTS
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

fn default_entries() -> Map<String, Value> {
    DEFAULTS
        .iter()
        .map(|(key, value)| ((*key).to_string(), Value::String((*value).to_string())))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    Reset,
    Cancelled,
}

/// Settings loaded from `config.json`, merged over [`DEFAULTS`].
///
/// Values written through [`ConfigStore::set`] are always strings. Anything
/// else found in the persisted file is kept as-is and rendered as JSON text.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl ConfigStore {
    /// Load the store from `path`. A missing, unreadable or malformed file
    /// yields the pure defaults.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut entries = default_entries();

        if let Some(persisted) = read_persisted(&path) {
            entries.extend(persisted);
        }

        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        self.entries
            .get(key)
            .map(render)
            .ok_or_else(|| ConfigError::NotFound(key.to_string()))
    }

    /// Set `key` to `value` and persist the whole mapping.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.entries
            .insert(key.to_string(), Value::String(value.to_string()));
        self.save()?;
        info!("Set config {} = {}", key, value);
        Ok(())
    }

    /// The merged mapping, rendered as strings.
    pub fn list(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), render(value)))
            .collect()
    }

    /// Discard every persisted override and write the defaults to disk.
    ///
    /// Unless `force` is set, `confirm` must agree first; a refusal leaves
    /// the file untouched.
    pub fn reset(
        &mut self,
        force: bool,
        confirm: &mut dyn Confirm,
    ) -> Result<ResetOutcome, ConfigError> {
        if !force && !confirm.confirm("Reset all config to defaults? (y/N):") {
            debug!("Config reset cancelled");
            return Ok(ResetOutcome::Cancelled);
        }

        self.entries = default_entries();
        self.save()?;
        info!("Config reset to defaults at {}", self.path.display());
        Ok(ResetOutcome::Reset)
    }

    /// Write the full mapping as pretty-printed JSON, replacing the file.
    pub fn save(&self) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(&self.entries)?;

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(ConfigError::io(dir))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(ConfigError::io(&self.path))?;
        tmp.write_all(json.as_bytes())
            .map_err(ConfigError::io(&self.path))?;
        // Temp files are created 0600; give the config the mode a plain write would
        tmp.as_file()
            .set_permissions(self.target_permissions())
            .map_err(ConfigError::io(&self.path))?;
        tmp.persist(&self.path)
            .map_err(|e| ConfigError::io(&self.path)(e.error))?;

        debug!("Saved config to {}", self.path.display());
        Ok(())
    }

    /// Keep the mode of an existing file, else 0666 minus the umask.
    fn target_permissions(&self) -> fs::Permissions {
        match fs::metadata(&self.path) {
            Ok(metadata) => metadata.permissions(),
            Err(_) => fs::Permissions::from_mode(new_file_mode()),
        }
    }
}

/// Mode a newly created file gets from the process umask.
fn new_file_mode() -> u32 {
    // umask can only be read by setting it, so restore it straight away
    let mask = umask(Mode::empty());
    umask(mask);
    u32::from((Mode::from_bits_truncate(0o666) & !mask).bits())
}

fn read_persisted(path: &Path) -> Option<Map<String, Value>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("Failed to read config file {:?}: {}", path, e);
            return None;
        }
    };

    match serde_json::from_str::<Value>(&data) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            warn!("Config file {:?} is not a JSON object, using defaults", path);
            None
        }
        Err(e) => {
            warn!("Failed to parse config file {:?}: {}", path, e);
            None
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
