// ABOUTME: Tests for the JSON config store: defaults, round-trips, reset and corrupt files
// Each test points the store at its own temp directory

use ghostty_manager::config::{defaults, ConfigError, ConfigStore, DEFAULTS};
use ghostty_manager::prompt::Answer;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn config_path(temp_dir: &TempDir) -> std::path::PathBuf {
    temp_dir.path().join("ghostty-manager").join("config.json")
}

#[test]
fn test_fresh_store_lists_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::load(config_path(&temp_dir));

    let listed = store.list();
    for (key, value) in DEFAULTS {
        assert_eq!(listed.get(*key).map(String::as_str), Some(*value));
    }
    assert_eq!(listed, defaults());
    assert!(!config_path(&temp_dir).exists(), "loading must not create the file");
}

#[test]
fn test_set_then_get_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = config_path(&temp_dir);

    let cases = [
        ("theme", "catppuccin-mocha"),
        ("font-family", "JetBrains Mono"),
        ("", "empty key"),
        ("keybind", "ctrl+a>c=new_tab"),
        ("unicode-ключ", "значение = 1"),
    ];

    for (key, value) in cases {
        ConfigStore::load(&path).set(key, value).unwrap();
        // Reload to prove the value went through disk
        assert_eq!(ConfigStore::load(&path).get(key).unwrap(), value);
    }
}

#[test]
fn test_set_creates_config_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = config_path(&temp_dir);

    ConfigStore::load(&path).set("theme", "dark").unwrap();

    assert!(path.exists());
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["theme"], "dark");
    assert_eq!(raw["shell-integration"], "detect", "defaults are persisted too");
}

#[test]
fn test_persisted_values_override_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"theme": "gruvbox", "font-size": "15"}"#).unwrap();

    let store = ConfigStore::load(&path);
    assert_eq!(store.get("theme").unwrap(), "gruvbox");
    assert_eq!(store.get("font-size").unwrap(), "15");
    assert_eq!(store.get("window-padding-x").unwrap(), "10");
}

#[test]
fn test_missing_key_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::load(config_path(&temp_dir));

    let err = store.get("no-such-key").unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, ConfigError::NotFound(ref key) if key == "no-such-key"));
    assert_eq!(err.to_string(), "Config key \"no-such-key\" not found");
}

#[test]
fn test_reset_restores_exact_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = config_path(&temp_dir);

    let mut store = ConfigStore::load(&path);
    store.set("theme", "dark").unwrap();
    store.set("extra", "value").unwrap();

    ConfigStore::load(&path).reset(true, &mut Answer(false)).unwrap();

    assert_eq!(ConfigStore::load(&path).list(), defaults());
}

#[test]
fn test_corrupt_file_behaves_like_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    for corrupt in ["{not json", "", "\u{0}\u{1}", "null", "\"just a string\""] {
        fs::write(&path, corrupt).unwrap();
        let store = ConfigStore::load(&path);
        assert_eq!(store.list(), defaults(), "content: {:?}", corrupt);
    }
}

#[test]
fn test_unreadable_path_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    // A directory in place of the file cannot be read as text
    let path = temp_dir.path().join("config.json");
    fs::create_dir(&path).unwrap();

    assert_eq!(ConfigStore::load(&path).list(), defaults());
}

#[test]
fn test_save_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    // The parent "directory" is a regular file, so it cannot be created
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut store = ConfigStore::load(blocker.join("config.json"));
    let err = store.set("theme", "dark").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
