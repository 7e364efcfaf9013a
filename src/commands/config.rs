// ABOUTME: `config` subcommands: get, set (with Ghostty mirroring), list and reset

use crate::commands::note;
use crate::config::{AppPaths, ConfigStore, GhosttyConfigFile, ResetOutcome};
use crate::prompt::Confirm;
use anyhow::Result;
use crossterm::style::Stylize;
use tracing::{error, warn};

pub fn get(paths: &AppPaths, key: &str) -> Result<()> {
    let store = ConfigStore::load(&paths.config_file);

    match store.get(key) {
        Ok(value) => println!("{}", format!("{} = {}", key, value).blue()),
        Err(e) => println!("{}", e.to_string().yellow()),
    }
    Ok(())
}

pub fn set(paths: &AppPaths, key: &str, value: &str) -> Result<()> {
    let mut store = ConfigStore::load(&paths.config_file);

    if let Err(e) = store.set(key, value) {
        error!("Failed to save config: {}", e);
        println!("{}", format!("Error: {}", e).red());
        return Ok(());
    }
    println!("{}", format!("Set {} = {}", key, value).green());

    let ghostty_config = GhosttyConfigFile::new(&paths.ghostty_config);
    match ghostty_config.sync(key, value) {
        Ok(()) => note(format!("  Synced to {}", ghostty_config.path().display())),
        Err(e) => {
            warn!("Ghostty config sync failed: {}", e);
            note(format!("  {}", e));
        }
    }
    Ok(())
}

pub fn list(paths: &AppPaths) -> Result<()> {
    let store = ConfigStore::load(&paths.config_file);

    println!("{}", "\nGhostty Manager Configuration:\n".bold());
    for (key, value) in store.list() {
        println!("  {}: {}", key.blue(), value.dark_grey());
    }
    note(format!("\n(Stored in {})", store.path().display()));
    println!();
    Ok(())
}

pub fn reset(paths: &AppPaths, force: bool, confirm: &mut dyn Confirm) -> Result<()> {
    let mut store = ConfigStore::load(&paths.config_file);

    match store.reset(force, confirm) {
        Ok(ResetOutcome::Reset) => println!("{}", "Config reset to defaults".green()),
        Ok(ResetOutcome::Cancelled) => note("Cancelled"),
        Err(e) => {
            error!("Failed to reset config: {}", e);
            println!("{}", format!("Error: {}", e).red());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::prompt::Answer;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_set_mirrors_into_ghostty_config() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::from_home(temp_dir.path());
        fs::create_dir_all(paths.ghostty_config.parent().unwrap()).unwrap();
        fs::write(&paths.ghostty_config, "font-size = 12\ntheme = nord").unwrap();

        set(&paths, "theme", "dark").unwrap();

        assert_eq!(ConfigStore::load(&paths.config_file).get("theme").unwrap(), "dark");
        assert_eq!(
            fs::read_to_string(&paths.ghostty_config).unwrap(),
            "font-size = 12\ntheme = dark"
        );
    }

    #[test]
    fn test_set_succeeds_when_sync_fails() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::from_home(temp_dir.path());
        // A directory where the Ghostty config file should be makes the sync fail
        fs::create_dir_all(&paths.ghostty_config).unwrap();

        set(&paths, "window-padding-y", "2").unwrap();

        assert_eq!(
            ConfigStore::load(&paths.config_file).get("window-padding-y").unwrap(),
            "2"
        );
    }

    #[test]
    fn test_reset_declined_keeps_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::from_home(temp_dir.path());
        set(&paths, "theme", "dark").unwrap();

        reset(&paths, false, &mut Answer(false)).unwrap();
        assert_eq!(ConfigStore::load(&paths.config_file).get("theme").unwrap(), "dark");

        reset(&paths, false, &mut Answer(true)).unwrap();
        assert_eq!(ConfigStore::load(&paths.config_file).list(), defaults());
    }
}
