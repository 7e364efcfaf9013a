// ABOUTME: Project shortcuts: open a project directory in Ghostty with a matching tmux session
// Projects are the immediate subdirectories of the projects directory (~/dev)

use crate::terminal::{Ghostty, LaunchOptions, TerminalError};
use crate::tmux::Tmux;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Window options for project `name` rooted at `directory`.
pub fn launch_options(name: &str, directory: &Path) -> LaunchOptions {
    LaunchOptions {
        working_directory: Some(directory.to_path_buf()),
        title: Some(format!("Project: {}", name)),
        ..LaunchOptions::running(Tmux::new_session_command(name))
    }
}

pub fn open(ghostty: &Ghostty, name: &str, directory: &Path) -> Result<u32, TerminalError> {
    let pid = ghostty.launch(&launch_options(name, directory))?;
    info!("Opened project {} in {}", name, directory.display());
    Ok(pid)
}

/// Names of the subdirectories of `projects_dir`, sorted. Returns `Ok(None)`
/// when the directory does not exist.
pub fn list(projects_dir: &Path) -> io::Result<Option<Vec<String>>> {
    let entries = match fs::read_dir(projects_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.path().is_dir() {
            projects.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    projects.sort();

    Ok(Some(projects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(list(&temp_dir.path().join("dev")).unwrap(), None);
    }

    #[test]
    fn test_list_only_directories_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("zeta")).unwrap();
        fs::create_dir(temp_dir.path().join("alpha")).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();

        assert_eq!(
            list(temp_dir.path()).unwrap(),
            Some(vec!["alpha".to_string(), "zeta".to_string()])
        );
    }

    #[test]
    fn test_list_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(list(temp_dir.path()).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_launch_options() {
        let options = launch_options("blog", Path::new("/home/a/dev/blog"));
        let args: Vec<String> = options
            .to_args()
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            args,
            vec![
                "--working-directory",
                "/home/a/dev/blog",
                "--title",
                "Project: blog",
                "-e",
                "tmux",
                "new",
                "-s",
                "blog",
            ]
        );
    }
}
