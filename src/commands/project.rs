// ABOUTME: `project` subcommands: open a project in Ghostty and list known projects

use crate::commands::fail;
use crate::config::AppPaths;
use crate::project;
use crate::terminal::Ghostty;
use anyhow::Result;
use crossterm::style::Stylize;
use std::path::PathBuf;

pub fn open(
    ghostty: &Ghostty,
    paths: &AppPaths,
    name: &str,
    directory: Option<PathBuf>,
) -> Result<()> {
    let directory = directory.unwrap_or_else(|| paths.project_dir(name));

    println!(
        "{}",
        format!("Opening project: {} in {}", name, directory.display()).blue()
    );
    match project::open(ghostty, name, &directory) {
        Ok(_) => println!("{}", format!("Project {} opened!", name).green()),
        Err(e) => fail(format!("Failed to open project: {}", e)),
    }
    Ok(())
}

pub fn list(paths: &AppPaths) -> Result<()> {
    let projects = match project::list(&paths.projects_dir) {
        Ok(Some(projects)) => projects,
        Ok(None) => {
            println!("{}", "No projects directory found".yellow());
            return Ok(());
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {}", paths.projects_dir.display(), e);
            fail(format!(
                "Could not read projects directory {}: {}",
                paths.projects_dir.display(),
                e
            ));
            return Ok(());
        }
    };

    if projects.is_empty() {
        println!("{}", "No projects found".yellow());
        return Ok(());
    }

    println!("{}", "\nAvailable projects:\n".bold());
    for name in projects {
        println!("  {} {}", "●".blue(), name);
    }
    println!();
    Ok(())
}
