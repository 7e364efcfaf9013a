// ABOUTME: Host tmux session operations: list, create, check, and kill sessions
// Every call shells out to the tmux binary with arguments passed directly, no shell

use crate::tmux::error::TmuxError;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;
use tracing::{debug, info};

const LIST_FORMAT: &str = "#{session_name}\t#{session_windows}\t#{session_attached}";

/// One row of `tmux list-sessions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub name: String,
    /// None when tmux printed something that was not a number
    pub windows: Option<u32>,
    pub attached: bool,
}

/// Parse `list-sessions` output produced with [`LIST_FORMAT`].
pub fn parse_session_list(output: &str) -> Vec<SessionSummary> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            // Split from the right so a tab inside a session name stays in the name
            let mut fields = line.rsplitn(3, '\t');
            let attached = fields.next().unwrap_or_default();
            let windows = fields.next();
            match (fields.next(), windows) {
                (Some(name), Some(windows)) => SessionSummary {
                    name: name.to_string(),
                    windows: windows.trim().parse().ok(),
                    attached: attached.trim().parse::<u32>().map_or(false, |n| n > 0),
                },
                _ => SessionSummary {
                    name: line.trim().to_string(),
                    windows: None,
                    attached: false,
                },
            }
        })
        .collect()
}

/// Exact-match target, so `api` never resolves to a session named `api-old`.
fn exact(name: &str) -> String {
    format!("={}", name)
}

pub struct Tmux;

impl Tmux {
    /// Check if tmux is installed on the host
    pub async fn check_tmux_installed() -> Result<(), TmuxError> {
        let output = Command::new("which")
            .arg("tmux")
            .output()
            .await
            .map_err(|_| TmuxError::TmuxNotInstalled)?;

        if !output.status.success() {
            return Err(TmuxError::TmuxNotInstalled);
        }
        Ok(())
    }

    pub async fn has_session(name: &str) -> bool {
        Command::new("tmux")
            .args(["has-session", "-t", exact(name).as_str()])
            .output()
            .await
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// All sessions on the default server. No server running means no sessions.
    pub async fn list_sessions() -> Result<Vec<SessionSummary>, TmuxError> {
        let output = Command::new("tmux")
            .args(["list-sessions", "-F", LIST_FORMAT])
            .output()
            .await?;

        if output.status.success() {
            Ok(parse_session_list(&String::from_utf8_lossy(&output.stdout)))
        } else {
            debug!(
                "tmux list-sessions returned nothing: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            Ok(Vec::new())
        }
    }

    /// Create a detached session with one named window rooted at `directory`.
    pub async fn create_session(
        name: &str,
        window: &str,
        directory: &Path,
    ) -> Result<(), TmuxError> {
        Self::check_tmux_installed().await?;

        if Self::has_session(name).await {
            return Err(TmuxError::SessionExists(name.to_string()));
        }

        let output = Command::new("tmux")
            .args(["new-session", "-d", "-s", name, "-n", window, "-c"])
            .arg(directory)
            .output()
            .await?;
        check("new-session", &output)?;

        info!("Created tmux session {} in {}", name, directory.display());
        Ok(())
    }

    pub async fn kill_session(name: &str) -> Result<(), TmuxError> {
        let output = Command::new("tmux")
            .args(["kill-session", "-t", exact(name).as_str()])
            .output()
            .await?;
        check("kill-session", &output)?;

        info!("Killed tmux session {}", name);
        Ok(())
    }

    /// Kill every session by shutting down the tmux server.
    pub async fn kill_all() -> Result<(), TmuxError> {
        let output = Command::new("tmux").arg("kill-server").output().await?;
        check("kill-server", &output)?;

        info!("Killed all tmux sessions");
        Ok(())
    }

    /// Command that attaches a client to `name`, for running inside a new terminal.
    pub fn attach_command(name: &str) -> Vec<String> {
        vec![
            "tmux".to_string(),
            "attach".to_string(),
            "-t".to_string(),
            exact(name),
        ]
    }

    /// Command that creates and attaches session `name` in one step.
    pub fn new_session_command(name: &str) -> Vec<String> {
        vec![
            "tmux".to_string(),
            "new".to_string(),
            "-s".to_string(),
            name.to_string(),
        ]
    }
}

fn check(command: &str, output: &Output) -> Result<(), TmuxError> {
    if output.status.success() {
        return Ok(());
    }
    Err(TmuxError::CommandFailed {
        command: command.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_session_list() {
        let output = "api\t3\t1\nscratch\t1\t0\n";
        assert_eq!(
            parse_session_list(output),
            vec![
                SessionSummary {
                    name: "api".to_string(),
                    windows: Some(3),
                    attached: true,
                },
                SessionSummary {
                    name: "scratch".to_string(),
                    windows: Some(1),
                    attached: false,
                },
            ]
        );
    }

    #[test]
    fn test_parse_session_list_empty() {
        assert!(parse_session_list("").is_empty());
        assert!(parse_session_list("\n\n").is_empty());
    }

    #[test]
    fn test_parse_session_name_with_tab() {
        let sessions = parse_session_list("odd\tname\t2\t2");
        assert_eq!(sessions[0].name, "odd\tname");
        assert_eq!(sessions[0].windows, Some(2));
        assert!(sessions[0].attached);
    }

    #[test]
    fn test_parse_unexpected_line() {
        let sessions = parse_session_list("just-a-name");
        assert_eq!(
            sessions,
            vec![SessionSummary {
                name: "just-a-name".to_string(),
                windows: None,
                attached: false,
            }]
        );
    }

    #[test]
    fn test_attach_command_uses_exact_target() {
        assert_eq!(Tmux::attach_command("api"), vec!["tmux", "attach", "-t", "=api"]);
        assert_eq!(Tmux::new_session_command("blog"), vec!["tmux", "new", "-s", "blog"]);
    }

    #[tokio::test]
    async fn test_check_tmux_installed_reports_only_missing_tmux() {
        // Depends on whether the host has tmux
        let result = Tmux::check_tmux_installed().await;
        assert!(matches!(result, Ok(()) | Err(TmuxError::TmuxNotInstalled)));
    }

    #[tokio::test]
    async fn test_missing_session_does_not_exist() {
        assert!(!Tmux::has_session("ghostty_manager_test_no_such_session").await);
    }
}
