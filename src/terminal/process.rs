// ABOUTME: Thin wrappers over process primitives: detached launch, pgrep lookup, SIGTERM
// Nothing here waits on a launched program; queries shell out to pgrep

use crate::terminal::error::TerminalError;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use std::ffi::OsStr;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Launch `program` in its own process group with all standard streams
/// detached. Returns the child pid without waiting for it.
pub fn spawn_detached<I, S>(program: &str, args: I) -> Result<u32, TerminalError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .process_group(0)
        .spawn()
        .map_err(|source| TerminalError::LaunchFailed {
            program: program.to_string(),
            source,
        })?;

    debug!("Launched {} with pid {}", program, child.id());
    Ok(child.id())
}

/// Pids of processes whose name is exactly `name`.
pub async fn find_pids(name: &str) -> Result<Vec<u32>, TerminalError> {
    let output = tokio::process::Command::new("pgrep")
        .args(["-x", name])
        .output()
        .await?;

    // pgrep exits 1 when nothing matched
    match output.status.code() {
        Some(0) => Ok(parse_pids(&String::from_utf8_lossy(&output.stdout))),
        Some(1) => Ok(Vec::new()),
        _ => Err(TerminalError::QueryFailed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        )),
    }
}

pub async fn is_running(name: &str) -> bool {
    match find_pids(name).await {
        Ok(pids) => !pids.is_empty(),
        Err(e) => {
            warn!("Could not check whether {} is running: {}", name, e);
            false
        }
    }
}

/// Send SIGTERM to every pid. Processes that already exited are skipped.
pub fn terminate(pids: &[u32]) -> Result<usize, TerminalError> {
    let mut signalled = 0;
    for &pid in pids {
        let raw = i32::try_from(pid).map_err(|_| TerminalError::InvalidPid(pid))?;
        match kill(Pid::from_raw(raw), Signal::SIGTERM) {
            Ok(()) => signalled += 1,
            Err(nix::errno::Errno::ESRCH) => debug!("Process {} already gone", pid),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(signalled)
}

pub(crate) fn parse_pids(output: &str) -> Vec<u32> {
    output
        .split_whitespace()
        .filter_map(|pid| pid.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pids() {
        assert_eq!(parse_pids("123\n4567\n"), vec![123, 4567]);
        assert_eq!(parse_pids(""), Vec::<u32>::new());
        assert_eq!(parse_pids("12\ngarbage\n34"), vec![12, 34]);
    }

    #[test]
    fn test_terminate_nothing() {
        assert_eq!(terminate(&[]).unwrap(), 0);
    }

    #[test]
    fn test_spawn_missing_program_fails() {
        let result = spawn_detached("ghostty-manager-no-such-program", ["--help"]);
        assert!(matches!(result, Err(TerminalError::LaunchFailed { .. })));
    }

    #[tokio::test]
    async fn test_unknown_process_is_not_running() {
        assert!(!is_running("nosuchproc").await);
    }
}
