//! Low-level async process management utilities.

use std::{
    ffi::OsStr,
    io,
    process::{ExitStatus, Stdio},
};

use tokio::process::{Child, Command};
use tracing::debug;

use crate::prelude::*;

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit status of the process.
    pub status: ExitStatus,
    /// Standard output, decoded lossily as UTF-8.
    pub stdout: String,
    /// Standard error, decoded lossily as UTF-8.
    pub stderr: String,
}

/// Spawn a new async process with piped stdout and stderr.
///
/// Launches a subprocess with the given command and arguments using tokio.
/// Both stdout and stderr are piped and can be accessed via the returned Child.
/// Stdin is closed so the child can never block waiting for input.
///
/// # Examples
///
/// ```rust
/// use sqr_io::process::spawn_process;
///
/// #[tokio::main]
/// async fn main() {
///     let mut child = spawn_process("echo", &["Hello".to_string()]).unwrap();
///     let output = child.stdout.take().unwrap();
/// }
/// ```
pub fn spawn_process(cmd: &str, args: &[String]) -> io::Result<Child> {
    Command::new(OsStr::new(cmd))
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
}

/// Get the full command string with arguments.
pub fn full_command(cmd: &str, args: &[String]) -> String {
    if args.is_empty() {
        return cmd.to_string();
    }
    format!("{} {}", cmd, args.join(" "))
}

/// Run a process to completion and capture its output.
///
/// The exit status is returned as-is; use [`capture_stdout`] to treat a
/// failed exit as an error.
pub async fn capture_output(cmd: &str, args: &[String]) -> Result<ProcessOutput> {
    let command = full_command(cmd, args);
    debug!("Running `{command}`");

    let child = spawn_process(cmd, args).map_err(|source| Error::SpawnProcessFail {
        command: command.clone(),
        source,
    })?;
    let output = child
        .wait_with_output()
        .await
        .map_err(|source| Error::WaitChildFail { command, source })?;

    Ok(ProcessOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Run a process to completion and return its standard output.
///
/// # Examples
///
/// ```rust
/// use sqr_io::process::capture_stdout;
///
/// #[tokio::main]
/// async fn main() {
///     let stdout = capture_stdout("echo", &["done".to_string()]).await.unwrap();
///     assert_eq!(stdout, "done\n");
/// }
/// ```
pub async fn capture_stdout(cmd: &str, args: &[String]) -> Result<String> {
    let output = capture_output(cmd, args).await?;
    if !output.status.success() {
        return Err(Error::ExitStatus {
            command: full_command(cmd, args),
            status: output.status,
            stderr: output.stderr.trim().to_string(),
        });
    }
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[tokio::test]
    async fn captures_stdout_of_successful_process() -> Result<()> {
        let stdout = capture_stdout("printf", &args(&["JOBID|USER\\n1|alice\\n"])).await?;
        assert_eq!(stdout, "JOBID|USER\n1|alice\n");
        Ok(())
    }

    #[tokio::test]
    async fn failed_exit_carries_stderr() {
        let result = capture_stdout("sh", &args(&["-c", "echo broken >&2; exit 3"])).await;
        match result {
            Err(Error::ExitStatus { status, stderr, .. }) => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn capture_output_keeps_failed_status() -> Result<()> {
        let output = capture_output("sh", &args(&["-c", "echo out; exit 1"])).await?;
        assert!(!output.status.success());
        assert_eq!(output.stdout, "out\n");
        Ok(())
    }

    #[tokio::test]
    async fn missing_program_fails_to_spawn() {
        let result = capture_stdout("sqr-definitely-not-a-program", &[]).await;
        assert!(matches!(result, Err(Error::SpawnProcessFail { .. })));
    }

    #[test]
    fn full_command_joins_arguments() {
        assert_eq!(full_command("ls", &args(&["-la", "/tmp"])), "ls -la /tmp");
        assert_eq!(full_command("pwd", &[]), "pwd");
    }
}
