//! Process error types.

use std::process::ExitStatus;

/// Errors that can occur while querying the scheduler.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failed to spawn the process.
    #[error("Failed to spawn `{command}`: {source}")]
    SpawnProcessFail {
        command: String,
        source: std::io::Error,
    },

    /// Failed to wait for child process.
    #[error("Failed to wait for `{command}`: {source}")]
    WaitChildFail {
        command: String,
        source: std::io::Error,
    },

    /// Process finished unsuccessfully.
    #[error("`{command}` exited with {status}: {stderr}")]
    ExitStatus {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// No account to pass to `squeue -A`.
    #[error("No accounts to query")]
    NoAccounts,
}
