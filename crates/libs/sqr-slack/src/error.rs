//! Slack client error types.

/// Slack client errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP request failed or returned an unreadable body.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Slack answered with `ok: false`.
    #[error("slack {method} failed: {error}")]
    Api { method: String, error: String },
}
