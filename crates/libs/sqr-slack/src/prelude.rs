//! Common types and utilities.

/// Slack client error type.
pub use crate::error::Error;

/// Slack client result type.
pub type Result<T> = core::result::Result<T, Error>;
