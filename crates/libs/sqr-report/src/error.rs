//! Report pipeline error types.

/// Report pipeline errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The scheduler output had no header line to derive the field layout from.
    #[error("Scheduler output is empty. Expected a header line")]
    MissingHeader,

    /// A job record lacks a field the report needs.
    #[error("Job record has no `{0}` field")]
    MissingField(String),
}
