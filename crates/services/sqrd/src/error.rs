//! Error types for the sqr report service.

/// Errors that can occur while producing or delivering a report.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::error::Error),

    #[error(transparent)]
    Config(#[from] sqr_config::error::Error),

    #[error(transparent)]
    Report(#[from] sqr_report::error::Error),

    #[error(transparent)]
    Process(#[from] sqr_io::error::Error),

    #[error(transparent)]
    Slack(#[from] sqr_slack::error::Error),

    #[error("Invalid cron expression `{expr}`: {message}")]
    InvalidSchedule { expr: String, message: String },
}
