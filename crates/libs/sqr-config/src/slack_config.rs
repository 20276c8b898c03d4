//! Slack delivery settings.

use serde::{Deserialize, Serialize};

/// Default Slack Web API endpoint.
pub const DEFAULT_SLACK_API_BASE: &str = "https://slack.com/api";

/// Where and how reports are posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Bot token used as bearer credential.
    pub token: String,
    /// Channel id or name the report is posted to.
    pub channel: String,
    /// Web API base url. Only overridden for testing or proxies.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_SLACK_API_BASE.to_string()
}
