//! Slack Web API client for posting reports.
//!
//! Only the `chat.postMessage` call is needed: a report is posted as a single
//! message made of Block Kit blocks.
//!
//! # Examples
//!
//! ```rust,no_run
//! use serde_json::json;
//! use sqr_slack::SlackClient;
//!
//! # async fn example() -> Result<(), sqr_slack::error::Error> {
//! let client = SlackClient::new("https://slack.com/api", "xoxb-token")?;
//! let blocks = vec![json!({"type": "divider"})];
//! let posted = client.post_message("C0123456", "report", &blocks).await?;
//! println!("posted {} in {}", posted.ts, posted.channel);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod prelude;

use std::time::Duration;

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::prelude::*;

/// Request timeout applied to every call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Deserialize)]
struct ChatPostMessageResponse {
    ok: bool,
    channel: Option<String>,
    ts: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatPostMessageRequest<'a, B> {
    channel: &'a str,
    text: &'a str,
    blocks: &'a [B],
}

/// A message accepted by Slack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    /// Channel id the message landed in.
    pub channel: String,
    /// Message timestamp, Slack's message id.
    pub ts: String,
}

/// Slack Web API client authenticated with a bot token.
#[derive(Clone)]
pub struct SlackClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl SlackClient {
    /// Creates a new client for the Web API at `api_base`.
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("sqr-reporter"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: token.into().trim().to_string(),
        })
    }

    /// Constructs the full URL for a Web API method.
    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_base)
    }

    /// Post a message made of `blocks` to `channel`.
    ///
    /// `text` is the plain fallback shown in notifications.
    pub async fn post_message<B: Serialize>(
        &self,
        channel: &str,
        text: &str,
        blocks: &[B],
    ) -> Result<PostedMessage> {
        let method = "chat.postMessage";
        let payload = ChatPostMessageRequest {
            channel,
            text,
            blocks,
        };
        debug!("Posting {} blocks to {channel}", blocks.len());

        let response: ChatPostMessageResponse = self
            .http
            .post(self.method_url(method))
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.ok {
            return Err(Error::Api {
                method: method.to_string(),
                error: response
                    .error
                    .unwrap_or_else(|| String::from("unknown error")),
            });
        }

        let posted = PostedMessage {
            channel: response.channel.unwrap_or_else(|| channel.to_string()),
            ts: response.ts.unwrap_or_default(),
        };
        info!("Posted message {} to {}", posted.ts, posted.channel);
        Ok(posted)
    }
}
