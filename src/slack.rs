use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Slack webhook request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Incoming-webhook payload: Slack only needs a `text` field.
#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Delivers the digest to a Slack incoming webhook.
pub struct SlackNotifier {
    http: reqwest::Client,
    webhook_url: String,
}

impl SlackNotifier {
    pub fn new(webhook_url: String) -> Self {
        SlackNotifier {
            http: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// POST the message once. A non-200 response is logged with its body and
    /// does not fail the run; only transport errors surface. Never retries.
    #[instrument(skip(self, message))]
    pub async fn post_digest(&self, message: &str) -> Result<(), SlackError> {
        let response = self
            .http
            .post(&self.webhook_url)
            .json(&WebhookPayload { text: message })
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            info!("digest sent to Slack");
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "failed to send digest to Slack");
        }

        Ok(())
    }
}
