use std::time::Duration;

use daily_core::Selection;
use daily_logging::daily_debug;
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};

use crate::catalog::CATALOG_USER_AGENT;
use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::http::{build_client, classify_reqwest_error, parse_http_url};
use crate::{DeliveryError, FailureKind};

#[derive(Debug, Clone)]
pub struct DeliverySettings {
    pub webhook_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl DeliverySettings {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Renders and transmits the chosen problem.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// `day` is the number of problems recorded so far, this one included.
    async fn send(&self, selection: &Selection, day: usize) -> Result<(), DeliveryError>;
}

/// Microsoft Teams incoming webhook, posting an Adaptive Card.
#[derive(Debug, Clone)]
pub struct TeamsWebhook {
    settings: DeliverySettings,
}

impl TeamsWebhook {
    pub fn new(settings: DeliverySettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl Notifier for TeamsWebhook {
    async fn send(&self, selection: &Selection, day: usize) -> Result<(), DeliveryError> {
        let url = parse_http_url(&self.settings.webhook_url)
            .map_err(|(kind, message)| DeliveryError::new(kind, message))?;
        let client = build_client(
            self.settings.connect_timeout,
            self.settings.request_timeout,
            CATALOG_USER_AGENT,
        )
        .map_err(|(kind, message)| DeliveryError::new(kind, message))?;

        let body = serde_json::to_vec(&adaptive_card(selection, day))
            .map_err(|err| DeliveryError::new(FailureKind::Parse, err.to_string()))?;

        daily_debug!("Posting card for problem #{} ({} bytes)", selection.id, body.len());
        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| DeliveryError::new(classify_reqwest_error(&err), err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(())
    }
}

pub fn card_text(selection: &Selection, day: usize) -> String {
    format!(
        "Daily Code Question (Day #{day}) \nLeetCode #{}: {} ({})",
        selection.id, selection.title, selection.difficulty
    )
}

/// Teams message payload: one text block and one button to the problem page.
pub fn adaptive_card(selection: &Selection, day: usize) -> Value {
    json!({
        "type": "object",
        "attachments": [
            {
                "contentType": "application/vnd.microsoft.card.adaptive",
                "content": {
                    "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
                    "type": "AdaptiveCard",
                    "version": "1.2",
                    "body": [
                        {
                            "type": "TextBlock",
                            "text": card_text(selection, day),
                            "wrap": true,
                            "weight": "Bolder",
                            "size": "Medium"
                        }
                    ],
                    "actions": [
                        {
                            "type": "Action.OpenUrl",
                            "title": "View on LeetCode",
                            "url": selection.link
                        }
                    ]
                }
            }
        ]
    })
}
