//! Notification relay client.
//!
//! Sends user feedback notes to the email relay as JSON
//! `{ email?, message }`; the relay answers `{ "ok": true }`. Feedback is
//! independent of the classification workflow and a failure here never
//! affects it.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct FeedbackPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    message: &'a str,
}

pub struct FeedbackClient {
    url: String,
    agent: ureq::Agent,
}

impl FeedbackClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }

    /// Send one feedback note. A missing email is rendered as anonymous by
    /// the relay; an empty message is rejected locally.
    pub fn send(&self, email: Option<&str>, message: &str) -> Result<()> {
        if message.trim().is_empty() {
            return Err(anyhow!("feedback message is empty"));
        }

        let payload = serde_json::to_string(&FeedbackPayload { email, message })?;
        log::info!("FeedbackClient: POST {}", self.url);

        let response = self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_string(&payload)
            .with_context(|| format!("sending feedback to {}", self.url))?;

        let text = response
            .into_string()
            .context("reading feedback relay response")?;
        let body: serde_json::Value =
            serde_json::from_str(&text).context("parsing feedback relay response")?;
        if body.get("ok").and_then(|v| v.as_bool()) != Some(true) {
            return Err(anyhow!("feedback relay did not acknowledge: {}", body));
        }
        Ok(())
    }
}
