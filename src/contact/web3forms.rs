use std::future::Future;

use http::StatusCode;
use serde::Serialize;

use super::{EmailContent, Relay, RelayError, Submission};
use crate::config::SiteConfig;

#[derive(Serialize, Debug)]
struct Web3FormsPayload<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: String,
    to: &'a str,
}

/// Relays submissions to the Web3Forms submit API.
#[derive(Clone)]
pub struct Web3FormsRelay {
    client: reqwest::Client,
    endpoint: String,
    access_key: String,
}

impl Web3FormsRelay {
    pub fn new(client: reqwest::Client, config: &SiteConfig) -> Self {
        Self {
            client,
            endpoint: config.relay_url.clone(),
            access_key: config.access_key.clone(),
        }
    }
}

impl Relay for Web3FormsRelay {
    fn relay(
        &self,
        submission: &Submission,
        email: &EmailContent,
    ) -> impl Future<Output = Result<StatusCode, RelayError>> + Send {
        let payload = Web3FormsPayload {
            access_key: &self.access_key,
            name: &submission.name,
            email: &submission.email,
            subject: &email.subject,
            message: submission.relay_message(),
            to: &email.to,
        };
        let request = self.client.post(&self.endpoint).json(&payload);
        async move {
            let response = request
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;
            let status = response.status();
            tracing::debug!(%status, "web3forms answered");
            Ok(status)
        }
    }
}
