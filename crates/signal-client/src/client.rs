//! Signal HTTP client.

use crate::error::SignalError;
use crate::rich_text::RichText;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Signal CLI REST API client bound to one account.
#[derive(Clone)]
pub struct SignalClient {
    client: Client,
    base_url: String,
    phone_number: String,
}

impl SignalClient {
    /// Create a new Signal client.
    pub fn new(
        base_url: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, SignalError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            phone_number: phone_number.into(),
        })
    }

    /// The account this client receives and sends for.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Check if the Signal API is healthy.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/v1/health", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// List the accounts registered with the API.
    #[instrument(skip(self))]
    pub async fn list_accounts(&self) -> Result<Vec<String>, SignalError> {
        let response = self
            .client
            .get(format!("{}/v1/accounts", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(SignalError::Api(msg));
        }

        Ok(response.json().await?)
    }

    /// Fail unless the configured account is registered with the API.
    pub async fn ensure_registered(&self) -> Result<(), SignalError> {
        let accounts = self.list_accounts().await?;
        if accounts.iter().any(|a| a == &self.phone_number) {
            Ok(())
        } else {
            Err(SignalError::NotRegistered(self.phone_number.clone()))
        }
    }

    /// Receive pending envelopes.
    #[instrument(skip(self))]
    pub async fn receive(&self) -> Result<Vec<IncomingMessage>, SignalError> {
        let encoded_number = encode(&self.phone_number);
        let response = self
            .client
            .get(format!("{}/v1/receive/{}", self.base_url, encoded_number))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(SignalError::Api(msg));
        }

        let messages: Vec<IncomingMessage> = response.json().await?;
        debug!("Received {} envelopes", messages.len());
        Ok(messages)
    }

    /// Send a styled message to a number or group.
    #[instrument(skip(self, message))]
    pub async fn send_rich(&self, recipient: &str, message: &RichText) -> Result<(), SignalError> {
        let request = SendMessageRequest {
            message: message.to_styled(),
            number: self.phone_number.clone(),
            recipients: vec![recipient.to_string()],
            text_mode: TextMode::Styled,
        };

        let response = self
            .client
            .post(format!("{}/v2/send", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            warn!("Send failed: {}", msg);
            return Err(SignalError::SendFailed(msg));
        }

        debug!("Sent message to {}", recipient);
        Ok(())
    }
}
