use crate::error::TransportError;
use crate::models::OutboundMessage;
use reqwest::StatusCode;

/// What the Bot API answered to a `sendMessage` call.
#[derive(Debug)]
pub struct SendOutcome {
    pub status: StatusCode,
    pub body: String,
}

/// Minimal Bot API client for `sendMessage`.
///
/// The raw response body is kept as-is, so requests go through `reqwest`
/// directly instead of a typed bot framework.
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    pub fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, self.token)
    }

    /// Same as `send_message_url` with the token masked, for logs.
    pub fn redacted_url(&self) -> String {
        format!("{}/bot<redacted>/sendMessage", self.base_url)
    }

    /// POSTs the message once and reads the whole response body.
    ///
    /// Only transport failures are errors; a rejection by the Bot API comes
    /// back as an `Ok` outcome carrying the non-success status.
    pub async fn send_message(
        &self,
        message: &OutboundMessage,
    ) -> Result<SendOutcome, TransportError> {
        tracing::debug!(url = %self.redacted_url(), chat_id = %message.chat_id, "Sending Telegram message");

        let response = self
            .http
            .post(self.send_message_url())
            .json(message)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.without_url()))?;

        tracing::debug!(%status, bytes = body.len(), "Telegram responded");
        Ok(SendOutcome { status, body })
    }
}
