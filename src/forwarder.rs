use crate::config::Config;
use crate::error::ForwardError;
use crate::models::{InvocationResponse, OutboundMessage, parse_request};
use crate::telegram::client::TelegramClient;
use crate::telegram::formatter::compose_text;
use tracing::Instrument;
use uuid::Uuid;

/// Turns one webhook envelope into one Telegram message.
pub struct NotificationForwarder {
    config: Config,
    client: TelegramClient,
}

impl NotificationForwarder {
    pub fn new(config: Config) -> Self {
        let client = TelegramClient::new(&config.api_base_url, &config.telegram_token);
        Self { config, client }
    }

    /// Parses `raw`, sends the composed text and returns the Bot API body
    /// verbatim with status 200.
    pub async fn forward(&self, raw: &[u8]) -> Result<InvocationResponse, ForwardError> {
        let (envelope, payload) = parse_request(raw)?;
        tracing::Span::current().record("http_method", envelope.http_method.as_str());
        tracing::info!(action = %payload.action, "Received event");

        let message = OutboundMessage {
            chat_id: self.config.telegram_chat_id.clone(),
            text: compose_text(&payload),
        };

        let outcome = self.client.send_message(&message).await?;
        if outcome.status.is_success() {
            tracing::info!(status = %outcome.status, "Message forwarded to Telegram");
        } else {
            // Reported to the caller as 200 all the same.
            tracing::warn!(
                status = %outcome.status,
                body = %outcome.body,
                "Telegram rejected the message"
            );
        }

        Ok(InvocationResponse::ok(outcome.body))
    }
}

/// Per-invocation entry point.
///
/// Settings are resolved through `lookup` on every call, before anything
/// touches the network. Failures are logged, then returned.
pub async fn handle<F>(raw: &[u8], lookup: F) -> Result<InvocationResponse, ForwardError>
where
    F: Fn(&str) -> Option<String>,
{
    let span = tracing::info_span!(
        "invocation",
        id = %Uuid::new_v4(),
        http_method = tracing::field::Empty
    );

    async move {
        tracing::debug!(request = %String::from_utf8_lossy(raw), "Raw request");

        let result = match Config::from_lookup(lookup) {
            Ok(config) => NotificationForwarder::new(config).forward(raw).await,
            Err(e) => Err(e.into()),
        };

        result.inspect_err(|e| tracing::error!("Invocation failed: {e}"))
    }
    .instrument(span)
    .await
}
