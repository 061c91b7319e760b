use crate::error::ParseError;
use serde::{Deserialize, Deserializer, Serialize};

/// Outer request delivered by the hosting invocation layer.
///
/// `body` holds the webhook payload as a JSON-encoded string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEnvelope {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub http_method: String,
}

/// Webhook payload carried inside `InboundEnvelope::body`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct EventPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: EventData,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct EventData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub issue: IssueData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event: EventDetails,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct IssueData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct EventDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub web_url: String,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl InboundEnvelope {
    pub fn parse(raw: &[u8]) -> Result<Self, ParseError> {
        serde_json::from_slice(raw).map_err(ParseError::Envelope)
    }

    /// Decodes the string-embedded payload.
    pub fn payload(&self) -> Result<EventPayload, ParseError> {
        serde_json::from_str(&self.body).map_err(ParseError::Payload)
    }
}

/// Runs both parse passes, returning the envelope alongside its payload.
pub fn parse_request(raw: &[u8]) -> Result<(InboundEnvelope, EventPayload), ParseError> {
    InboundEnvelope::parse(raw)
        .and_then(|envelope| envelope.payload().map(|payload| (envelope, payload)))
}

/// Body of a Bot API `sendMessage` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundMessage {
    pub chat_id: String,
    pub text: String,
}

/// JSON returned to the hosting invocation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    /// The status is always 200 once the Bot API answered, whatever it answered.
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }
}
