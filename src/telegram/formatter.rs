use crate::models::EventPayload;

/// Picks the event title, falling back to the issue title.
///
/// Both may be empty, in which case the result is empty too.
pub fn select_title(payload: &EventPayload) -> &str {
    let event_title = payload.data.event.title.as_str();
    if event_title.is_empty() {
        &payload.data.issue.title
    } else {
        event_title
    }
}

/// Lays the event out as plain text. Nothing is escaped or truncated.
pub fn compose_text(payload: &EventPayload) -> String {
    format!(
        "{action}\n\n{title}\n{message}\n\n{url}",
        action = payload.action,
        title = select_title(payload),
        message = payload.data.event.message,
        url = payload.data.event.web_url,
    )
}
