//! Server-Sent Events (SSE) explanation stream
//!
//! GET /stream?location=&imageClass=&language=
//!
//! Streams events:
//! - `message` per generated fragment (`id` = 0, 1, 2, ...)
//! - `message` with `[DONE]` on completion, or `error` on failure
//!
//! The channel closes after the terminal event.

use axum::{
    extract::{Query, State},
    response::sse::{Event, Sse},
};
use futures::stream::{Stream, StreamExt};
use serde::Deserialize;
use std::convert::Infallible;
use tracing::info;

use ewa_common::sse::{RelayEvent, DONE_SENTINEL};

use crate::error::{ApiError, ApiResult};
use crate::relay::{relay_stream, ExplanationRequest, DEFAULT_LANGUAGE};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct StreamQuery {
    location: Option<String>,
    #[serde(rename = "imageClass")]
    image_class: Option<String>,
    language: Option<String>,
}

impl StreamQuery {
    /// Validate parameters before anything is streamed
    fn into_request(self) -> ApiResult<ExplanationRequest> {
        let location = self.location.filter(|s| !s.is_empty());
        let image_class = self.image_class.filter(|s| !s.is_empty());

        match (location, image_class) {
            (Some(location), Some(item_category)) => Ok(ExplanationRequest {
                location,
                item_category,
                language: self
                    .language
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            }),
            _ => Err(ApiError::MissingParameters(
                "location and imageClass are required",
            )),
        }
    }
}

/// Encode a relay event for the wire
pub fn sse_event(event: RelayEvent) -> Event {
    let encoded = Event::default().event(event.event_type());
    match event {
        RelayEvent::Fragment { id, text } => encoded.data(sse_safe(&text)).id(id.to_string()),
        RelayEvent::Done => encoded.data(DONE_SENTINEL),
        RelayEvent::Error { message } => encoded.data(sse_safe(&message)),
    }
}

/// SSE data lines cannot carry carriage returns; fold CRLF and lone CR into LF
fn sse_safe(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

pub async fn stream_explanation(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let request = query.into_request()?;
    info!("New SSE client connected to explanation stream");

    let events = relay_stream(request, state.directory.clone(), state.generator.clone())
        .map(|event| Ok(sse_event(event)));

    Ok(Sse::new(events))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sse_safe_folds_carriage_returns() {
        assert_eq!(sse_safe("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(sse_safe("plain"), "plain");
    }

    #[test]
    fn test_query_defaults_language() {
        let query = StreamQuery {
            location: Some("Noida".to_string()),
            image_class: Some("Mobile".to_string()),
            language: Some("  ".to_string()),
        };
        let request = query.into_request().unwrap();
        assert_eq!(request.language, DEFAULT_LANGUAGE);
    }
}
