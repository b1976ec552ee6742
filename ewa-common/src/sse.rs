//! Server-Sent Events (SSE) utilities
//!
//! Event vocabulary of the explanation relay, shared by the server (which
//! encodes it as SSE) and the client feed (which decodes it).
//!
//! Wire format per stream:
//! - zero or more `message` events, `data` = text fragment, `id` = 0, 1, 2, ...
//! - then exactly one of: a `message` event with `data: [DONE]`, or an `error` event

/// Payload of the final `message` event of a successful stream
pub const DONE_SENTINEL: &str = "[DONE]";

/// SSE event name for fragments and the completion sentinel
pub const MESSAGE_EVENT: &str = "message";

/// SSE event name for a failed stream
pub const ERROR_EVENT: &str = "error";

/// Fixed message sent to the browser when generation fails
pub const STREAM_ERROR_MESSAGE: &str =
    "An error occurred while generating the disposal guidance.";

/// One event on the relay stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayEvent {
    /// A generated text fragment with its per-stream sequence number
    Fragment { id: u64, text: String },
    /// Generation finished normally
    Done,
    /// Generation failed; nothing follows
    Error { message: String },
}

impl RelayEvent {
    /// SSE `event:` field
    pub fn event_type(&self) -> &'static str {
        match self {
            RelayEvent::Fragment { .. } | RelayEvent::Done => MESSAGE_EVENT,
            RelayEvent::Error { .. } => ERROR_EVENT,
        }
    }

    /// SSE `data:` field
    pub fn data(&self) -> &str {
        match self {
            RelayEvent::Fragment { text, .. } => text,
            RelayEvent::Done => DONE_SENTINEL,
            RelayEvent::Error { message } => message,
        }
    }

    /// SSE `id:` field; only fragments carry one
    pub fn id(&self) -> Option<u64> {
        match self {
            RelayEvent::Fragment { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Whether this event ends the stream
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RelayEvent::Fragment { .. })
    }

    /// Decode from the fields of a received SSE event
    ///
    /// `event_type` defaults to `message` when absent, as in the SSE standard.
    pub fn from_fields(event_type: Option<&str>, data: &str, id: Option<&str>) -> RelayEvent {
        match event_type.unwrap_or(MESSAGE_EVENT) {
            ERROR_EVENT => RelayEvent::Error {
                message: data.to_string(),
            },
            _ if data == DONE_SENTINEL => RelayEvent::Done,
            _ => RelayEvent::Fragment {
                id: id.and_then(|s| s.trim().parse().ok()).unwrap_or_default(),
                text: data.to_string(),
            },
        }
    }
}
