//! Explanation stream consumer
//!
//! Accumulates the fragments the relay sends over `GET /stream` until
//! `[DONE]` or an error. The host's event source forwards each received
//! event and any transport error.

use ewa_common::sse::RelayEvent;
use tracing::{debug, warn};

/// Shown to the user for any failure
pub const CONNECTION_FAILED_MESSAGE: &str = "Connection failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    Streaming,
    Complete,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ExplanationFeed {
    state: FeedState,
    fragments: Vec<String>,
    last_event_id: Option<u64>,
}

impl Default for ExplanationFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplanationFeed {
    pub fn new() -> Self {
        Self {
            state: FeedState::Streaming,
            fragments: Vec::new(),
            last_event_id: None,
        }
    }

    /// Apply one received event; returns `true` if the host should close its event source
    pub fn on_event(&mut self, event: RelayEvent) -> bool {
        if self.state != FeedState::Streaming {
            return true;
        }

        match event {
            RelayEvent::Fragment { id, text } => {
                debug!("Fragment {} ({} bytes)", id, text.len());
                self.last_event_id = Some(id);
                self.fragments.push(text);
                false
            }
            RelayEvent::Done => {
                self.state = FeedState::Complete;
                true
            }
            RelayEvent::Error { message } => {
                warn!("Explanation stream reported an error: {}", message);
                self.state = FeedState::Failed;
                true
            }
        }
    }

    /// Apply an event given as raw SSE fields
    pub fn on_sse(&mut self, event_type: Option<&str>, data: &str, id: Option<&str>) -> bool {
        self.on_event(RelayEvent::from_fields(event_type, data, id))
    }

    /// The connection broke or could not be opened
    pub fn on_transport_error(&mut self) {
        if self.state == FeedState::Streaming {
            warn!("Explanation stream connection failed");
            self.state = FeedState::Failed;
        }
    }

    /// Forget everything, ready for a new request
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == FeedState::Complete
    }

    /// Text received so far
    pub fn text(&self) -> String {
        self.fragments.concat()
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn last_event_id(&self) -> Option<u64> {
        self.last_event_id
    }

    /// User-facing error, once failed
    pub fn error(&self) -> Option<&'static str> {
        (self.state == FeedState::Failed).then_some(CONNECTION_FAILED_MESSAGE)
    }
}
