//! Per-connection relay state machine
//!
//! ```text
//! Idle → AwaitingUpstream → Streaming(n) → Done
//!              │                 │ ↺ fragment
//!              └──────┬──────────┘
//!                     ▼
//!                   Failed
//! ```
//!
//! `Done` and `Failed` are terminal: every transition out of them is refused
//! and produces no event, so at most one terminal event exists per stream.

use ewa_common::sse::{RelayEvent, STREAM_ERROR_MESSAGE};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::prompt::ExplanationRequest;

/// Relay lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Idle,
    AwaitingUpstream,
    /// `n` fragments forwarded so far
    Streaming(u64),
    Done,
    Failed,
}

impl RelayState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RelayState::Done | RelayState::Failed)
    }
}

/// One SSE connection's worth of relay state
///
/// Dropped together with the response stream; nothing outlives it.
#[derive(Debug)]
pub struct StreamSession {
    id: Uuid,
    request: ExplanationRequest,
    state: RelayState,
}

impl StreamSession {
    pub fn new(request: ExplanationRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            request,
            state: RelayState::Idle,
        }
    }

    /// Log correlation id
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn request(&self) -> &ExplanationRequest {
        &self.request
    }

    pub fn state(&self) -> RelayState {
        self.state
    }

    /// Sequence number the next fragment will carry
    pub fn sequence_number(&self) -> u64 {
        match self.state {
            RelayState::Streaming(n) => n,
            _ => 0,
        }
    }

    /// `Idle → AwaitingUpstream`; returns false from any other state
    pub fn begin(&mut self) -> bool {
        if self.state != RelayState::Idle {
            return false;
        }
        info!(
            "Relay {}: requesting guidance for {} in {:?} ({})",
            self.id, self.request.item_category, self.request.location, self.request.language
        );
        self.state = RelayState::AwaitingUpstream;
        true
    }

    /// Forward one upstream fragment
    pub fn on_fragment(&mut self, text: String) -> Option<RelayEvent> {
        let id = match self.state {
            RelayState::AwaitingUpstream => 0,
            RelayState::Streaming(n) => n,
            _ => return None,
        };
        debug!("Relay {}: fragment {} ({} bytes)", self.id, id, text.len());
        self.state = RelayState::Streaming(id + 1);
        Some(RelayEvent::Fragment { id, text })
    }

    /// Upstream finished normally
    pub fn on_complete(&mut self) -> Option<RelayEvent> {
        match self.state {
            RelayState::AwaitingUpstream | RelayState::Streaming(_) => {
                info!(
                    "Relay {}: completed after {} fragment(s)",
                    self.id,
                    self.sequence_number()
                );
                self.state = RelayState::Done;
                Some(RelayEvent::Done)
            }
            _ => None,
        }
    }

    /// Upstream or transport failed; `reason` is logged, never sent to the client
    pub fn on_failure(&mut self, reason: &str) -> Option<RelayEvent> {
        if self.state.is_terminal() {
            return None;
        }
        warn!(
            "Relay {}: failed in state {:?}: {}",
            self.id, self.state, reason
        );
        self.state = RelayState::Failed;
        Some(RelayEvent::Error {
            message: STREAM_ERROR_MESSAGE.to_string(),
        })
    }
}

impl Drop for StreamSession {
    fn drop(&mut self) {
        // Response stream dropped before a terminal event: the client went away
        if !self.state.is_terminal() && self.state != RelayState::Idle {
            info!(
                "Relay {}: client disconnected in state {:?}",
                self.id, self.state
            );
            self.state = RelayState::Failed;
        }
    }
}
