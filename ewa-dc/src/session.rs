//! Live detection session
//!
//! Follows one detection socket from connect to close and keeps what the
//! overlay needs: the latest detections snapshot, the per-category store,
//! and debug counters. The host forwards socket callbacks and calls
//! [`DetectionSession::tick`] once per animation frame.
//!
//! ```text
//! Idle -> Connecting -> Open -> Closed
//!            |                    ^
//!            +--- error/timeout --+
//! ```

use chrono::{DateTime, Duration, Utc};
use ewa_common::models::Detection;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::protocol::{ClientMessage, ProtocolError, SocketMessage};
use crate::render::{plan_frame, DrawCommand, FrameDimensions};
use crate::store::DetectionStore;

pub const DEFAULT_THRESHOLD: f64 = 0.25;
pub const DEFAULT_BOX_COLOR: &str = "#00FF00";

/// How long a connection attempt may stay unopened
pub const CONNECT_TIMEOUT_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Connecting,
    Open,
    Closed,
}

/// Counters shown in the debug panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugInfo {
    pub status: String,
    pub message_count: u64,
    /// Size of the latest detections snapshot
    pub detection_count: usize,
    pub last_message_at: Option<DateTime<Utc>>,
    pub video_size: Option<FrameDimensions>,
}

#[derive(Debug)]
pub struct DetectionSession {
    state: SessionState,
    connecting_since: Option<DateTime<Utc>>,
    client_id: Option<String>,
    latest: Vec<Detection>,
    store: DetectionStore,
    threshold: f64,
    box_color: String,
    debug: DebugInfo,
    last_error: Option<String>,
}

impl Default for DetectionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionSession {
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_THRESHOLD, DEFAULT_BOX_COLOR)
    }

    pub fn with_settings(threshold: f64, box_color: impl Into<String>) -> Self {
        Self {
            state: SessionState::Idle,
            connecting_since: None,
            client_id: None,
            latest: Vec::new(),
            store: DetectionStore::new(),
            threshold,
            box_color: box_color.into(),
            debug: DebugInfo {
                status: "Not connected".to_string(),
                ..DebugInfo::default()
            },
            last_error: None,
        }
    }

    /// Start connecting; ignored while a connection is pending or open
    pub fn connect(&mut self, url: &str, now: DateTime<Utc>) -> bool {
        match self.state {
            SessionState::Connecting | SessionState::Open => false,
            SessionState::Idle | SessionState::Closed => {
                info!("Connecting to detection stream at {}", url);
                self.state = SessionState::Connecting;
                self.connecting_since = Some(now);
                self.last_error = None;
                self.debug.status = format!("Connecting to {}...", url);
                true
            }
        }
    }

    pub fn on_open(&mut self) {
        if self.state != SessionState::Connecting {
            return;
        }
        info!("Detection stream connected");
        self.state = SessionState::Open;
        self.connecting_since = None;
        self.debug.status = "Connected".to_string();
    }

    /// Handle one raw socket message
    ///
    /// Malformed messages are reported and otherwise ignored; the session
    /// stays open. Messages arriving when not open are dropped.
    pub fn on_message(&mut self, raw: &str, now: DateTime<Utc>) -> Result<(), ProtocolError> {
        if self.state != SessionState::Open {
            debug!("Dropping message received in state {:?}", self.state);
            return Ok(());
        }

        let message = SocketMessage::parse(raw).map_err(|e| {
            warn!("Error processing detection message: {}", e);
            e
        })?;

        self.debug.message_count += 1;
        self.debug.last_message_at = Some(now);

        match message {
            SocketMessage::ClientId { client_id } => {
                info!("Received client_id: {}", client_id);
                self.client_id = Some(client_id);
            }
            SocketMessage::Detections { data } => {
                self.record_best(&data, now);
                self.debug.detection_count = data.len();
                self.latest = data;
            }
            SocketMessage::Unknown => {}
        }
        Ok(())
    }

    /// Feed the store with the first detection per class at or above the threshold
    fn record_best(&mut self, detections: &[Detection], now: DateTime<Utc>) {
        let mut seen: HashSet<&str> = HashSet::new();
        for detection in detections {
            if detection.confidence >= self.threshold && seen.insert(detection.class_name.as_str()) {
                self.store.add_detection(detection.clone(), now);
            }
        }
    }

    /// Socket error; the connection is considered gone
    pub fn on_error(&mut self, message: &str) {
        let message = if message.is_empty() { "Unknown error" } else { message };
        warn!("Detection stream error: {}", message);
        self.last_error = Some(format!("Failed to connect to detection stream: {}", message));
        self.debug.status = format!("Error: {}", message);
        self.shut_down();
    }

    /// Fail a connection attempt that has not opened in time
    pub fn check_timeout(&mut self, now: DateTime<Utc>) -> bool {
        match (self.state, self.connecting_since) {
            (SessionState::Connecting, Some(since))
                if now - since >= Duration::seconds(CONNECT_TIMEOUT_SECS) =>
            {
                warn!(
                    "Detection stream connection timed out after {} seconds",
                    CONNECT_TIMEOUT_SECS
                );
                self.last_error = Some(
                    "WebSocket connection timed out - server may not be reachable".to_string(),
                );
                self.debug.status = "Connection timeout".to_string();
                self.shut_down();
                true
            }
            _ => false,
        }
    }

    /// Tear down the session from any state
    ///
    /// The store survives so detected items stay selectable after the camera stops.
    pub fn close(&mut self) {
        if self.state != SessionState::Closed {
            info!("Detection stream closed");
        }
        self.debug.status = "Closed".to_string();
        self.shut_down();
    }

    fn shut_down(&mut self) {
        self.state = SessionState::Closed;
        self.connecting_since = None;
        self.client_id = None;
        self.latest.clear();
    }

    /// Encode a captured frame for sending; `None` unless the socket is open
    pub fn frame_message(
        &self,
        frame_data_url: String,
        now: DateTime<Utc>,
    ) -> Result<Option<String>, ProtocolError> {
        if self.state != SessionState::Open {
            return Ok(None);
        }
        ClientMessage::VideoFrame {
            client_id: self.client_id.clone(),
            frame: frame_data_url,
            timestamp: now.timestamp_millis(),
        }
        .to_json()
        .map(Some)
    }

    /// Plan the overlay for the current animation frame
    ///
    /// `None` while the video has no dimensions yet; the caller keeps ticking.
    pub fn tick(&mut self, video: Option<FrameDimensions>) -> Option<Vec<DrawCommand>> {
        let frame = video.filter(FrameDimensions::is_ready)?;
        self.debug.video_size = Some(frame);
        Some(plan_frame(frame, &self.latest, self.threshold, &self.box_color))
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold.clamp(0.0, 1.0);
    }

    pub fn set_box_color(&mut self, color: impl Into<String>) {
        self.box_color = color.into();
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn latest_detections(&self) -> &[Detection] {
        &self.latest
    }

    pub fn store(&self) -> &DetectionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DetectionStore {
        &mut self.store
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn box_color(&self) -> &str {
        &self.box_color
    }

    pub fn debug_info(&self) -> &DebugInfo {
        &self.debug
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
