//! Detection socket protocol
//!
//! Server to client messages are JSON objects tagged by `type`:
//! - `{"type":"client_id","client_id":"..."}` once after connect
//! - `{"type":"detections","data":[Detection, ...]}` per analysed frame
//!
//! Client to server, each captured frame is sent as
//! `{"type":"video_frame","client_id":...,"frame":"data:image/jpeg;base64,...","timestamp":ms}`.

use ewa_common::models::Detection;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message received from the detection backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SocketMessage {
    /// Identifier the backend assigned to this connection
    ClientId { client_id: String },

    /// Detections for the most recently analysed frame (possibly empty)
    Detections { data: Vec<Detection> },

    /// Any message type this client does not handle
    #[serde(other)]
    Unknown,
}

impl SocketMessage {
    pub fn parse(raw: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(raw).map_err(|e| ProtocolError::Malformed(e.to_string()))
    }
}

/// Message sent to the detection backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    VideoFrame {
        /// `None` until the backend has assigned an id
        client_id: Option<String>,
        /// Frame encoded as a data URL
        frame: String,
        /// Capture time, milliseconds since the Unix epoch
        timestamp: i64,
    },
}

impl ClientMessage {
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(|e| ProtocolError::Encode(e.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Malformed socket message: {0}")]
    Malformed(String),

    #[error("Failed to encode socket message: {0}")]
    Encode(String),
}
