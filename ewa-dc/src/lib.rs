//! ewa-dc - E-Waste Analyzer detection client core
//!
//! Everything the live-camera page does that is not drawing pixels or
//! opening sockets: decoding detection messages, keeping the best detection
//! per category, planning overlay draw commands each frame, and following
//! the explanation stream. The host front end owns the socket, the video
//! element and the canvas, and forwards their events here.

pub mod explanation;
pub mod protocol;
pub mod render;
pub mod session;
pub mod store;

pub use explanation::{ExplanationFeed, FeedState, CONNECTION_FAILED_MESSAGE};
pub use protocol::{ClientMessage, ProtocolError, SocketMessage};
pub use render::{plan_frame, DrawCommand, FrameDimensions, Rect};
pub use session::{
    DebugInfo, DetectionSession, SessionState, CONNECT_TIMEOUT_SECS, DEFAULT_BOX_COLOR,
    DEFAULT_THRESHOLD,
};
pub use store::{DetectionStore, StoredDetection};
