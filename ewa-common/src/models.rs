//! Wire models shared between crates
//!
//! These mirror the JSON shapes produced by the external inference and
//! detection services. None of them are persisted.

use serde::{Deserialize, Serialize};

use crate::ItemCategory;

/// Result of classifying a single uploaded image
///
/// Returned verbatim by the inference service's `/predict/` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub class_id: u32,
    pub class_name: String,
    pub confidence: f64,
}

impl ClassificationResult {
    /// Category for this result, if the class name is one the model is known to emit
    pub fn category(&self) -> Option<ItemCategory> {
        self.class_name.parse().ok()
    }
}

/// Bounding box reported by the detection backend
///
/// Coordinates are in the pixel space of the image the backend analysed,
/// whose size is given by `image_width`/`image_height` when known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub confidence: f64,
    pub class_id: u32,
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
}
