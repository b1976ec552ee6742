//! Detection store
//!
//! Best detection seen so far per category, for the "detected items" list
//! the user picks from. One store per page; nothing is shared or persisted.

use chrono::{DateTime, Utc};
use ewa_common::models::Detection;
use serde::Serialize;
use tracing::debug;

/// A detection kept by the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredDetection {
    /// `"{class_name}-{millis}"`, assigned when stored
    pub id: String,
    #[serde(flatten)]
    pub detection: Detection,
    /// When stored, milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl StoredDetection {
    fn new(detection: Detection, now: DateTime<Utc>) -> Self {
        let timestamp = now.timestamp_millis();
        Self {
            id: format!("{}-{}", detection.class_name, timestamp),
            detection,
            timestamp,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct DetectionStore {
    detections: Vec<StoredDetection>,
    selected: Option<StoredDetection>,
    show_debug: bool,
}

impl DetectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a detection
    ///
    /// A category already present is replaced only by a strictly more
    /// confident detection; it keeps its position in the list. Returns
    /// whether the store changed.
    pub fn add_detection(&mut self, detection: Detection, now: DateTime<Utc>) -> bool {
        let existing = self
            .detections
            .iter()
            .position(|d| d.detection.class_name == detection.class_name);

        match existing {
            Some(index) if detection.confidence > self.detections[index].detection.confidence => {
                debug!(
                    "Replacing {} ({:.2} -> {:.2})",
                    detection.class_name,
                    self.detections[index].detection.confidence,
                    detection.confidence
                );
                self.detections[index] = StoredDetection::new(detection, now);
                true
            }
            Some(_) => false,
            None => {
                debug!("New category detected: {}", detection.class_name);
                self.detections.push(StoredDetection::new(detection, now));
                true
            }
        }
    }

    /// Select a stored detection by id; `None` or an unknown id clears the selection
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.and_then(|id| self.detections.iter().find(|d| d.id == id).cloned());
    }

    /// Drop every detection and the selection
    pub fn clear(&mut self) {
        self.detections.clear();
        self.selected = None;
    }

    pub fn toggle_debug(&mut self) -> bool {
        self.show_debug = !self.show_debug;
        self.show_debug
    }

    pub fn detections(&self) -> &[StoredDetection] {
        &self.detections
    }

    pub fn selected(&self) -> Option<&StoredDetection> {
        self.selected.as_ref()
    }

    pub fn show_debug(&self) -> bool {
        self.show_debug
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}
