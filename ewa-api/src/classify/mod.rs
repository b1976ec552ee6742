//! Classification gateway
//!
//! Validates an uploaded image, then forwards it to the external inference
//! service and returns the predicted category. One request, one upstream
//! call, no retries.

mod inference;
mod validation;

pub use inference::InferenceClient;
pub use validation::{
    validate_submission, ALLOWED_EXTENSIONS, MAX_FILE_SIZE, MSG_INVALID_FILE, MSG_LOCATION_REQUIRED,
    MSG_TOO_LARGE, MSG_UNSUPPORTED_FORMAT,
};

use async_trait::async_trait;
use ewa_common::models::ClassificationResult;
use thiserror::Error;

/// An uploaded image that passed validation
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// MIME type implied by the file extension
    pub fn content_type(&self) -> &'static str {
        match validation::extension(&self.filename).as_deref() {
            Some("png") => "image/png",
            _ => "image/jpeg",
        }
    }
}

/// Failure talking to the inference service
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Service answered with a non-success status; holds its status text
    #[error("{0}")]
    Status(String),

    /// Request never completed
    #[error("{0}")]
    Network(String),

    /// Response body was not a classification result
    #[error("Invalid response from inference service: {0}")]
    Decode(String),
}

/// Seam to the external image classifier
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, upload: ImageUpload) -> Result<ClassificationResult, ClassifyError>;
}
