//! Inference service client
//!
//! Posts the image as a multipart form to `{base_url}/predict/` and decodes
//! `{ class_id, class_name, confidence }`.

use async_trait::async_trait;
use ewa_common::models::ClassificationResult;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::{ClassifyError, Classifier, ImageUpload};

/// Applies to establishing the connection only; inference itself may be slow
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the external image classification service
pub struct InferenceClient {
    http_client: Client,
    base_url: String,
}

impl InferenceClient {
    /// Create a client for the service at `base_url` (e.g. `http://127.0.0.1:8000`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn predict_url(&self) -> String {
        format!("{}/predict/", self.base_url)
    }
}

#[async_trait]
impl Classifier for InferenceClient {
    async fn classify(&self, upload: ImageUpload) -> Result<ClassificationResult, ClassifyError> {
        let content_type = upload.content_type();
        let size = upload.bytes.len();

        let part = Part::bytes(upload.bytes)
            .file_name(upload.filename.clone())
            .mime_str(content_type)
            .map_err(|e| ClassifyError::Network(format!("Failed to build upload: {}", e)))?;
        let form = Form::new().part("file", part);

        debug!(
            "Posting {} ({} bytes, {}) to {}",
            upload.filename,
            size,
            content_type,
            self.predict_url()
        );

        let response = self
            .http_client
            .post(self.predict_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClassifyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Inference service returned {}", status);
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());
            return Err(ClassifyError::Status(reason));
        }

        response
            .json::<ClassificationResult>()
            .await
            .map_err(|e| ClassifyError::Decode(e.to_string()))
    }
}
