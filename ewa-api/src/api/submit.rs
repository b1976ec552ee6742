//! Image submission endpoint
//!
//! POST /submit (multipart: `file`, `location`)
//! - 200 `{ location, imageClass }`
//! - 422 validation issues, no upstream call made
//! - 500 `{ error }` when the inference service fails
//!
//! The route has no request body limit. The file part is read in chunks and
//! at most `MAX_FILE_SIZE` bytes of it are kept, so an upload of any size
//! ends in validation rather than a transport error.

use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::classify::{validate_submission, ImageUpload, MAX_FILE_SIZE};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Successful classification
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    /// Location exactly as submitted
    pub location: String,
    /// Category name reported by the inference service
    pub image_class: String,
}

/// Read a file part, keeping at most `MAX_FILE_SIZE` bytes
///
/// The remainder is drained so later parts stay readable. A kept length of
/// `MAX_FILE_SIZE` means the file was at least that large.
async fn read_file_capped(field: &mut Field<'_>) -> ApiResult<Vec<u8>> {
    let mut kept = Vec::new();
    let mut total = 0usize;

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        total += chunk.len();
        let room = MAX_FILE_SIZE - kept.len();
        kept.extend_from_slice(&chunk[..chunk.len().min(room)]);
    }

    if total > kept.len() {
        debug!("Discarded {} bytes past the upload ceiling", total - kept.len());
    }
    Ok(kept)
}

pub async fn submit_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<SubmitResponse>> {
    let mut upload: Option<ImageUpload> = None;
    let mut location: Option<String> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                let bytes = read_file_capped(&mut field).await?;
                // A plain text part named `file` is not a file
                if let Some(filename) = filename {
                    upload = Some(ImageUpload { filename, bytes });
                }
            }
            Some("location") => {
                location = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.body_text()))?,
                );
            }
            _ => {}
        }
    }

    if let Err(issues) = validate_submission(upload.as_ref(), location.as_deref()) {
        warn!(
            "Rejected submission: {}",
            issues
                .iter()
                .map(|i| i.message)
                .collect::<Vec<_>>()
                .join("; ")
        );
        return Err(ApiError::Validation(issues));
    }

    let (Some(upload), Some(location)) = (upload, location) else {
        return Err(ApiError::Internal("validated submission missing fields".to_string()));
    };

    info!(
        "Classifying {} ({} bytes) for {:?}",
        upload.filename,
        upload.bytes.len(),
        location
    );

    let result = state.classifier.classify(upload).await.map_err(|e| {
        error!("Error classifying image: {}", e);
        ApiError::Upstream(e.to_string())
    })?;

    info!(
        "Classified as {} (id {}, confidence {:.2})",
        result.class_name, result.class_id, result.confidence
    );

    Ok(Json(SubmitResponse {
        location,
        image_class: result.class_name,
    }))
}
