//! Upload validation
//!
//! Runs before any network call. Every violated constraint is reported,
//! not just the first.

use super::ImageUpload;
use crate::error::ValidationIssue;

/// Uploads must be strictly smaller than this many bytes
pub const MAX_FILE_SIZE: usize = 5_000_000;

/// Accepted file extensions, compared case-insensitively
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub const MSG_INVALID_FILE: &str = "Invalid file";
pub const MSG_TOO_LARGE: &str = "Max size is 5MB.";
pub const MSG_UNSUPPORTED_FORMAT: &str = "Only .png, .jpg, & .jpeg formats are supported.";
pub const MSG_LOCATION_REQUIRED: &str = "Location is required";

/// Lowercased text after the last `.` of a filename
pub(super) fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Check a `/submit` form
///
/// `file` is `None` when the form had no file part.
pub fn validate_submission(
    file: Option<&ImageUpload>,
    location: Option<&str>,
) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    match file {
        None => issues.push(ValidationIssue {
            field: "file",
            message: MSG_INVALID_FILE,
        }),
        Some(upload) => {
            if upload.bytes.len() >= MAX_FILE_SIZE {
                issues.push(ValidationIssue {
                    field: "file",
                    message: MSG_TOO_LARGE,
                });
            }

            let allowed = extension(&upload.filename)
                .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
                .unwrap_or(false);
            if !allowed {
                issues.push(ValidationIssue {
                    field: "file",
                    message: MSG_UNSUPPORTED_FORMAT,
                });
            }
        }
    }

    if location.map_or(true, str::is_empty) {
        issues.push(ValidationIssue {
            field: "location",
            message: MSG_LOCATION_REQUIRED,
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
