//! Generative-text seam
//!
//! A [`Generator`] turns a [`Prompt`] into a stream of text fragments. The
//! stream is consumed cooperatively; nothing is buffered beyond one fragment.

use async_trait::async_trait;
use futures::stream::Stream;
use std::pin::Pin;
use thiserror::Error;

use super::prompt::Prompt;

/// Fragments produced by a generator, in order
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, GenerationError>> + Send>>;

/// Failure talking to the generative-text service
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key configured
    #[error("Generative-text service is not configured")]
    NotConfigured,

    /// Request never completed, or the body stream broke mid-way
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("Generative-text service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// A streamed payload could not be decoded
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// Service reported an error or refused the prompt
    #[error("Generation rejected: {0}")]
    Rejected(String),
}

/// Seam to the external generative-text service
#[async_trait]
pub trait Generator: Send + Sync {
    /// Start generation; fragments arrive on the returned stream
    async fn generate(&self, prompt: &Prompt) -> Result<FragmentStream, GenerationError>;
}

/// Stand-in used when no API key is configured
///
/// Every stream fails immediately, which the relay reports as an `error` event.
pub struct UnconfiguredGenerator;

#[async_trait]
impl Generator for UnconfiguredGenerator {
    async fn generate(&self, _prompt: &Prompt) -> Result<FragmentStream, GenerationError> {
        Err(GenerationError::NotConfigured)
    }
}
