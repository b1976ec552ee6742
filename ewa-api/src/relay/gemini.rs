//! Gemini streaming client
//!
//! Calls `models/{model}:streamGenerateContent?alt=sse` and yields the text
//! of each streamed candidate as one fragment.
//!
//! # API Reference
//! - Endpoint: https://generativelanguage.googleapis.com/v1beta/models/{model}:streamGenerateContent
//! - Documentation: https://ai.google.dev/api/generate-content

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use super::generator::{FragmentStream, GenerationError, Generator};
use super::prompt::Prompt;
use super::sse_decoder::SseDecoder;

/// Public Gemini API base URL
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StreamChunk {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Extract the fragment text of one streamed payload
///
/// `Ok(None)` for payloads that carry no text (e.g. a trailing usage report).
fn fragment_text(payload: &str) -> Result<Option<String>, GenerationError> {
    let chunk: StreamChunk =
        serde_json::from_str(payload).map_err(|e| GenerationError::Malformed(e.to_string()))?;

    if let Some(err) = chunk.error {
        return Err(GenerationError::Rejected(err.message));
    }
    if let Some(reason) = chunk.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(GenerationError::Rejected(format!("prompt blocked: {}", reason)));
    }

    let text: String = chunk
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    Ok((!text.is_empty()).then_some(text))
}

/// Client for the Gemini generative-language API
pub struct GeminiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_base_url(GEMINI_API_URL, api_key, model)
    }

    /// Point the client at a different host (proxies, tests)
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    fn stream_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:streamGenerateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, prompt: &Prompt) -> Result<FragmentStream, GenerationError> {
        let body = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: [TextPart {
                    text: &prompt.system_instruction,
                }],
            },
            contents: [Content {
                role: Some("user"),
                parts: [TextPart {
                    text: &prompt.user_prompt,
                }],
            }],
        };

        debug!("Opening Gemini stream for model {}", self.model);

        let response = self
            .http_client
            .post(self.stream_url())
            .query(&[("alt", "sse"), ("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Gemini returned {}: {}", status, body);
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mut body = response.bytes_stream();
        let fragments = async_stream::stream! {
            let mut decoder = SseDecoder::new();

            while let Some(chunk) = body.next().await {
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        yield Err(GenerationError::Network(e.without_url().to_string()));
                        return;
                    }
                };

                for payload in decoder.push(&chunk) {
                    match fragment_text(&payload) {
                        Ok(Some(text)) => yield Ok(text),
                        Ok(None) => {}
                        Err(e) => {
                            yield Err(e);
                            return;
                        }
                    }
                }
            }

            if let Some(payload) = decoder.finish() {
                match fragment_text(&payload) {
                    Ok(Some(text)) => yield Ok(text),
                    Ok(None) => {}
                    Err(e) => yield Err(e),
                }
            }
        };

        Ok(Box::pin(fragments))
    }
}
