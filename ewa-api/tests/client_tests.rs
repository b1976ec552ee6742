//! Gemini client against a local stand-in for the streaming endpoint
//!
//! The stand-in answers with canned `text/event-stream` bodies so the
//! client's request shape and SSE decoding are exercised over real HTTP.

mod helpers;

use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use ewa_api::relay::{GeminiClient, GenerationError, Generator, Prompt};
use ewa_api::{build_router, AppState};
use ewa_common::sse::DONE_SENTINEL;
use futures::StreamExt;
use helpers::mocks::MockClassifier;
use helpers::sse_frames::parse_frames;
use helpers::{extract_text, get_request, spawn_server};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot` method

const TEST_KEY: &str = "test-key";
const TEST_MODEL: &str = "gemini-test";

fn chunk(text: &str) -> String {
    format!(
        "data: {}\r\n\r\n",
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
        })
    )
}

fn event_stream(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/event-stream")], body).into_response()
}

/// Stand-in endpoint: checks the request, then streams two fragments
async fn fake_stream(
    Path(model_action): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    if model_action != format!("{}:streamGenerateContent", TEST_MODEL) {
        return (StatusCode::NOT_FOUND, "unknown model").into_response();
    }
    if query.get("alt").map(String::as_str) != Some("sse")
        || query.get("key").map(String::as_str) != Some(TEST_KEY)
    {
        return (StatusCode::FORBIDDEN, "bad key").into_response();
    }

    let system = body["system_instruction"]["parts"][0]["text"].as_str().unwrap_or_default();
    let user = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default();
    let role = body["contents"][0]["role"].as_str().unwrap_or_default();

    let mut out = String::new();
    out.push_str(&chunk(&format!("[{}] ", role)));
    out.push_str(&chunk(&format!("{} / {}", system, user)));
    // Trailing usage report carries no text
    out.push_str("data: {\"usageMetadata\":{\"totalTokenCount\":3}}\r\n\r\n");
    event_stream(out)
}

async fn spawn_gemini() -> String {
    spawn_server(Router::new().route("/v1beta/models/:model_action", post(fake_stream))).await
}

fn prompt() -> Prompt {
    Prompt {
        system_instruction: "sys".to_string(),
        user_prompt: "hello".to_string(),
    }
}

async fn collect(client: &GeminiClient) -> Vec<Result<String, GenerationError>> {
    let stream = client.generate(&prompt()).await.expect("Should open stream");
    stream.collect().await
}

#[tokio::test]
async fn test_gemini_streams_fragments() {
    let base = spawn_gemini().await;
    let client = GeminiClient::with_base_url(base, TEST_KEY, TEST_MODEL).unwrap();

    let fragments: Vec<String> = collect(&client)
        .await
        .into_iter()
        .map(|r| r.expect("fragment"))
        .collect();

    assert_eq!(fragments, vec!["[user] ".to_string(), "sys / hello".to_string()]);
}

#[tokio::test]
async fn test_gemini_wrong_key_is_status_error() {
    let base = spawn_gemini().await;
    let client = GeminiClient::with_base_url(base, "wrong", TEST_MODEL).unwrap();

    match client.generate(&prompt()).await {
        Err(GenerationError::Status { status, body }) => {
            assert_eq!(status, 403);
            assert_eq!(body, "bad key");
        }
        Err(other) => panic!("unexpected error {:?}", other),
        Ok(_) => panic!("expected a status error"),
    }
}

#[tokio::test]
async fn test_gemini_error_payload_ends_stream() {
    let base = spawn_server(Router::new().route(
        "/v1beta/models/:model_action",
        post(|| async {
            let mut out = chunk("first");
            out.push_str("data: {\"error\":{\"code\":500,\"message\":\"internal\"}}\n\n");
            out.push_str(&chunk("never"));
            event_stream(out)
        }),
    ))
    .await;
    let client = GeminiClient::with_base_url(base, TEST_KEY, TEST_MODEL).unwrap();

    let results = collect(&client).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap(), "first");
    assert!(matches!(results[1], Err(GenerationError::Rejected(_))));
}

#[tokio::test]
async fn test_gemini_unterminated_last_event() {
    let base = spawn_server(Router::new().route(
        "/v1beta/models/:model_action",
        post(|| async {
            let mut out = chunk("one");
            // No blank line after the final event
            out.push_str(&chunk("two").trim_end().to_string());
            event_stream(out)
        }),
    ))
    .await;
    let client = GeminiClient::with_base_url(base, TEST_KEY, TEST_MODEL).unwrap();

    let fragments: Vec<String> = collect(&client)
        .await
        .into_iter()
        .map(|r| r.expect("fragment"))
        .collect();

    assert_eq!(fragments, vec!["one".to_string(), "two".to_string()]);
}

#[tokio::test]
async fn test_relay_through_gemini_client() {
    let base = spawn_gemini().await;
    let generator = GeminiClient::with_base_url(base, TEST_KEY, TEST_MODEL).unwrap();
    let app = build_router(AppState::new(
        MockClassifier::returning(3, "Mobile", 0.9),
        Arc::new(generator),
    ));

    let response = app
        .oneshot(get_request("/stream?location=Noida&imageClass=Mobile"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let frames = parse_frames(&extract_text(response.into_body()).await);

    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].data, "[user] ");
    assert_eq!(frames[0].id.as_deref(), Some("0"));
    assert!(frames[1]
        .data
        .contains("I'm located at Noida and I have a Mobile"));
    assert_eq!(frames[1].id.as_deref(), Some("1"));
    assert_eq!(frames[2].data, DONE_SENTINEL);
}
