//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, body::Body};
use serde_json::json;

use herald::api::AppState;
use herald::api::app;
use herald::core::AppConfig;

/// Configuration pointing the completion API at `openai_api_hostname`
/// with pacing short enough to keep tests quick.
pub fn test_config(openai_api_hostname: &str) -> AppConfig {
    AppConfig {
        openai_api_hostname: openai_api_hostname.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("gpt-3.5-turbo"),
        contact_email: String::from("team@example.com"),
        web_ui_path: format!("{}/web-ui", env!("CARGO_MANIFEST_DIR")),
        playback_interval: Duration::from_millis(1),
        live_pacing_interval: Duration::ZERO,
    }
}

/// Creates a test application router from `config`
pub fn test_app_with_config(config: AppConfig) -> Router {
    app(Arc::new(AppState::new(config)))
}

/// Creates a test application router. Requests that reach the
/// completion API will fail to connect.
pub fn test_app() -> Router {
    test_app_with_config(test_config("http://127.0.0.1:1"))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

/// One line of a streamed completion carrying `content`
pub fn completion_chunk(content: &str) -> String {
    format!(
        "data: {}\n\n",
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion.chunk",
            "created": 1694268190,
            "model": "gpt-3.5-turbo",
            "choices": [{"index": 0, "delta": {"content": content}, "finish_reason": null}]
        })
    )
}

/// A complete streamed completion for `fragments`
pub fn completion_body(fragments: &[&str]) -> String {
    let mut body: String = fragments.iter().map(|f| completion_chunk(f)).collect();
    body.push_str("data: [DONE]\n\n");
    body
}
