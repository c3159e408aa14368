//! Shared helpers for summarizer-service integration tests.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use secrecy::Secret;
use service_core::config::Config;
use summarizer_service::config::{GroqConfig, SecurityConfig, SummarizerConfig, DEFAULT_MODEL};
use summarizer_service::services::providers::TextProvider;
use summarizer_service::startup::{build_router, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Config that never reaches a real provider and binds a random port.
pub fn test_config() -> SummarizerConfig {
    SummarizerConfig {
        common: Config {
            port: 0,
            ..Config::default()
        },
        groq: GroqConfig {
            api_key: Secret::new("test-api-key".to_string()),
            api_base: "http://127.0.0.1:9".to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 5,
        },
        security: SecurityConfig {
            allowed_origins: vec![
                ALLOWED_ORIGIN.to_string(),
                "http://localhost:5173".to_string(),
            ],
        },
    }
}

pub fn app_with(provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState::new(test_config(), provider))
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send one request and decode the JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, headers, body)
}

pub fn assert_iso_timestamp(value: &serde_json::Value) {
    let ts = value.as_str().expect("timestamp should be a string");
    assert!(ts.ends_with('Z'), "timestamp {} should be UTC", ts);
    assert!(ts.contains('T'), "timestamp {} should be ISO-8601", ts);
}
