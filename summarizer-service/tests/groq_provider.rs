//! Groq client tests against a local mock HTTP server.

use secrecy::Secret;
use serde_json::json;
use summarizer_service::config::GroqConfig;
use summarizer_service::services::providers::groq::GroqTextProvider;
use summarizer_service::services::providers::{GenerationRequest, ProviderError, TextProvider};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer, timeout_secs: u64) -> GroqTextProvider {
    GroqTextProvider::new(&GroqConfig {
        api_key: Secret::new("test-key".to_string()),
        api_base: server.uri(),
        model: "llama-3.3-70b-versatile".to_string(),
        timeout_secs,
    })
    .expect("Failed to build provider")
}

fn request() -> GenerationRequest {
    GenerationRequest {
        model: "llama-3.3-70b-versatile".to_string(),
        system_prompt: "Summarize.".to_string(),
        user_prompt: "Alice and Bob agreed to ship v2 by Friday.".to_string(),
        max_tokens: 1500,
        temperature: 0.2,
    }
}

#[tokio::test]
async fn returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "llama-3.3-70b-versatile",
            "max_tokens": 1500,
            "messages": [
                { "role": "system", "content": "Summarize." },
                { "role": "user", "content": "Alice and Bob agreed to ship v2 by Friday." }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Ship v2 Friday." } }
            ],
            "usage": { "prompt_tokens": 20, "completion_tokens": 4, "total_tokens": 24 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = provider_for(&server, 5).generate(&request()).await.unwrap();
    assert_eq!(text, "Ship v2 Friday.");
}

#[tokio::test]
async fn invalid_key_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Invalid API Key", "type": "invalid_request_error", "code": "invalid_api_key" }
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server, 5).generate(&request()).await.unwrap_err();
    assert_eq!(err, ProviderError::Auth("Invalid API Key".to_string()));
}

#[tokio::test]
async fn unknown_model_is_config_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "message": "The model `nope` does not exist", "code": "model_not_found" }
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server, 5).generate(&request()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Config(_)));
}

#[tokio::test]
async fn server_error_is_unknown_with_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .mount(&server)
        .await;

    let err = provider_for(&server, 5).generate(&request()).await.unwrap_err();
    assert_eq!(err, ProviderError::Unknown("upstream overloaded".to_string()));
}

#[tokio::test]
async fn empty_choices_is_unknown_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = provider_for(&server, 5).generate(&request()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Unknown(_)));
}

#[tokio::test]
async fn slow_provider_hits_the_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_secs(3))
                .set_body_json(json!({ "choices": [] })),
        )
        .mount(&server)
        .await;

    let err = provider_for(&server, 1).generate(&request()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Transport(_)));
}
