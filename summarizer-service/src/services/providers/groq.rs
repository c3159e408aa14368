//! Groq provider implementation.
//!
//! Uses Groq's OpenAI-compatible chat completions endpoint. HTTP status codes
//! are mapped onto [`ProviderError`] variants here so callers never inspect
//! message text.

use super::{GenerationRequest, ProviderError, TextProvider};
use crate::config::GroqConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Groq text provider.
pub struct GroqTextProvider {
    api_key: Secret<String>,
    api_base: String,
    client: Client,
}

impl GroqTextProvider {
    pub fn new(config: &GroqConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            client,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl TextProvider for GroqTextProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: &request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        tracing::debug!(
            model = %request.model,
            prompt_len = request.user_prompt.len(),
            "Sending request to Groq API"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &error_text));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(format!("Failed to parse response: {}", e)))?;

        if let Some(usage) = &completion.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Groq usage"
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::Unknown("Groq returned no completion choices".to_string()))
    }
}

/// Map a non-success response onto an error kind, keeping the provider's
/// message as the diagnostic.
pub fn classify_failure(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
        .filter(|m| !m.is_empty())
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| format!("Groq API error {}", status));

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Auth(message),
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND | StatusCode::UNPROCESSABLE_ENTITY => {
            ProviderError::Config(message)
        }
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited(message),
        _ => ProviderError::Unknown(message),
    }
}

// ============================================================================
// Groq API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_auth_with_provider_message() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        assert_eq!(
            classify_failure(StatusCode::UNAUTHORIZED, body),
            ProviderError::Auth("Invalid API Key".to_string())
        );
    }

    #[test]
    fn unknown_model_is_config() {
        let body = r#"{"error":{"message":"The model `nope` does not exist","code":"model_not_found"}}"#;
        assert!(matches!(
            classify_failure(StatusCode::NOT_FOUND, body),
            ProviderError::Config(m) if m.contains("does not exist")
        ));
    }

    #[test]
    fn too_many_requests_is_rate_limited() {
        assert!(matches!(
            classify_failure(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            ProviderError::RateLimited(m) if m == "slow down"
        ));
    }

    #[test]
    fn empty_body_falls_back_to_status_line() {
        assert_eq!(
            classify_failure(StatusCode::BAD_GATEWAY, ""),
            ProviderError::Unknown("Groq API error 502 Bad Gateway".to_string())
        );
    }
}
