//! Text generation provider abstraction.
//!
//! The gateway only talks to `dyn TextProvider`, so the hosted Groq backend
//! and the deterministic mock are interchangeable.

pub mod groq;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Why a generation call failed.
///
/// Each variant carries the provider's own diagnostic text unchanged; the
/// HTTP layer maps the variant to a status and forwards the text as `details`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Credential missing, invalid or revoked.
    #[error("{0}")]
    Auth(String),

    /// The request was rejected as invalid, typically an unknown model.
    #[error("{0}")]
    Config(String),

    /// Connection failure, timeout or unreadable response.
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("{0}")]
    Unknown(String),
}

impl ProviderError {
    /// Short machine-friendly name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Auth(_) => "auth",
            ProviderError::Config(_) => "config",
            ProviderError::Transport(_) => "transport",
            ProviderError::RateLimited(_) => "rate_limited",
            ProviderError::Unknown(_) => "unknown",
        }
    }
}

/// A single chat-style generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Run one generation and return the produced text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError>;
}
