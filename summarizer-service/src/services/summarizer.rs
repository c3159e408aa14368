//! Summarization service: one prompt, one provider call.

use crate::services::prompt;
use crate::services::providers::{GenerationRequest, ProviderError, TextProvider};
use std::sync::Arc;

/// Upper bound on generated tokens per summary.
pub const MAX_OUTPUT_TOKENS: u32 = 1500;

/// Low temperature keeps summaries factual and stable.
pub const TEMPERATURE: f32 = 0.2;

/// A generated summary and the model that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub text: String,
    pub model: String,
}

#[derive(Clone)]
pub struct SummarizationService {
    provider: Arc<dyn TextProvider>,
    model: String,
}

impl SummarizationService {
    pub fn new(provider: Arc<dyn TextProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the request for `transcript` without sending it.
    pub fn build_request(&self, transcript: &str, custom_prompt: Option<&str>) -> GenerationRequest {
        GenerationRequest {
            model: self.model.clone(),
            system_prompt: prompt::system_prompt(custom_prompt),
            user_prompt: prompt::user_prompt(transcript),
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    pub async fn summarize(
        &self,
        transcript: &str,
        custom_prompt: Option<&str>,
    ) -> Result<Summary, ProviderError> {
        let request = self.build_request(transcript, custom_prompt);
        let text = self.provider.generate(&request).await?;

        Ok(Summary {
            text,
            model: self.model.clone(),
        })
    }
}
