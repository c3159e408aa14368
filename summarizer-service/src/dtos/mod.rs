//! Request and response bodies for the HTTP API.

use crate::error::SummarizeError;
use crate::services::Summary;
use serde::Serialize;
use serde_json::Value;
use service_core::time::iso_timestamp;
use validator::Validate;

/// Longest transcript accepted, counted in characters.
pub const MAX_TRANSCRIPT_CHARS: usize = 50_000;

/// `MAX_TRANSCRIPT_CHARS` typed for the `validator` length rule.
const MAX_TRANSCRIPT_CHARS_U64: u64 = MAX_TRANSCRIPT_CHARS as u64;

/// Validated body of `POST /api/summarize`.
#[derive(Debug, Clone, Validate)]
pub struct SummarizeRequest {
    #[validate(length(max = MAX_TRANSCRIPT_CHARS_U64))]
    pub transcript: String,
    pub custom_prompt: Option<String>,
}

impl SummarizeRequest {
    /// Parse and validate a raw body.
    ///
    /// Checks run in order: JSON object, `transcript` present as a non-empty
    /// string, length bound. A `customPrompt` that is not a string is ignored.
    pub fn from_json(body: &[u8]) -> Result<Self, SummarizeError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| SummarizeError::MalformedBody)?;
        let object = value.as_object().ok_or(SummarizeError::MalformedBody)?;

        let transcript = object
            .get("transcript")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or(SummarizeError::MissingTranscript)?;

        let request = SummarizeRequest {
            transcript: transcript.to_string(),
            custom_prompt: object
                .get("customPrompt")
                .and_then(Value::as_str)
                .map(str::to_string),
        };

        request
            .validate()
            .map_err(|_| SummarizeError::TranscriptTooLong)?;

        Ok(request)
    }
}

/// Envelope returned by `POST /api/summarize` on success and on provider failure.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: String,
}

impl SummarizeResponse {
    pub fn success(summary: Summary) -> Self {
        Self {
            success: true,
            summary: Some(summary.text),
            model: Some(summary.model),
            error: None,
            details: None,
            timestamp: iso_timestamp(),
        }
    }

    pub fn failure(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            success: false,
            summary: None,
            model: None,
            error: Some(error.into()),
            details: Some(details.into()),
            timestamp: iso_timestamp(),
        }
    }
}

/// Body for requests rejected before any provider call.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub details: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub available_endpoints: AvailableEndpoints,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableEndpoints {
    pub health_check: &'static str,
    pub summarize: &'static str,
}
