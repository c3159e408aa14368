//! Request-level errors for the summarize endpoint and the panic boundary.

use crate::dtos::{ErrorResponse, SummarizeResponse};
use crate::services::providers::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Request body must be a JSON object")]
    MalformedBody,

    #[error("Please provide a valid transcript string")]
    MissingTranscript,

    #[error("Transcript must be 50,000 characters or fewer")]
    TranscriptTooLong,

    #[error("Summary generation failed: {0}")]
    Upstream(#[from] ProviderError),
}

impl SummarizeError {
    pub fn status(&self) -> StatusCode {
        match self {
            SummarizeError::MalformedBody
            | SummarizeError::MissingTranscript
            | SummarizeError::TranscriptTooLong => StatusCode::BAD_REQUEST,
            SummarizeError::Upstream(ProviderError::Auth(_)) => StatusCode::UNAUTHORIZED,
            SummarizeError::Upstream(ProviderError::Config(_)) => StatusCode::BAD_REQUEST,
            SummarizeError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of the `error` field in the response body.
    pub fn label(&self) -> &'static str {
        match self {
            SummarizeError::MalformedBody => "Invalid request body",
            SummarizeError::MissingTranscript => "Transcript is required",
            SummarizeError::TranscriptTooLong => "Transcript too long",
            SummarizeError::Upstream(ProviderError::Auth(_)) => "Authentication failed",
            SummarizeError::Upstream(ProviderError::Config(_)) => "Model configuration error",
            SummarizeError::Upstream(_) => "Failed to generate summary",
        }
    }
}

impl IntoResponse for SummarizeError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.label();

        match self {
            SummarizeError::Upstream(err) => {
                (status, Json(SummarizeResponse::failure(error, err.to_string()))).into_response()
            }
            rejected => (
                status,
                Json(ErrorResponse {
                    error,
                    details: rejected.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

/// Turn a handler panic into a 500 envelope instead of dropping the connection.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    tracing::error!(panic = %message, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SummarizeResponse::failure(
            "Internal server error",
            "The server hit an unexpected fault while handling the request",
        )),
    )
        .into_response()
}
