use crate::dtos::{SummarizeRequest, SummarizeResponse};
use crate::error::SummarizeError;
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};

/// `POST /api/summarize`
///
/// The body is read as raw bytes so that malformed JSON, non-object bodies
/// and bad transcripts all produce this endpoint's own error bodies rather
/// than the extractor's rejection.
pub async fn summarize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SummarizeResponse>, SummarizeError> {
    let request = SummarizeRequest::from_json(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected summarize request");
        e
    })?;

    tracing::info!(
        transcript_chars = request.transcript.chars().count(),
        custom_prompt = request.custom_prompt.is_some(),
        model = %state.summarizer.model(),
        "Generating summary"
    );

    let summary = state
        .summarizer
        .summarize(&request.transcript, request.custom_prompt.as_deref())
        .await
        .map_err(|e| {
            tracing::error!(kind = e.kind(), error = %e, "Summary generation failed");
            SummarizeError::from(e)
        })?;

    tracing::info!(summary_chars = summary.text.chars().count(), "Summary generated");

    Ok(Json(SummarizeResponse::success(summary)))
}
