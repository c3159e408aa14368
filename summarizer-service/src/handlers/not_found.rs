use crate::dtos::{AvailableEndpoints, NotFoundResponse};
use axum::{http::StatusCode, Json};

/// Fallback for unknown paths and unsupported methods on known paths.
pub async fn not_found() -> (StatusCode, Json<NotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Endpoint not found",
            available_endpoints: AvailableEndpoints {
                health_check: "GET /health",
                summarize: "POST /api/summarize",
            },
        }),
    )
}
