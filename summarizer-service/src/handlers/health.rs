use crate::dtos::HealthResponse;
use axum::Json;
use service_core::time::iso_timestamp;

/// Liveness probe. Never touches the provider.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: iso_timestamp(),
    })
}
