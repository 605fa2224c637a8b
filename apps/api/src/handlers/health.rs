use axum::Json;

use crate::dto::HealthResponse;

/// Liveness probe; it needs no state and never fails.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
