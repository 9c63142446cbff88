use crate::models::HealthResponse;
use axum::Json;
use tracing::debug;

/// Health check endpoint
///
/// Always succeeds; used as the liveness probe by the hosting platform.
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
