use crate::config::Config;
use crate::models::InfoResponse;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

// Toolchain version baked in by build.rs
const RUNTIME_VERSION: &str = env!("RUSTC_VERSION");

/// Deployment info endpoint
pub async fn info(State(config): State<Arc<Config>>) -> Json<InfoResponse> {
    debug!("Info requested");
    Json(InfoResponse {
        message: "¡Hola desde Railway!".to_string(),
        environment: config.railway_environment.clone(),
        runtime_version: RUNTIME_VERSION.to_string(),
    })
}
