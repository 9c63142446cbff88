use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for deployment info
#[derive(Serialize, Deserialize, ToSchema)]
pub struct InfoResponse {
    pub message: String,
    pub environment: String,
    pub runtime_version: String,
}
