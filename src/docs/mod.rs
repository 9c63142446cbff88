use crate::models::*;
use utoipa::OpenApi;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Deployment info endpoint
#[utoipa::path(
    get,
    path = "/api/info",
    responses(
        (status = 200, description = "Deployment info", body = InfoResponse)
    )
)]
#[allow(dead_code)]
pub async fn info_doc() {}

/// Chart data endpoint
#[utoipa::path(
    get,
    path = "/api/chart-data",
    responses(
        (status = 200, description = "Randomized visit counts per weekday", body = ChartDataResponse)
    )
)]
#[allow(dead_code)]
pub async fn chart_data_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        info_doc,
        chart_data_doc,
    ),
    components(
        schemas(HealthResponse, InfoResponse, ChartDataResponse, Dataset)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
