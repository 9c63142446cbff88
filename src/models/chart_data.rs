use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for chart data, shaped for direct consumption by Chart.js
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChartDataResponse {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// A single Chart.js dataset
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u32>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}
