use crate::models::{ChartDataResponse, Dataset};
use axum::Json;
use rand::Rng;
use tracing::debug;

/// Weekday labels, Monday-first, as shown on the dashboard
const WEEKDAY_LABELS: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

/// Chart data endpoint
///
/// Draws a fresh set of visit counts on every request. In a real
/// deployment these would come from a database.
pub async fn chart_data() -> Json<ChartDataResponse> {
    debug!("Chart data requested");

    let mut rng = rand::thread_rng();
    let data = (0..WEEKDAY_LABELS.len())
        .map(|_| rng.gen_range(10..=100))
        .collect();

    Json(ChartDataResponse {
        labels: WEEKDAY_LABELS.iter().map(|l| l.to_string()).collect(),
        datasets: vec![Dataset {
            label: "Visitas".to_string(),
            data,
            background_color: "rgba(102, 126, 234, 0.5)".to_string(),
            border_color: "rgba(102, 126, 234, 1)".to_string(),
            border_width: 2,
        }],
    })
}
