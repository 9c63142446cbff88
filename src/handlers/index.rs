use askama::Template;
use axum::response::IntoResponse;

/// Dashboard page shell; the chart and status boxes load themselves
/// client-side from the JSON endpoints.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Index page endpoint, mounted only when SERVE_FRONTEND is enabled
pub async fn index() -> impl IntoResponse {
    IndexTemplate {}
}
