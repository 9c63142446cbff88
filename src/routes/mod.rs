use crate::config::Config;
use crate::docs::ApiDoc;
use crate::handlers::{chart_data, health_check, index, info};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create API routes
pub fn create_api_routes() -> Router<Arc<Config>> {
    Router::new()
        .route("/info", get(info))
        .route("/health", get(health_check))
        .route("/chart-data", get(chart_data))
}

/// Assemble the full application router
///
/// The root path is only routed when the config asks for the server-rendered
/// dashboard; otherwise it falls through to axum's default 404. CORS is wide
/// open so a separately hosted frontend can call the API directly.
pub fn create_app(config: Arc<Config>) -> Router {
    let mut app = Router::new().nest("/api", create_api_routes());

    if config.serve_frontend {
        app = app.route("/", get(index));
    }

    app.merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app() -> Router {
        create_app(Arc::new(Config::default()))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_endpoint_reports_healthy() {
        let (status, body) = get_json(test_app(), "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn info_endpoint_uses_configured_environment() {
        let config = Config {
            railway_environment: "production".to_string(),
            ..Config::default()
        };
        let app = create_app(Arc::new(config));

        let (status, body) = get_json(app, "/api/info").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "¡Hola desde Railway!");
        assert_eq!(body["environment"], "production");
    }

    #[tokio::test]
    async fn info_endpoint_defaults_to_local_environment() {
        let (status, body) = get_json(test_app(), "/api/info").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["environment"], "local");
        assert!(body["runtime_version"].is_string());
    }

    #[tokio::test]
    async fn chart_data_has_fixed_labels_and_one_dataset() {
        let (status, body) = get_json(test_app(), "/api/chart-data").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["labels"],
            serde_json::json!([
                "Lunes",
                "Martes",
                "Miércoles",
                "Jueves",
                "Viernes",
                "Sábado",
                "Domingo"
            ])
        );

        let datasets = body["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0]["label"], "Visitas");
        assert_eq!(datasets[0]["borderWidth"], 2);
        assert_eq!(datasets[0]["backgroundColor"], "rgba(102, 126, 234, 0.5)");
        assert_eq!(datasets[0]["borderColor"], "rgba(102, 126, 234, 1)");
    }

    #[tokio::test]
    async fn chart_data_points_stay_in_range() {
        // Values are random per request, so only shape and range are asserted
        let (_, body) = get_json(test_app(), "/api/chart-data").await;

        let data = body["datasets"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), 7);
        for point in data {
            let value = point.as_i64().unwrap();
            assert!((10..=100).contains(&value), "value out of range: {value}");
        }
    }

    #[tokio::test]
    async fn root_serves_dashboard_page_when_enabled() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn root_is_not_routed_when_frontend_disabled() {
        let config = Config {
            serve_frontend: false,
            ..Config::default()
        };
        let app = create_app(Arc::new(config));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_route_falls_through_to_404() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_get_method_is_rejected() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn cross_origin_requests_are_allowed() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let allow_origin = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap();
        assert_eq!(allow_origin, "*");
    }
}
