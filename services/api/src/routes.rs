use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Extension, Json, Router};
use dose_dashboard::summary::Summary;
use serde_json::json;

pub(crate) fn dashboard_routes() -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/v1/summary", get(summary_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn dashboard_page(Extension(state): Extension<AppState>) -> Html<String> {
    Html(state.dashboard.document.as_str().to_string())
}

pub(crate) async fn summary_endpoint(Extension(state): Extension<AppState>) -> Json<Summary> {
    Json(state.dashboard.summary.clone())
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::prepare_dashboard;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use dose_dashboard::config::DashboardConfig;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::path::PathBuf;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(ready: bool) -> Router {
        let export = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/vacina_atibaia.csv");
        let snapshot =
            prepare_dashboard(&export, &DashboardConfig::default()).expect("dashboard prepared");
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            dashboard: Arc::new(snapshot),
        };
        dashboard_routes().layer(Extension(state))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body collects");
        (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
    }

    #[tokio::test]
    async fn summary_endpoint_returns_dashboard_shape() {
        let (status, body) = get_body(app(true), "/api/v1/summary").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert_eq!(json["totalDoses"], 12);
        assert_eq!(json["lastUpdateDate"], "25/1/2021");
        assert_eq!(json["daily"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["byFacility"]["UBS CENTRO"], 6);
        assert!(json["bySex"]["Mulheres"].as_f64().is_some());
    }

    #[tokio::test]
    async fn root_serves_rendered_page() {
        let (status, body) = get_body(app(true), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Total de doses aplicadas:"));
        assert!(body.contains("25/1/2021"));
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let (status, body) = get_body(app(false), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("initializing"));

        let (status, _) = get_body(app(true), "/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let (status, body) = get_body(app(false), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("ok"));
    }
}
