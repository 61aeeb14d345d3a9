use crate::cli::ServeArgs;
use crate::infra::{dataset_path, prepare_dashboard, AppState};
use crate::routes::dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use dose_dashboard::config::AppConfig;
use dose_dashboard::error::AppError;
use dose_dashboard::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    config.dataset.path = dataset_path(&config, args.dataset.take());

    telemetry::init(&config.telemetry)?;

    let snapshot = prepare_dashboard(&config.dataset.path, &config.dashboard)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        dashboard: Arc::new(snapshot),
    };

    let app = dashboard_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, locality = %config.dashboard.locality, "vaccination dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
