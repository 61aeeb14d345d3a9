use dose_dashboard::config::{AppConfig, DashboardConfig};
use dose_dashboard::dashboard::{DashboardRenderer, Document, HtmlDashboard};
use dose_dashboard::dataset::DoseDataset;
use dose_dashboard::error::AppError;
use dose_dashboard::summary::{build_summary, Summary};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dashboard: Arc<DashboardSnapshot>,
}

/// Summary and page computed once at startup; handlers only read it.
#[derive(Debug)]
pub(crate) struct DashboardSnapshot {
    pub(crate) summary: Summary,
    pub(crate) document: Document,
}

pub(crate) fn dataset_path(config: &AppConfig, dataset_override: Option<PathBuf>) -> PathBuf {
    dataset_override.unwrap_or_else(|| config.dataset.path.clone())
}

pub(crate) fn load_summary(path: &Path) -> Result<Summary, AppError> {
    let dataset = DoseDataset::from_path(path)?;
    info!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "vaccination export read"
    );

    let summary = build_summary(dataset.records())?;
    info!(
        total_doses = summary.total_doses,
        last_update = %summary.last_update_date,
        days = summary.daily.len(),
        "dose summary built"
    );
    Ok(summary)
}

pub(crate) fn prepare_dashboard(
    path: &Path,
    config: &DashboardConfig,
) -> Result<DashboardSnapshot, AppError> {
    let summary = load_summary(path)?;
    let document = HtmlDashboard::new(config.clone()).render(&summary);
    Ok(DashboardSnapshot { summary, document })
}
