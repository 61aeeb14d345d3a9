//! Presentation of a [`Summary`] as a single static HTML page with Plotly charts.

mod charts;
mod page;

use crate::config::DashboardConfig;
use crate::summary::Summary;
use std::path::Path;

/// Anything that can turn a summary into a displayable document.
pub trait DashboardRenderer {
    fn render(&self, summary: &Summary) -> Document;
}

/// A rendered page, ready to serve or write to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    html: String,
}

impl Document {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.html.as_bytes())
    }
}

/// Renders the vaccination dashboard for a configured locality.
#[derive(Debug, Clone, Default)]
pub struct HtmlDashboard {
    config: DashboardConfig,
}

impl HtmlDashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }
}

impl DashboardRenderer for HtmlDashboard {
    fn render(&self, summary: &Summary) -> Document {
        Document {
            title: page::page_title(&self.config),
            html: page::render_page(summary, &self.config).into_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DoseRecord;
    use crate::summary::build_summary;

    fn summary() -> Summary {
        build_summary(&[
            DoseRecord::new("2021-01-05", "F", "Coronavac", "UBS A"),
            DoseRecord::new("2021-01-05", "M", "Coronavac", "UBS A"),
            DoseRecord::new("2021-01-06", "F", "Pfizer", "UBS B"),
        ])
        .expect("summary builds")
    }

    #[test]
    fn page_shows_totals_and_last_update() {
        let document = HtmlDashboard::default().render(&summary());
        let html = document.as_str();

        assert_eq!(document.title(), "Vacinação Atibaia");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Total de doses aplicadas:"));
        assert!(html.contains(r#"<div class="app-box-text" id="total-doses">3</div>"#));
        assert!(html.contains(r#"<div class="app-box-text" id="last-update">6/1/2021</div>"#));
        assert!(html.contains(page::DATA_SOURCE_URL));
    }

    #[test]
    fn page_embeds_all_four_charts() {
        let html = HtmlDashboard::default().render(&summary()).into_string();

        for id in [
            charts::DAILY_CHART_ID,
            charts::VACCINE_CHART_ID,
            charts::FACILITY_CHART_ID,
            charts::SEX_CHART_ID,
        ] {
            assert!(
                html.contains(&format!("id=\"{id}\"")),
                "missing chart container {id}"
            );
        }
        assert!(html.contains("cdn.plot.ly"));
    }

    #[test]
    fn locality_flows_into_header_and_titles() {
        let dashboard = HtmlDashboard::new(DashboardConfig {
            locality: "Jundiaí-SP".to_string(),
        });
        let html = dashboard.render(&summary()).into_string();

        assert!(html.contains(r#"<div class="app-header-title">Jundiaí-SP</div>"#));
        assert!(html.contains("por UBS no município de Jundiaí-SP"));
        assert!(!html.contains("Atibaia"));
    }

    #[test]
    fn document_writes_to_disk() {
        let path = std::env::temp_dir().join(format!(
            "dose-dashboard-{}-render.html",
            std::process::id()
        ));
        let document = HtmlDashboard::default().render(&summary());
        document.write_to(&path).expect("document written");

        let written = std::fs::read_to_string(&path).expect("document read back");
        assert_eq!(written, document.as_str());
        std::fs::remove_file(&path).ok();
    }
}
