use crate::cli::{RenderArgs, SummaryArgs};
use crate::infra::{dataset_path, load_summary};
use dose_dashboard::config::AppConfig;
use dose_dashboard::dashboard::{DashboardRenderer, HtmlDashboard};
use dose_dashboard::error::AppError;
use dose_dashboard::summary::Summary;
use dose_dashboard::telemetry;
use std::path::{Path, PathBuf};

pub(crate) fn run_summary(args: SummaryArgs) -> Result<(), AppError> {
    let SummaryArgs { dataset, json } = args;

    let (config, path) = prepare_command(dataset)?;
    let summary = load_summary(&path)?;

    if json {
        println!("{}", summary_json(&summary)?);
    } else {
        print!("{}", summary_text(&summary, &path, &config.dashboard.locality));
    }

    Ok(())
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let RenderArgs { dataset, output } = args;

    let (config, path) = prepare_command(dataset)?;
    let summary = load_summary(&path)?;

    let document = HtmlDashboard::new(config.dashboard.clone()).render(&summary);
    document.write_to(&output)?;

    println!(
        "Dashboard '{}' written to {} ({} doses, updated {})",
        document.title(),
        output.display(),
        summary.total_doses,
        summary.last_update_date
    );
    Ok(())
}

/// Loads config and installs telemetry before any dataset work is logged.
fn prepare_command(dataset: Option<PathBuf>) -> Result<(AppConfig, PathBuf), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let path = dataset_path(&config, dataset);
    Ok((config, path))
}

fn summary_json(summary: &Summary) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

fn summary_text(summary: &Summary, path: &Path, locality: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Vaccination summary for {locality}\n"));
    out.push_str(&format!("Data source: {}\n", path.display()));
    out.push_str(&format!("Total doses applied: {}\n", summary.total_doses));
    out.push_str(&format!("Last update: {}\n", summary.last_update_date));

    out.push_str("\nDoses by day\n");
    for entry in &summary.daily {
        out.push_str(&format!("- {}: {}\n", entry.date, entry.count));
    }

    out.push_str("\nDoses by sex\n");
    for entry in &summary.by_sex {
        out.push_str(&format!(
            "- {}: {:.1}% ({} dose{})\n",
            entry.label(),
            entry.share * 100.0,
            entry.count,
            if entry.count == 1 { "" } else { "s" }
        ));
    }

    out.push_str("\nDoses by vaccine\n");
    for entry in &summary.by_vaccine {
        out.push_str(&format!("- {}: {}\n", entry.label, entry.count));
    }

    out.push_str("\nDoses by facility\n");
    for entry in &summary.by_facility {
        out.push_str(&format!("- {}: {}\n", entry.label, entry.count));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dose_dashboard::dataset::DoseRecord;
    use dose_dashboard::summary::build_summary;

    #[test]
    fn commands_install_telemetry_before_loading() {
        let (_, path) =
            prepare_command(Some(PathBuf::from("data/sample.csv"))).expect("command prepared");

        assert_eq!(path, PathBuf::from("data/sample.csv"));
        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn json_report_is_the_serialized_summary() {
        let summary = build_summary(&[
            DoseRecord::new("2021-01-05", "F", "Coronavac", "UBS A"),
            DoseRecord::new("2021-01-06", "M", "Pfizer", "UBS B"),
        ])
        .expect("summary builds");

        let payload = summary_json(&summary).expect("summary serializes");
        let json: serde_json::Value = serde_json::from_str(&payload).expect("valid json");
        assert_eq!(json["totalDoses"], 2);
        assert_eq!(json["bySex"]["Homens"], 0.5);
    }

    #[test]
    fn text_report_lists_every_section() {
        let summary = build_summary(&[
            DoseRecord::new("2021-01-05", "F", "Coronavac", "UBS A"),
            DoseRecord::new("2021-01-05", "M", "Coronavac", "UBS A"),
            DoseRecord::new("2021-01-06", "F", "Pfizer", "UBS B"),
        ])
        .expect("summary builds");

        let text = summary_text(&summary, Path::new("data/sample.csv"), "Atibaia-SP");

        assert!(text.starts_with("Vaccination summary for Atibaia-SP\n"));
        assert!(text.contains("Total doses applied: 3\n"));
        assert!(text.contains("Last update: 6/1/2021\n"));
        assert!(text.contains("- 2021-01-05: 2\n"));
        assert!(text.contains("- Mulheres: 66.7% (2 doses)\n"));
        assert!(text.contains("- Homens: 33.3% (1 dose)\n"));
        assert!(text.contains("- Coronavac: 2\n"));
        assert!(text.contains("- UBS B: 1\n"));
    }
}
