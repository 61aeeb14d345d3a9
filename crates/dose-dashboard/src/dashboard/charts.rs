use crate::summary::{SexCategory, Summary};
use plotly::common::{Font, Line, Marker, Mode, Orientation, Title};
use plotly::layout::Layout;
use plotly::{Bar, Pie, Plot, Scatter};

const FONT_FAMILY: &str = "Andale Mono, monospace";
const FONT_COLOR: &str = "white";
const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

/// Chart ids double as the html element ids of the plot containers.
pub(crate) const DAILY_CHART_ID: &str = "data";
pub(crate) const VACCINE_CHART_ID: &str = "fabricante";
pub(crate) const FACILITY_CHART_ID: &str = "ubs";
pub(crate) const SEX_CHART_ID: &str = "sexo";

pub(crate) fn daily_chart(summary: &Summary, locality: &str) -> Plot {
    let dates: Vec<String> = summary
        .daily
        .iter()
        .map(|entry| entry.date.format("%Y-%m-%d").to_string())
        .collect();
    let counts: Vec<usize> = summary.daily.iter().map(|entry| entry.count).collect();

    let trace = Scatter::new(dates, counts)
        .name("Doses aplicadas")
        .mode(Mode::Lines)
        .line(Line::new().color("green"));

    themed_plot(
        trace,
        format!("Quantidade de doses aplicadas por dia no município de {locality}"),
    )
}

pub(crate) fn vaccine_chart(summary: &Summary, locality: &str) -> Plot {
    let labels: Vec<String> = summary
        .by_vaccine
        .iter()
        .map(|entry| entry.label.clone())
        .collect();
    let counts: Vec<usize> = summary.by_vaccine.iter().map(|entry| entry.count).collect();

    let trace = Pie::new(counts).labels(labels).hole(0.3);

    themed_plot(
        trace,
        format!("Porcentagem de doses aplicadas por fabricante no município de {locality}"),
    )
}

pub(crate) fn facility_chart(summary: &Summary, locality: &str) -> Plot {
    let facilities: Vec<String> = summary
        .by_facility
        .iter()
        .map(|entry| entry.label.clone())
        .collect();
    let counts: Vec<usize> = summary.by_facility.iter().map(|entry| entry.count).collect();

    let trace = Bar::new(counts, facilities)
        .name("Doses")
        .orientation(Orientation::Horizontal)
        .marker(Marker::new().color("darkslategray"));

    themed_plot(
        trace,
        format!("Quantidade de doses aplicadas por UBS no município de {locality}"),
    )
}

pub(crate) fn sex_chart(summary: &Summary, locality: &str) -> Plot {
    let labels: Vec<String> = summary
        .by_sex
        .iter()
        .map(|entry| entry.label().to_string())
        .collect();
    let shares: Vec<f64> = summary.by_sex.iter().map(|entry| entry.share).collect();
    let colors: Vec<&'static str> = summary
        .by_sex
        .iter()
        .map(|entry| sex_color(&entry.category))
        .collect();

    let trace = Pie::new(shares)
        .labels(labels)
        .hole(0.5)
        .marker(Marker::new().color_array(colors));

    themed_plot(
        trace,
        format!("Porcentagem de vacinados por sexo no município de {locality}"),
    )
}

fn sex_color(category: &SexCategory) -> &'static str {
    match category {
        SexCategory::Female => "indianred",
        SexCategory::Male => "steelblue",
        SexCategory::Other(_) => "gray",
    }
}

fn themed_plot(trace: Box<dyn plotly::Trace>, title: String) -> Plot {
    let layout = Layout::new()
        .title(Title::with_text(title).font(Font::new().color(FONT_COLOR)))
        .paper_background_color(TRANSPARENT)
        .font(Font::new().color(FONT_COLOR).family(FONT_FAMILY));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
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
    fn daily_chart_plots_dates_in_order() {
        let json = daily_chart(&summary(), "Atibaia-SP").to_json();
        let first = json.find("2021-01-05").expect("first date");
        let second = json.find("2021-01-06").expect("second date");
        assert!(first < second);
        assert!(json.contains("por dia no município de Atibaia-SP"));
        assert!(json.contains("green"));
    }

    #[test]
    fn sex_chart_uses_display_labels_and_palette() {
        let json = sex_chart(&summary(), "Atibaia-SP").to_json();
        assert!(json.contains("Mulheres"));
        assert!(json.contains("Homens"));
        assert!(json.contains("indianred"));
        assert!(json.contains("steelblue"));
        assert!(!json.contains("\"F\""));
    }

    #[test]
    fn facility_chart_is_horizontal() {
        let json = facility_chart(&summary(), "Atibaia-SP").to_json();
        assert!(json.contains("\"orientation\":\"h\""));
        assert!(json.contains("UBS A"));
        assert!(json.contains("darkslategray"));
    }

    #[test]
    fn vaccine_chart_is_a_donut() {
        let json = vaccine_chart(&summary(), "Atibaia-SP").to_json();
        assert!(json.contains("\"hole\":0.3"));
        assert!(json.contains("Coronavac"));
    }
}
