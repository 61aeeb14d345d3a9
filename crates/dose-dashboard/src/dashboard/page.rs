use super::charts;
use crate::config::DashboardConfig;
use crate::summary::Summary;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

pub(crate) const PAGE_HEADING: &str = "Vacinação Covid-19";
pub(crate) const DATA_SOURCE_URL: &str = "https://opendatasus.saude.gov.br/dataset/covid-19-vacinacao";
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

const STYLESHEET: &str = "
    body {
        margin: 0;
        background-color: #1e1e1e;
        color: white;
        font-family: 'Andale Mono', monospace;
    }
    .header-container {
        display: flex;
        justify-content: center;
        padding: 12px;
    }
    .app-header {
        text-align: center;
    }
    .app-header-title {
        font-size: 32px;
        font-weight: bold;
    }
    .app-box {
        display: grid;
        grid-template-columns: auto auto;
        gap: 8px 16px;
        padding: 16px;
        border: 1px solid #444;
        border-radius: 8px;
    }
    .app-box-text {
        font-size: 18px;
    }
    .chart {
        padding: 12px;
    }
    footer {
        text-align: center;
        padding: 16px;
        opacity: 0.8;
    }
    footer a {
        color: white;
        margin: 0 8px;
    }
";

pub(crate) fn page_title(config: &DashboardConfig) -> String {
    format!("Vacinação {}", locality_name(&config.locality))
}

pub(crate) fn render_page(summary: &Summary, config: &DashboardConfig) -> Markup {
    let locality = config.locality.as_str();
    let figures = [
        (charts::DAILY_CHART_ID, charts::daily_chart(summary, locality)),
        (charts::VACCINE_CHART_ID, charts::vaccine_chart(summary, locality)),
        (charts::FACILITY_CHART_ID, charts::facility_chart(summary, locality)),
        (charts::SEX_CHART_ID, charts::sex_chart(summary, locality)),
    ];

    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title(config)) }
                script src=(PLOTLY_CDN) {}
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                div class="header-container" {
                    div class="app-header" {
                        div class="app-header-title" { (PAGE_HEADING) }
                        div class="app-header-title" { (locality) }
                    }
                }
                div class="header-container" {
                    div class="app-box" {
                        div class="app-box-text" { "Total de doses aplicadas:" }
                        div class="app-box-text" id="total-doses" { (summary.total_doses) }
                        div class="app-box-text" { "Última atualização em:" }
                        div class="app-box-text" id="last-update" { (summary.last_update_date) }
                        div class="app-box-text" { "Fonte dos dados:" }
                        a class="app-box-text" href=(DATA_SOURCE_URL) { "OpenDataSUS" }
                    }
                }
                @for (id, plot) in &figures {
                    (chart_block(id, plot))
                }
                footer {
                    div {
                        a { "Desenvolvido por Reginaldo G. Santos - 2022" }
                        a href="https://github.com/reginaldogalli" { "GitHub" }
                        a href="https://www.linkedin.com/in/reginaldogalli/" { "LinkedIn" }
                    }
                }
            }
        }
    }
}

fn chart_block(id: &str, plot: &Plot) -> Markup {
    html! {
        div class="chart" {
            (PreEscaped(plot.to_inline_html(Some(id))))
        }
    }
}

// "Atibaia-SP" -> "Atibaia"
fn locality_name(locality: &str) -> &str {
    locality
        .rsplit_once('-')
        .map(|(name, _)| name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(locality)
}
