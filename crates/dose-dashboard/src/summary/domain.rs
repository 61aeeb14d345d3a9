use chrono::{DateTime, Datelike, NaiveDate};
use std::fmt;

/// Biological sex as coded in the export. Codes other than `F`/`M` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SexCategory {
    Female,
    Male,
    Other(String),
}

impl SexCategory {
    pub fn from_code(code: &str) -> Self {
        match code {
            "F" => Self::Female,
            "M" => Self::Male,
            other => Self::Other(other.to_string()),
        }
    }

    /// Display label used on the dashboard.
    pub fn label(&self) -> &str {
        match self {
            Self::Female => "Mulheres",
            Self::Male => "Homens",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for SexCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses an application date. Newer exports append a time component, which is dropped
/// without shifting the date out of its own offset.
pub(crate) fn parse_application_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

/// `day/month/year` without zero padding, e.g. `6/1/2021`.
pub(crate) fn format_update_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}
