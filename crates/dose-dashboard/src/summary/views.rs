use super::domain::SexCategory;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Fraction of all doses given to one sex category.
#[derive(Debug, Clone, PartialEq)]
pub struct SexShare {
    pub category: SexCategory,
    pub count: usize,
    pub share: f64,
}

impl SexShare {
    pub fn label(&self) -> &str {
        self.category.label()
    }
}

/// Everything the dashboard shows, computed once from the export.
///
/// Distributions are ordered by descending count; `daily` is ordered by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_doses: usize,
    pub last_update_date: String,
    #[serde(skip)]
    pub latest_application: NaiveDate,
    pub daily: Vec<DailyCount>,
    #[serde(serialize_with = "serialize_shares")]
    pub by_sex: Vec<SexShare>,
    #[serde(serialize_with = "serialize_counts")]
    pub by_vaccine: Vec<CategoryCount>,
    #[serde(serialize_with = "serialize_counts")]
    pub by_facility: Vec<CategoryCount>,
}

impl Summary {
    pub fn daily_count(&self, date: NaiveDate) -> Option<usize> {
        self.daily
            .binary_search_by_key(&date, |entry| entry.date)
            .ok()
            .map(|index| self.daily[index].count)
    }

    pub fn sex_share(&self, label: &str) -> Option<f64> {
        self.by_sex
            .iter()
            .find(|entry| entry.label() == label)
            .map(|entry| entry.share)
    }

    pub fn vaccine_count(&self, vaccine: &str) -> Option<usize> {
        count_for(&self.by_vaccine, vaccine)
    }

    pub fn facility_count(&self, facility: &str) -> Option<usize> {
        count_for(&self.by_facility, facility)
    }
}

fn count_for(entries: &[CategoryCount], label: &str) -> Option<usize> {
    entries
        .iter()
        .find(|entry| entry.label == label)
        .map(|entry| entry.count)
}

fn serialize_shares<S: Serializer>(entries: &[SexShare], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|entry| (entry.label(), entry.share)))
}

fn serialize_counts<S: Serializer>(
    entries: &[CategoryCount],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|entry| (entry.label.as_str(), entry.count)))
}
