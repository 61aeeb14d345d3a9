use super::domain::{format_update_date, parse_application_date, SexCategory};
use super::views::{CategoryCount, DailyCount, SexShare, Summary};
use super::SummaryError;
use crate::dataset::DoseRecord;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

pub(crate) fn build(records: &[DoseRecord]) -> Result<Summary, SummaryError> {
    if records.is_empty() {
        return Err(SummaryError::EmptyInput);
    }

    let total_doses = records.len();
    let mut daily: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    let mut by_sex: HashMap<&str, usize> = HashMap::new();
    let mut by_vaccine: HashMap<&str, usize> = HashMap::new();
    let mut by_facility: HashMap<&str, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let date = parse_application_date(&record.application_date).ok_or_else(|| {
            SummaryError::MalformedInput {
                index,
                value: record.application_date.clone(),
            }
        })?;

        *daily.entry(date).or_default() += 1;
        *by_sex.entry(record.biological_sex.as_str()).or_default() += 1;
        *by_vaccine.entry(record.vaccine_name.as_str()).or_default() += 1;
        *by_facility.entry(record.facility_name.as_str()).or_default() += 1;
    }

    let (&latest_application, _) = daily
        .last_key_value()
        .ok_or(SummaryError::EmptyInput)?;

    Ok(Summary {
        total_doses,
        last_update_date: format_update_date(latest_application),
        latest_application,
        daily: daily
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect(),
        by_sex: sex_shares(by_sex, total_doses),
        by_vaccine: ranked_counts(by_vaccine),
        by_facility: ranked_counts(by_facility),
    })
}

fn sex_shares(counts: HashMap<&str, usize>, total_doses: usize) -> Vec<SexShare> {
    // Labels are the serialized keys, so a raw code spelled like a display label
    // folds into the relabeled category.
    let mut by_label: HashMap<String, (SexCategory, usize)> = HashMap::new();
    for (code, count) in counts {
        let category = SexCategory::from_code(code);
        let entry = by_label
            .entry(category.label().to_string())
            .or_insert_with(|| (category.clone(), 0));
        if category < entry.0 {
            entry.0 = category;
        }
        entry.1 += count;
    }

    let mut shares: Vec<SexShare> = by_label
        .into_values()
        .map(|(category, count)| SexShare {
            category,
            count,
            share: count as f64 / total_doses as f64,
        })
        .collect();

    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label().cmp(b.label())));
    shares
}

fn ranked_counts(counts: HashMap<&str, usize>) -> Vec<CategoryCount> {
    let mut ranked: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    ranked
}
