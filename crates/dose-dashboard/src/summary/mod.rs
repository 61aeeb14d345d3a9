mod builder;
pub mod domain;
pub mod views;

use crate::dataset::DoseRecord;

pub use domain::SexCategory;
pub use views::{CategoryCount, DailyCount, SexShare, Summary};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    #[error("no dose records to summarize")]
    EmptyInput,
    #[error("dose record {index} has an unparseable application date '{value}'")]
    MalformedInput { index: usize, value: String },
}

/// Aggregates dose records into the dashboard summary.
///
/// Fails on the first record whose application date cannot be parsed; no
/// partial summary is produced.
pub fn build_summary(records: &[DoseRecord]) -> Result<Summary, SummaryError> {
    builder::build(records)
}
