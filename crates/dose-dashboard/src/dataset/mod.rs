//! Loading of OpenDataSUS vaccination exports.
//!
//! The export is a `;`-delimited file with one row per administered dose. Only
//! four columns feed the summary; the full header is kept on [`DoseDataset`]
//! so newer export layouts with additional columns load unchanged.

mod normalizer;
mod parser;

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub use parser::{
    APPLICATION_DATE_COLUMN, BIOLOGICAL_SEX_COLUMN, FACILITY_NAME_COLUMN, VACCINE_NAME_COLUMN,
};

/// One administered dose. The application date stays raw until the summary parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseRecord {
    pub application_date: String,
    pub biological_sex: String,
    pub vaccine_name: String,
    pub facility_name: String,
}

impl DoseRecord {
    pub fn new(
        application_date: impl Into<String>,
        biological_sex: impl Into<String>,
        vaccine_name: impl Into<String>,
        facility_name: impl Into<String>,
    ) -> Self {
        Self {
            application_date: application_date.into(),
            biological_sex: biological_sex.into(),
            vaccine_name: vaccine_name.into(),
            facility_name: facility_name.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read vaccination export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vaccination CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("vaccination export is missing required column '{column}'")]
    MissingColumn { column: &'static str },
}

/// Rows of a vaccination export in file order, plus the header they came with.
#[derive(Debug, Clone)]
pub struct DoseDataset {
    columns: Vec<String>,
    records: Vec<DoseRecord>,
}

impl DoseDataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            rows = dataset.records.len(),
            columns = dataset.columns.len(),
            "vaccination export loaded"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let parsed = parser::parse_records(reader)?;
        Ok(Self {
            columns: parsed.columns,
            records: parsed.records,
        })
    }

    /// Header names as they appear in the file, required or not.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[DoseRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<DoseRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads every dose record from the export at `path`.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<DoseRecord>, DatasetError> {
    DoseDataset::from_path(path).map(DoseDataset::into_records)
}
