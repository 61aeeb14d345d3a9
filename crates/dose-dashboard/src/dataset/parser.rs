use super::normalizer::{decode_field, normalize_header};
use super::{DatasetError, DoseRecord};
use csv::ByteRecord;
use std::io::Read;

pub const APPLICATION_DATE_COLUMN: &str = "vacina_dataAplicacao";
pub const BIOLOGICAL_SEX_COLUMN: &str = "paciente_enumSexoBiologico";
pub const VACCINE_NAME_COLUMN: &str = "vacina_nome";
// Upstream export spells "estabelecimento" this way for this one column.
pub const FACILITY_NAME_COLUMN: &str = "estalecimento_noFantasia";

pub(crate) const FIELD_DELIMITER: u8 = b';';

/// Positions of the columns aggregated by the summary; everything else is carried through.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    application_date: usize,
    biological_sex: usize,
    vaccine_name: usize,
    facility_name: usize,
}

impl ColumnLayout {
    fn resolve(columns: &[String]) -> Result<Self, DatasetError> {
        let position = |column: &'static str| {
            columns
                .iter()
                .position(|name| name == column)
                .ok_or(DatasetError::MissingColumn { column })
        };

        Ok(Self {
            application_date: position(APPLICATION_DATE_COLUMN)?,
            biological_sex: position(BIOLOGICAL_SEX_COLUMN)?,
            vaccine_name: position(VACCINE_NAME_COLUMN)?,
            facility_name: position(FACILITY_NAME_COLUMN)?,
        })
    }

    fn extract(&self, row: &ByteRecord) -> DoseRecord {
        let field = |index: usize| row.get(index).map(decode_field).unwrap_or_default();

        DoseRecord {
            application_date: field(self.application_date),
            biological_sex: field(self.biological_sex),
            vaccine_name: field(self.vaccine_name),
            facility_name: field(self.facility_name),
        }
    }
}

pub(crate) struct ParsedRows {
    pub(crate) columns: Vec<String>,
    pub(crate) records: Vec<DoseRecord>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<ParsedRows, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .byte_headers()?
        .iter()
        .map(|raw| normalize_header(&decode_field(raw)))
        .collect();
    let layout = ColumnLayout::resolve(&columns)?;

    let mut records = Vec::new();
    let mut row = ByteRecord::new();
    while csv_reader.read_byte_record(&mut row)? {
        records.push(layout.extract(&row));
    }

    Ok(ParsedRows { columns, records })
}
