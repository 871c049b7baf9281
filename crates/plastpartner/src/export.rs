//! Semicolon-delimited downloads of stored data.

use chrono::NaiveDate;

use crate::error::{PlastError, Result};
use crate::measure::Measure;
use crate::record::PersistedRecord;

const SALES_HEADER: [&str; 5] = [
    "Salgsdato",
    "Kategori",
    "Helt/delvis av plast",
    "Antall solgt",
    "Tonn plast",
];

const MEASURES_HEADER: [&str; 4] = ["Dato", "Type tiltak", "Kort beskrivelse", "Lengre beskrivelse"];

/// Norwegian short date, e.g. `15.3.2024`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-d.%-m.%Y").to_string()
}

/// Sales records as `;`-separated text, one line per record.
///
/// Values containing the delimiter, quotes or line breaks are quoted.
pub fn sales_csv(records: &[PersistedRecord]) -> Result<String> {
    let mut writer = semicolon_writer();
    writer.write_record(SALES_HEADER)?;

    for record in records {
        let row = &record.row;
        writer.write_record([
            format_short_date(row.sale_date),
            row.category.to_string(),
            row.plastic.to_string(),
            row.units_sold.to_string(),
            row.tonnes_plastic.map(|t| t.to_string()).unwrap_or_default(),
        ])?;
    }

    finish(writer)
}

/// Measures as `;`-separated text, one line per measure.
pub fn measures_csv(measures: &[Measure]) -> Result<String> {
    let mut writer = semicolon_writer();
    writer.write_record(MEASURES_HEADER)?;

    for measure in measures {
        let details = &measure.details;
        writer.write_record([
            format_short_date(details.implemented_on),
            details.kind.clone(),
            details.summary.clone(),
            details.description.clone(),
        ])?;
    }

    finish(writer)
}

fn semicolon_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| PlastError::Persistence(format!("Failed to flush export: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| PlastError::Persistence(format!("Export is not valid UTF-8: {}", e)))
}
