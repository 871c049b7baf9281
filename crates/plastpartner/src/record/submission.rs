//! Parsing of JSON sales submissions.

use serde_json::Value;

use crate::error::{PlastError, Result};
use crate::input::RawRow;
use crate::schema::SalesSchema;

use super::sales::SalesRow;

/// Parse a JSON array of sales rows.
///
/// Clients post the rows they tokenized from CSV, so cell values may be
/// strings or numbers; every element goes through the same cell checks as an
/// upload. Any bad element fails the whole submission, naming its 1-based
/// position.
pub fn parse_submission(schema: &SalesSchema, payload: &str) -> Result<Vec<SalesRow>> {
    let value: Value = serde_json::from_str(payload)?;
    let Value::Array(items) = value else {
        return Err(PlastError::NotAnArray);
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let index = i + 1;
            let row = to_raw_row(item).ok_or_else(|| PlastError::InvalidRecord {
                index,
                message: "expected an object".to_string(),
            })?;
            SalesRow::from_raw(schema, &row)
                .map_err(|message| PlastError::InvalidRecord { index, message })
        })
        .collect()
}

fn to_raw_row(item: &Value) -> Option<RawRow> {
    let object = item.as_object()?;
    Some(
        object
            .iter()
            .map(|(key, value)| (key.clone(), cell_text(value)))
            .collect(),
    )
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
