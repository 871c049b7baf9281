//! Table-level validation: column presence plus per-row cell checks.

use tracing::debug;

use crate::input::{RawRow, RawTable};
use crate::record::SalesRow;
use crate::schema::{ColumnSpec, SalesSchema};

use super::cell::validate_cell;
use super::report::{RowError, RowValidationError, ValidationReport};

/// Message for a required cell with no value.
pub const REQUIRED_FIELD_EMPTY: &str = "required field is empty";

/// Offset from a 0-based data row to its spreadsheet row number.
const HEADER_ROW_OFFSET: usize = 2;

/// Validates tokenized tables against a schema.
#[derive(Debug, Clone, Copy)]
pub struct TableValidator<'a> {
    schema: &'a SalesSchema,
}

impl<'a> TableValidator<'a> {
    pub fn new(schema: &'a SalesSchema) -> Self {
        Self { schema }
    }

    /// Validate headers and rows, collecting every problem.
    ///
    /// Columns absent from the header are reported once and never checked
    /// per row. Zero rows is a valid, empty dataset.
    pub fn validate(&self, headers: &[String], rows: &[RawRow]) -> ValidationReport {
        let missing_columns: Vec<String> = self
            .schema
            .required_columns()
            .filter(|c| !headers.contains(&c.name))
            .map(|c| c.name.clone())
            .collect();

        let unexpected_columns: Vec<String> = headers
            .iter()
            .filter(|h| !self.schema.contains(h))
            .cloned()
            .collect();

        let present: Vec<&ColumnSpec> = self
            .schema
            .columns()
            .iter()
            .filter(|c| headers.contains(&c.name))
            .collect();

        let row_errors: Vec<RowValidationError> = rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| {
                let errors = check_row(present.iter().copied(), row);
                (!errors.is_empty()).then(|| RowValidationError {
                    row_index: i + HEADER_ROW_OFFSET,
                    errors,
                })
            })
            .collect();

        let report = ValidationReport {
            missing_columns,
            unexpected_columns,
            row_errors,
        };

        debug!(
            rows = rows.len(),
            missing = report.missing_columns.len(),
            unexpected = report.unexpected_columns.len(),
            failed_rows = report.row_errors.len(),
            accepted = report.is_accepted(),
            "validated table"
        );

        report
    }

    /// Validate a tokenized table.
    pub fn validate_table(&self, table: &RawTable) -> ValidationReport {
        self.validate(&table.headers, &table.rows)
    }

    /// Validate and, when accepted, convert every row to a [`SalesRow`].
    ///
    /// A rejected table comes back as its report.
    pub fn accept(&self, table: &RawTable) -> Result<Vec<SalesRow>, ValidationReport> {
        match self.evaluate(table) {
            (_, Some(rows)) => Ok(rows),
            (report, None) => Err(report),
        }
    }

    /// Validate `table` once and convert its rows when it is accepted.
    ///
    /// The report is returned either way, so an accepted sheet still carries
    /// its unexpected columns.
    pub fn evaluate(&self, table: &RawTable) -> (ValidationReport, Option<Vec<SalesRow>>) {
        let report = self.validate_table(table);
        if !report.is_accepted() {
            return (report, None);
        }

        let mut typed = Vec::with_capacity(table.rows.len());
        for (i, row) in table.rows.iter().enumerate() {
            match SalesRow::convert(row) {
                Ok(sales) => typed.push(sales),
                // Only reachable with a schema that does not declare the
                // sales columns; surface it as a row failure.
                Err(message) => {
                    let report = ValidationReport {
                        row_errors: vec![RowValidationError {
                            row_index: i + HEADER_ROW_OFFSET,
                            errors: vec![RowError::new("", message)],
                        }],
                        ..report
                    };
                    return (report, None);
                }
            }
        }

        (report, Some(typed))
    }
}

/// Check one row against the given columns, in their order.
///
/// Empty optional cells are skipped. An empty required cell yields a single
/// error and no type check.
pub fn check_row<'c>(columns: impl Iterator<Item = &'c ColumnSpec>, row: &RawRow) -> Vec<RowError> {
    let mut errors = Vec::new();

    for column in columns {
        let value = row.get(&column.name).map(String::as_str);
        let is_empty = value.map_or(true, |v| v.trim().is_empty());

        if is_empty {
            if column.required {
                errors.push(RowError::new(&column.name, REQUIRED_FIELD_EMPTY));
            }
            continue;
        }

        let check = validate_cell(value, column);
        if !check.valid {
            let message = check.message.unwrap_or_else(|| {
                format!(
                    "invalid {} value: \"{}\"",
                    column.column_type,
                    value.unwrap_or_default()
                )
            });
            errors.push(RowError::new(&column.name, message));
        }
    }

    errors
}
