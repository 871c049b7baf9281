//! Validation report types.

use serde::{Deserialize, Serialize};

/// One failed cell-level check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    pub column: String,
    pub message: String,
}

impl RowError {
    pub fn new(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            message: message.into(),
        }
    }
}

/// All cell failures of one data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowValidationError {
    /// Row number as seen in a spreadsheet: the header is row 1, so the
    /// first data row is row 2.
    pub row_index: usize,
    /// Failures in schema column order.
    pub errors: Vec<RowError>,
}

/// Result of validating a whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Required columns absent from the header.
    pub missing_columns: Vec<String>,
    /// Headers that match no expected column. Informational; they are ignored.
    pub unexpected_columns: Vec<String>,
    /// Rows with at least one failed cell, in row order.
    pub row_errors: Vec<RowValidationError>,
}

impl ValidationReport {
    /// Whether the table may be persisted.
    pub fn is_accepted(&self) -> bool {
        self.missing_columns.is_empty() && self.row_errors.is_empty()
    }

    /// Total number of failed cells across all rows.
    pub fn cell_error_count(&self) -> usize {
        self.row_errors.iter().map(|r| r.errors.len()).sum()
    }

    /// Human-readable lines, one per problem.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for column in &self.missing_columns {
            lines.push(format!("Missing required column \"{}\"", column));
        }
        for column in &self.unexpected_columns {
            lines.push(format!("Unexpected column \"{}\" (ignored)", column));
        }
        for row in &self.row_errors {
            for error in &row.errors {
                lines.push(format!(
                    "Row {}: column \"{}\": {}",
                    row.row_index, error.column, error.message
                ));
            }
        }

        lines
    }
}
