//! Validation engine for uploaded sales tables.

mod cell;
mod report;
mod table;

pub use cell::{validate_cell, CellCheck, EMPTY_FIELD};
pub use report::{RowError, RowValidationError, ValidationReport};
pub use table::{check_row, TableValidator, REQUIRED_FIELD_EMPTY};
