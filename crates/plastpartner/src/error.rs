//! Error types for the plastpartner library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for plastpartner operations.
///
/// Validation failures are never reported through this type; they are
/// returned as a [`ValidationReport`](crate::validation::ValidationReport).
/// Per-row persistence failures end up in an
/// [`IngestionResult`](crate::ingest::IngestionResult) rather than here.
#[derive(Debug, Error)]
pub enum PlastError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The uploaded table could not be tokenized.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty upload or no header row.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A submission payload was valid JSON but not an array of records.
    #[error("Data must be an array of sales records")]
    NotAnArray,

    /// One element of a submission payload is not a valid sales record.
    #[error("Invalid record {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    /// The series handed to the growth normalizer lacks the base year.
    #[error("Base year {0} not found in data")]
    BaseYearNotFound(i32),

    /// Tenant identifier was blank.
    #[error("Invalid tenant: {0}")]
    InvalidTenant(String),

    /// A measure failed its field checks.
    #[error("Invalid measure: {0}")]
    InvalidMeasure(String),

    /// Requested entity does not exist for the tenant.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage-layer failure.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for plastpartner operations.
pub type Result<T> = std::result::Result<T, PlastError>;
