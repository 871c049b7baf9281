//! Tokenized upload data and metadata.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One data line: column name to raw cell text, in header order.
///
/// A column missing from the map and an empty string are both "no value".
pub type RawRow = IndexMap<String, String>;

/// Metadata about an uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadMetadata {
    /// SHA-256 hash of the uploaded bytes.
    pub hash: String,
    /// Upload size in bytes.
    pub size_bytes: u64,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of header columns.
    pub column_count: usize,
    /// When the upload was tokenized.
    pub received_at: DateTime<Utc>,
}

impl UploadMetadata {
    /// Create metadata for an upload that has been tokenized.
    pub fn new(hash: String, size_bytes: u64, row_count: usize, column_count: usize) -> Self {
        Self {
            hash,
            size_bytes,
            row_count,
            column_count,
            received_at: Utc::now(),
        }
    }
}

/// A tokenized table: header names plus ordered raw rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Header names as they appear in the file.
    pub headers: Vec<String>,
    /// Data rows in file order.
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Create a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { headers, rows }
    }

    /// Build a table from positional records, zipping each with the headers.
    ///
    /// When a header repeats, the first occurrence keeps its value.
    pub fn from_records<R, S>(headers: Vec<String>, records: R) -> Self
    where
        R: IntoIterator<Item = Vec<S>>,
        S: Into<String>,
    {
        let rows = records
            .into_iter()
            .map(|record| {
                let mut row = RawRow::with_capacity(headers.len());
                for (header, value) in headers.iter().zip(record) {
                    row.entry(header.clone()).or_insert_with(|| value.into());
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
