//! CSV tokenizer for sales uploads.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{PlastError, Result};
use super::source::{RawTable, UploadMetadata};

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            max_rows: None,
        }
    }
}

/// Tokenizes uploaded tables. The first line is always the header.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Read and tokenize a file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(RawTable, UploadMetadata)> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|e| PlastError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.parse_upload(&contents)
    }

    /// Tokenize uploaded bytes and describe them.
    pub fn parse_upload(&self, bytes: &[u8]) -> Result<(RawTable, UploadMetadata)> {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let table = self.parse_bytes(bytes)?;
        let metadata = UploadMetadata::new(
            hash,
            bytes.len() as u64,
            table.row_count(),
            table.column_count(),
        );

        debug!(
            rows = metadata.row_count,
            columns = metadata.column_count,
            hash = %metadata.hash,
            "tokenized upload"
        );

        Ok((table, metadata))
    }

    /// Tokenize bytes into headers and raw rows.
    ///
    /// Blank lines are skipped. A line whose field count differs from the
    /// header is a structural error reported with its line number.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<RawTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .flexible(false)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()
            .map_err(to_parse_error)?
            .iter()
            .map(|s| s.to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(PlastError::EmptyData("No header row found".to_string()));
        }

        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result.map_err(to_parse_error)?;
            records.push(record.iter().map(|s| s.to_string()).collect::<Vec<String>>());
        }

        Ok(RawTable::from_records(headers, records))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach the offending line to tokenizer errors when the CSV reader knows it.
fn to_parse_error(err: csv::Error) -> PlastError {
    match err.position() {
        Some(pos) => PlastError::Parse {
            line: pos.line(),
            message: match err.kind() {
                csv::ErrorKind::UnequalLengths {
                    expected_len, len, ..
                } => format!("expected {} fields, found {}", expected_len, len),
                _ => err.to_string(),
            },
        },
        None => PlastError::Csv(err),
    }
}
