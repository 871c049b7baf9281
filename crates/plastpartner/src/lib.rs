//! plastpartner: sales reporting for the plastic reduction partnership.
//!
//! Member companies upload yearly sales of plastic drinking cups and food
//! containers. This crate validates the uploads, stores them row by row, and
//! turns stored sales into year-over-year growth figures comparable with the
//! whole partnership.
//!
//! # Example
//!
//! ```no_run
//! use plastpartner::{Parser, ReportConfig, TableValidator};
//!
//! let config = ReportConfig::default();
//! let (table, _metadata) = Parser::new().parse_file("sales.csv").unwrap();
//!
//! match TableValidator::new(&config.schema).accept(&table) {
//!     Ok(rows) => println!("{} rows ready to store", rows.len()),
//!     Err(report) => {
//!         for line in report.to_lines() {
//!             println!("{}", line);
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod growth;
pub mod ingest;
pub mod input;
pub mod measure;
pub mod record;
pub mod report;
pub mod schema;
pub mod store;
pub mod validation;

pub use config::{ReductionTarget, ReportConfig, DEFAULT_BASE_YEAR};
pub use error::{PlastError, Result};
pub use growth::{combine, normalize, IndexedYear, YearPoint};
pub use ingest::{ingest, FailedRecord, IngestionOutcome, IngestionResult};
pub use input::{Parser, ParserConfig, RawRow, RawTable, UploadMetadata};
pub use measure::{Measure, MeasureDetails, NewMeasure};
pub use record::{parse_submission, Category, PersistedRecord, PlasticComposition, SalesRow, TenantId};
pub use report::{monthly_totals, yearly_totals, Dashboard, MonthlyTotal, YearlyTotal};
pub use schema::{ColumnSpec, ColumnType, Constraint, SalesSchema};
pub use store::{MemoryStore, SalesStore, Scope};
pub use validation::{
    validate_cell, CellCheck, RowError, RowValidationError, TableValidator, ValidationReport,
};
