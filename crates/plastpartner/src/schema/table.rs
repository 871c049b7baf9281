//! The ordered set of expected columns for a sales upload.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{PlastError, Result};
use crate::record::{Category, PlasticComposition};

use super::column::ColumnSpec;
use super::types::{ColumnType, Constraint};

/// Header of the sale date column.
pub const SALE_DATE: &str = "Dato for salg";
/// Header of the product category column.
pub const CATEGORY: &str = "Kategori";
/// Header of the plastic composition column.
pub const PLASTIC_COMPOSITION: &str = "Helt/delvis av plast";
/// Header of the units sold column.
pub const UNITS_SOLD: &str = "Enheter solgt";
/// Header of the plastic tonnage column.
pub const TONNES_PLASTIC: &str = "Tonn plast";

/// Largest unit count accepted per row.
///
/// Every integer up to 2^53 is exact as an `f64`, and per-year sums of such
/// rows stay far from `u64::MAX`.
pub const MAX_UNITS_SOLD: u64 = 1 << 53;

/// Example data row rendered under the header in the upload template.
const TEMPLATE_EXAMPLE: &[&str] = &["2024-03-15", "Matbeholder", "Helt av plast", "100", "0.5"];

/// Schema for an uploaded table.
///
/// Built once at startup and shared read-only by the validators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSchema {
    columns: Vec<ColumnSpec>,
}

impl SalesSchema {
    /// Create a schema, rejecting duplicate column names.
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(PlastError::Config(format!(
                    "duplicate column '{}' in schema",
                    column.name
                )));
            }
        }
        Ok(Self { columns })
    }

    /// The five-column sales schema.
    pub fn sales() -> Self {
        Self {
            columns: vec![
                ColumnSpec::required(SALE_DATE, ColumnType::Date),
                ColumnSpec::required(CATEGORY, ColumnType::String).with_constraint(
                    Constraint::one_of("category", Category::ALL.iter().map(|c| c.as_str())),
                ),
                ColumnSpec::required(PLASTIC_COMPOSITION, ColumnType::String).with_constraint(
                    Constraint::one_of(
                        "plastic composition",
                        PlasticComposition::ALL.iter().map(|p| p.as_str()),
                    ),
                ),
                ColumnSpec::required(UNITS_SOLD, ColumnType::Number)
                    .with_constraint(Constraint::Positive)
                    .with_constraint(Constraint::WholeNumber)
                    .with_constraint(Constraint::AtMost {
                        max: MAX_UNITS_SOLD as f64,
                    }),
                ColumnSpec::optional(TONNES_PLASTIC, ColumnType::Number)
                    .with_constraint(Constraint::NonNegative),
            ],
        }
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether a header names a declared column.
    pub fn contains(&self, name: &str) -> bool {
        self.get_column(name).is_some()
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Columns that must be present.
    pub fn required_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| c.required)
    }

    /// Comma-separated header line plus one example row.
    pub fn template_csv(&self) -> String {
        let header = self.column_names().join(",");
        let example: Vec<&str> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, _)| TEMPLATE_EXAMPLE.get(i).copied().unwrap_or(""))
            .collect();
        format!("{}\n{}\n", header, example.join(","))
    }
}

impl Default for SalesSchema {
    fn default() -> Self {
        Self::sales()
    }
}
