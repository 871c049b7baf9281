//! Semantic column types, parsed cell values and domain constraints.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date layouts accepted for date cells, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// Datetime layouts accepted for date cells; only the date part is kept.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Semantic type of an expected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Free text, optionally restricted by a `OneOf` constraint.
    String,
    /// Numeric literal.
    Number,
    /// Calendar date.
    Date,
}

impl ColumnType {
    /// Lowercase label used in messages and the template table.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Date => "date",
        }
    }

    /// Parse a non-empty raw cell into its typed value.
    ///
    /// The error is the type-specific message shown to the uploader.
    pub fn parse(&self, raw: &str) -> Result<CellValue, String> {
        match self {
            ColumnType::String => Ok(CellValue::Text(raw.to_string())),
            ColumnType::Number => parse_number(raw)
                .map(CellValue::Number)
                .ok_or_else(|| format!("\"{}\" is not a valid number", raw)),
            ColumnType::Date => parse_date(raw)
                .map(CellValue::Date)
                .ok_or_else(|| format!("\"{}\" is not a valid date", raw)),
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A cell value that passed its type check.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

/// A domain constraint attached to a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// Text must be one of a closed set of values.
    OneOf {
        /// Human name of the enumeration, e.g. "category".
        label: String,
        values: Vec<String>,
    },
    /// Number must be strictly greater than zero.
    Positive,
    /// Number must be zero or greater.
    NonNegative,
    /// Number must not have a fractional part.
    WholeNumber,
    /// Number must not exceed `max`.
    AtMost { max: f64 },
}

impl Constraint {
    /// Build a `OneOf` constraint from any list of displayable values.
    pub fn one_of<I, S>(label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Constraint::OneOf {
            label: label.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Check a typed value, returning the violation message if any.
    ///
    /// Constraints that do not apply to the value's type never fail.
    pub fn check(&self, column: &str, value: &CellValue) -> Option<String> {
        match (self, value) {
            (Constraint::OneOf { label, values }, CellValue::Text(text)) => {
                if values.iter().any(|v| v == text) {
                    None
                } else {
                    let allowed: Vec<String> = values.iter().map(|v| format!("'{}'", v)).collect();
                    Some(format!(
                        "Invalid {}. Must be one of {}",
                        label,
                        allowed.join(", ")
                    ))
                }
            }
            (Constraint::Positive, CellValue::Number(n)) if *n <= 0.0 => {
                Some(format!("{} must be greater than 0", column))
            }
            (Constraint::NonNegative, CellValue::Number(n)) if *n < 0.0 => {
                Some(format!("{} cannot be negative", column))
            }
            (Constraint::WholeNumber, CellValue::Number(n)) if n.fract() != 0.0 => {
                Some(format!("{} must be a whole number", column))
            }
            (Constraint::AtMost { max }, CellValue::Number(n)) if *n > *max => {
                Some(format!("{} must be at most {}", column, max))
            }
            _ => None,
        }
    }
}

/// Parse a numeric literal. Non-finite results are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Parse a calendar date from the layouts uploads use in practice.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}
