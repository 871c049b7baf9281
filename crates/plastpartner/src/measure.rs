//! Reduction measures ("tiltak") that a company registers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlastError, Result};
use crate::record::TenantId;
use crate::schema::parse_date;

/// Unvalidated measure as submitted from a form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMeasure {
    /// Type of measure.
    pub kind: String,
    /// Short description.
    pub summary: String,
    /// Long description.
    pub description: String,
    /// Date the measure took effect.
    pub implemented_on: String,
}

/// Checked measure fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureDetails {
    pub kind: String,
    pub summary: String,
    pub description: String,
    pub implemented_on: NaiveDate,
}

/// A stored measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub id: u64,
    pub company: TenantId,
    #[serde(flatten)]
    pub details: MeasureDetails,
}

impl NewMeasure {
    /// Every field is required.
    pub fn validate(&self) -> Result<MeasureDetails> {
        let required = |name: &str, value: &str| -> Result<String> {
            let value = value.trim();
            if value.is_empty() {
                Err(PlastError::InvalidMeasure(format!("{} is required", name)))
            } else {
                Ok(value.to_string())
            }
        };

        let kind = required("kind", &self.kind)?;
        let summary = required("summary", &self.summary)?;
        let description = required("description", &self.description)?;
        let date = required("implemented_on", &self.implemented_on)?;
        let implemented_on = parse_date(&date).ok_or_else(|| {
            PlastError::InvalidMeasure(format!("\"{}\" is not a valid date", date))
        })?;

        Ok(MeasureDetails {
            kind,
            summary,
            description,
            implemented_on,
        })
    }
}
