//! Expected column declaration.

use serde::{Deserialize, Serialize};

use super::types::{ColumnType, Constraint};

/// Declared name, type and required-ness of one expected column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name as it appears in the header row.
    pub name: String,
    /// Semantic type every non-empty cell must parse as.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Whether the column must be present and non-empty.
    pub required: bool,
    /// Domain constraints checked after a successful type parse, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

impl ColumnSpec {
    /// Declare a required column.
    pub fn required(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            required: true,
            constraints: Vec::new(),
        }
    }

    /// Declare an optional column.
    pub fn optional(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            required: false,
            ..Self::required(name, column_type)
        }
    }

    /// Attach a domain constraint.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Allowed values when the column is a closed enumeration.
    pub fn allowed_values(&self) -> Option<&[String]> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::OneOf { values, .. } => Some(values.as_slice()),
            _ => None,
        })
    }
}
