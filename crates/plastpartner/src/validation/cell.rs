//! Single-cell type and domain checks.

use serde::{Deserialize, Serialize};

use crate::schema::ColumnSpec;

/// Message for a cell with no value.
pub const EMPTY_FIELD: &str = "empty field";

/// Outcome of checking one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CellCheck {
    fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Check one raw cell against its column.
///
/// Absent, empty and whitespace-only values are reported as [`EMPTY_FIELD`];
/// whether that matters is the caller's call. Otherwise the value is parsed
/// by its column type and then held to the column's constraints in order,
/// stopping at the first violation.
pub fn validate_cell(raw: Option<&str>, column: &ColumnSpec) -> CellCheck {
    let value = match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return CellCheck::invalid(EMPTY_FIELD),
    };

    let parsed = match column.column_type.parse(value) {
        Ok(parsed) => parsed,
        Err(message) => return CellCheck::invalid(message),
    };

    column
        .constraints
        .iter()
        .find_map(|c| c.check(&column.name, &parsed))
        .map(CellCheck::invalid)
        .unwrap_or_else(CellCheck::ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnType, SalesSchema, CATEGORY, PLASTIC_COMPOSITION, SALE_DATE, TONNES_PLASTIC, UNITS_SOLD};

    fn column(name: &str) -> ColumnSpec {
        SalesSchema::sales().get_column(name).unwrap().clone()
    }

    #[test]
    fn test_empty_values() {
        let col = column(CATEGORY);
        for raw in [None, Some(""), Some("   ")] {
            let check = validate_cell(raw, &col);
            assert!(!check.valid);
            assert_eq!(check.message.as_deref(), Some(EMPTY_FIELD));
        }
    }

    #[test]
    fn test_category_enumeration() {
        let col = column(CATEGORY);
        assert!(validate_cell(Some("Matbeholder"), &col).valid);
        assert!(validate_cell(Some("Drikkebegre"), &col).valid);

        let check = validate_cell(Some("Tallerken"), &col);
        assert!(!check.valid);
        let msg = check.message.unwrap();
        assert!(msg.contains("category"));
        assert!(msg.contains("'Matbeholder'"));
    }

    #[test]
    fn test_plastic_composition_enumeration() {
        let col = column(PLASTIC_COMPOSITION);
        assert!(validate_cell(Some("Helt av plast"), &col).valid);
        assert!(validate_cell(Some("Delvis av plast"), &col).valid);
        assert!(!validate_cell(Some("Uten plast"), &col).valid);
    }

    #[test]
    fn test_free_text_without_enumeration() {
        let col = ColumnSpec::required("Kommentar", ColumnType::String);
        assert!(validate_cell(Some("anything goes"), &col).valid);
    }

    #[test]
    fn test_not_a_number() {
        for name in [UNITS_SOLD, TONNES_PLASTIC] {
            let check = validate_cell(Some("abc"), &column(name));
            assert!(!check.valid);
            assert!(check.message.unwrap().contains("not a valid number"));
        }
    }

    #[test]
    fn test_units_sold_positive() {
        let col = column(UNITS_SOLD);
        let check = validate_cell(Some("0"), &col);
        assert!(!check.valid);
        assert!(check.message.unwrap().contains("greater than 0"));
        assert!(!validate_cell(Some("-5"), &col).valid);
        assert!(validate_cell(Some("1"), &col).valid);
    }

    #[test]
    fn test_units_sold_whole_number() {
        let check = validate_cell(Some("2.5"), &column(UNITS_SOLD));
        assert!(!check.valid);
        assert!(check.message.unwrap().contains("whole number"));
    }

    #[test]
    fn test_units_sold_upper_bound() {
        let col = column(UNITS_SOLD);
        assert!(validate_cell(Some("9007199254740992"), &col).valid);

        for raw in ["1e30", "10000000000000000000", "9007199254740994"] {
            let check = validate_cell(Some(raw), &col);
            assert!(!check.valid, "{raw} should be rejected");
            assert_eq!(
                check.message.as_deref(),
                Some("Enheter solgt must be at most 9007199254740992")
            );
        }
    }

    #[test]
    fn test_tonnage_non_negative() {
        let col = column(TONNES_PLASTIC);
        let check = validate_cell(Some("-1"), &col);
        assert!(!check.valid);
        assert!(check.message.unwrap().contains("cannot be negative"));
        assert!(validate_cell(Some("0"), &col).valid);
        assert!(validate_cell(Some("0.25"), &col).valid);
    }

    #[test]
    fn test_dates() {
        let col = column(SALE_DATE);
        assert!(validate_cell(Some("2024-03-15"), &col).valid);
        let check = validate_cell(Some("15th of March"), &col);
        assert!(!check.valid);
        assert!(check.message.unwrap().contains("not a valid date"));
    }
}
