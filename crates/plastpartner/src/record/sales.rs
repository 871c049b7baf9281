//! Typed sales rows and persisted records.

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::input::RawRow;
use crate::schema::{
    parse_date, parse_number, SalesSchema, CATEGORY, PLASTIC_COMPOSITION, SALE_DATE,
    TONNES_PLASTIC, UNITS_SOLD, MAX_UNITS_SOLD,
};
use crate::validation::check_row;

use super::tenant::TenantId;

/// Product category of a sales row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Food container.
    #[serde(rename = "Matbeholder")]
    FoodContainer,
    /// Drinking cup.
    #[serde(rename = "Drikkebegre")]
    DrinkingCup,
}

impl Category {
    /// Every category, in the order shown to uploaders.
    pub const ALL: [Category; 2] = [Category::FoodContainer, Category::DrinkingCup];

    /// The value as written in uploads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FoodContainer => "Matbeholder",
            Category::DrinkingCup => "Drikkebegre",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a product is entirely or partly made of plastic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlasticComposition {
    #[serde(rename = "Helt av plast")]
    Full,
    #[serde(rename = "Delvis av plast")]
    Partial,
}

impl PlasticComposition {
    /// Every composition, in the order shown to uploaders.
    pub const ALL: [PlasticComposition; 2] = [PlasticComposition::Full, PlasticComposition::Partial];

    /// The value as written in uploads.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlasticComposition::Full => "Helt av plast",
            PlasticComposition::Partial => "Delvis av plast",
        }
    }
}

impl FromStr for PlasticComposition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlasticComposition::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Unknown plastic composition: {}", s))
    }
}

impl std::fmt::Display for PlasticComposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sales row whose cells all passed their type and domain checks.
///
/// Serialized with the upload column names as keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRow {
    #[serde(rename = "Dato for salg")]
    pub sale_date: NaiveDate,
    #[serde(rename = "Kategori")]
    pub category: Category,
    #[serde(rename = "Helt/delvis av plast")]
    pub plastic: PlasticComposition,
    #[serde(rename = "Enheter solgt")]
    pub units_sold: u64,
    /// Zero tonnage is kept distinct from an absent figure.
    #[serde(rename = "Tonn plast", default, skip_serializing_if = "Option::is_none")]
    pub tonnes_plastic: Option<f64>,
}

impl SalesRow {
    /// Validate a raw row against every schema column and convert it.
    ///
    /// Columns missing from the row count as empty cells. The error joins
    /// every cell failure as `column: message`.
    pub fn from_raw(schema: &SalesSchema, row: &RawRow) -> Result<Self, String> {
        let errors = check_row(schema.columns().iter(), row);
        if !errors.is_empty() {
            let parts: Vec<String> = errors
                .iter()
                .map(|e| format!("{}: {}", e.column, e.message))
                .collect();
            return Err(parts.join("; "));
        }
        Self::convert(row)
    }

    /// Convert a row that has already passed validation.
    pub(crate) fn convert(row: &RawRow) -> Result<Self, String> {
        let cell = |name: &str| {
            row.get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &str| cell(name).ok_or_else(|| format!("{}: missing value", name));

        let sale_date = parse_date(required(SALE_DATE)?)
            .ok_or_else(|| format!("{}: not a valid date", SALE_DATE))?;
        let category = required(CATEGORY)?.parse::<Category>()?;
        let plastic = required(PLASTIC_COMPOSITION)?.parse::<PlasticComposition>()?;
        let units_sold = parse_number(required(UNITS_SOLD)?)
            .filter(|n| *n > 0.0 && n.fract() == 0.0 && *n <= MAX_UNITS_SOLD as f64)
            .map(|n| n as u64)
            .ok_or_else(|| format!("{}: not a positive whole number", UNITS_SOLD))?;
        let tonnes_plastic = match cell(TONNES_PLASTIC) {
            Some(raw) => Some(
                parse_number(raw)
                    .ok_or_else(|| format!("{}: not a valid number", TONNES_PLASTIC))?,
            ),
            None => None,
        };

        Ok(Self {
            sale_date,
            category,
            plastic,
            units_sold,
            tonnes_plastic,
        })
    }

    /// Calendar year of the sale.
    pub fn year(&self) -> i32 {
        self.sale_date.year()
    }
}

/// A sales row stored for a tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    /// Store-assigned identifier.
    pub id: u64,
    /// Owning company.
    pub company: TenantId,
    /// When the record was stored.
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub row: SalesRow,
}
