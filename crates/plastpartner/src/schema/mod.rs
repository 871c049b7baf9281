//! Expected table shape for sales uploads.

mod column;
mod table;
mod types;

pub use column::ColumnSpec;
pub use table::{
    SalesSchema, CATEGORY, MAX_UNITS_SOLD, PLASTIC_COMPOSITION, SALE_DATE, TONNES_PLASTIC, UNITS_SOLD,
};
pub use types::{parse_date, parse_number, CellValue, ColumnType, Constraint};
