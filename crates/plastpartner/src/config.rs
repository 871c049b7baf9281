//! Configuration shared by validation and reporting.

use serde::{Deserialize, Serialize};

use crate::schema::SalesSchema;

/// Year that growth series are indexed against.
pub const DEFAULT_BASE_YEAR: i32 = 2022;

/// Indexed value the partnership aims for.
pub const DEFAULT_TARGET_INDEX: f64 = 50.0;

/// Year the reduction target applies to.
pub const DEFAULT_TARGET_YEAR: i32 = 2026;

/// Partnership goal on the indexed growth axis.
///
/// The default is a 50 % cut from the base year by 2026, i.e. index 50.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReductionTarget {
    /// Index value to reach, base year = 100.
    pub index: f64,
    /// Year by which the index should be reached.
    pub year: i32,
}

impl ReductionTarget {
    /// The target as a change from the base year, e.g. -50.
    pub fn percent_change(&self) -> f64 {
        self.index - 100.0
    }
}

impl Default for ReductionTarget {
    fn default() -> Self {
        Self {
            index: DEFAULT_TARGET_INDEX,
            year: DEFAULT_TARGET_YEAR,
        }
    }
}

/// Built once at startup and passed by reference to every component.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Expected upload columns.
    pub schema: SalesSchema,
    /// Reference year for percentage growth.
    pub base_year: i32,
    /// Reduction goal drawn against the growth series.
    pub target: ReductionTarget,
}

impl ReportConfig {
    /// Override the base year.
    pub fn with_base_year(mut self, base_year: i32) -> Self {
        self.base_year = base_year;
        self
    }

    /// Override the reduction target.
    pub fn with_target(mut self, target: ReductionTarget) -> Self {
        self.target = target;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            schema: SalesSchema::sales(),
            base_year: DEFAULT_BASE_YEAR,
            target: ReductionTarget::default(),
        }
    }
}
