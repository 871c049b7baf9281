//! Aggregation of stored sales into dashboard figures.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{ReductionTarget, ReportConfig};
use crate::growth::{self, IndexedYear, YearPoint};
use crate::record::{PersistedRecord, SalesRow, TenantId};

/// Norwegian month names, January first.
const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "Mars",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Units sold in one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyTotal {
    pub year: i32,
    pub number_sold: u64,
}

/// Units sold in one month of a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// 1 = January.
    pub month: u32,
    pub name: String,
    pub number_sold: u64,
}

/// Sum units sold per calendar year, ascending.
pub fn yearly_totals<'a>(rows: impl IntoIterator<Item = &'a SalesRow>) -> Vec<YearlyTotal> {
    let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
    for row in rows {
        let total = by_year.entry(row.year()).or_default();
        *total = total.saturating_add(row.units_sold);
    }
    by_year
        .into_iter()
        .map(|(year, number_sold)| YearlyTotal { year, number_sold })
        .collect()
}

/// Sum units sold per month of `year`; months without sales are left out.
pub fn monthly_totals<'a>(rows: impl IntoIterator<Item = &'a SalesRow>, year: i32) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<u32, u64> = BTreeMap::new();
    for row in rows.into_iter().filter(|r| r.year() == year) {
        let total = by_month.entry(row.sale_date.month()).or_default();
        *total = total.saturating_add(row.units_sold);
    }
    by_month
        .into_iter()
        .map(|(month, number_sold)| MonthlyTotal {
            month,
            name: MONTH_NAMES[(month - 1) as usize].to_string(),
            number_sold,
        })
        .collect()
}

/// Units sold across `rows`, saturating at `u64::MAX`.
fn total_units<'a>(rows: impl Iterator<Item = &'a SalesRow>) -> u64 {
    rows.fold(0u64, |acc, r| acc.saturating_add(r.units_sold))
}

/// Everything the front page shows for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub company: TenantId,
    /// Units sold by the company, all time.
    pub total_company: u64,
    /// Units sold by every company, all time.
    pub total_industry: u64,
    pub base_year: i32,
    /// Goal on the same indexed axis as `growth`.
    pub target: ReductionTarget,
    /// Absolute yearly figures for the company and the industry.
    pub yearly: Vec<YearPoint>,
    /// Yearly figures indexed to the base year; absent without base-year data.
    pub growth: Option<Vec<IndexedYear>>,
    /// The company's sales per month of `current_year`.
    pub monthly: Vec<MonthlyTotal>,
}

impl Dashboard {
    /// Aggregate a company's records against everyone's.
    pub fn build(
        company: &TenantId,
        company_records: &[PersistedRecord],
        all_records: &[PersistedRecord],
        config: &ReportConfig,
        current_year: i32,
    ) -> Self {
        let company_rows = || company_records.iter().map(|r| &r.row);
        let all_rows = || all_records.iter().map(|r| &r.row);

        let yearly = growth::combine(&yearly_totals(company_rows()), &yearly_totals(all_rows()));
        let growth = match growth::normalize(&yearly, config.base_year) {
            Ok(indexed) => Some(indexed),
            Err(e) => {
                warn!(company = %company, "growth series unavailable: {}", e);
                None
            }
        };

        Self {
            company: company.clone(),
            total_company: total_units(company_rows()),
            total_industry: total_units(all_rows()),
            base_year: config.base_year,
            target: config.target,
            yearly,
            growth,
            monthly: monthly_totals(company_rows(), current_year),
        }
    }
}
