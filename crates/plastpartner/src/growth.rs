//! Percentage growth relative to a base year.
//!
//! A company and the whole industry sell at very different scales. Indexing
//! both series to their base-year value (base = 100) puts them on one axis.

use serde::{Deserialize, Serialize};

use crate::error::{PlastError, Result};
use crate::report::YearlyTotal;

/// Absolute values for one year: the company's and the industry's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    pub year: i32,
    pub company: Option<f64>,
    pub industry: Option<f64>,
}

/// Indexed values for one year; `None` means no data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexedYear {
    pub year: i32,
    pub company: Option<f64>,
    pub industry: Option<f64>,
}

/// Line up a company's yearly totals with the industry's.
///
/// One point per industry year in ascending order. A year in which the
/// company sold nothing gets 0 for the company.
pub fn combine(company: &[YearlyTotal], industry: &[YearlyTotal]) -> Vec<YearPoint> {
    let mut points: Vec<YearPoint> = industry
        .iter()
        .map(|total| YearPoint {
            year: total.year,
            company: Some(
                company
                    .iter()
                    .find(|c| c.year == total.year)
                    .map_or(0.0, |c| c.number_sold as f64),
            ),
            industry: Some(total.number_sold as f64),
        })
        .collect();
    points.sort_by_key(|p| p.year);
    points
}

/// Re-express every track as a percentage of its base-year value.
///
/// Fails when `base_year` has no entry. A track whose base value is missing
/// or zero is `None` for every year, as is any point without a value.
pub fn normalize(series: &[YearPoint], base_year: i32) -> Result<Vec<IndexedYear>> {
    let base = series
        .iter()
        .find(|p| p.year == base_year)
        .ok_or(PlastError::BaseYearNotFound(base_year))?;

    Ok(series
        .iter()
        .map(|point| IndexedYear {
            year: point.year,
            company: index(point.company, base.company),
            industry: index(point.industry, base.industry),
        })
        .collect())
}

fn index(value: Option<f64>, base: Option<f64>) -> Option<f64> {
    match (value, base) {
        (Some(value), Some(base)) if base != 0.0 => {
            Some(value / base * 100.0).filter(|v| v.is_finite())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(year: i32, company: Option<f64>, industry: Option<f64>) -> YearPoint {
        YearPoint {
            year,
            company,
            industry,
        }
    }

    fn sample() -> Vec<YearPoint> {
        vec![
            point(2022, Some(50.0), Some(200.0)),
            point(2023, Some(75.0), Some(300.0)),
            point(2024, Some(60.0), Some(240.0)),
            point(2025, Some(80.0), Some(500.0)),
        ]
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("index should be defined");
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_normalize_against_base_year() {
        let indexed = normalize(&sample(), 2022).unwrap();

        assert_eq!(indexed[0].company, Some(100.0));
        assert_eq!(indexed[0].industry, Some(100.0));
        assert_eq!(indexed[1].company, Some(150.0));
        assert_eq!(indexed[1].industry, Some(150.0));
        assert_close(indexed[2].company, 120.0);
        assert_close(indexed[2].industry, 120.0);
        assert_close(indexed[3].company, 160.0);
        assert_close(indexed[3].industry, 250.0);
    }

    #[test]
    fn test_zero_base_gives_no_data() {
        let series = vec![
            point(2022, Some(0.0), Some(100.0)),
            point(2023, Some(10.0), Some(50.0)),
        ];
        let indexed = normalize(&series, 2022).unwrap();
        assert!(indexed.iter().all(|p| p.company.is_none()));
        assert_eq!(indexed[1].industry, Some(50.0));
    }

    #[test]
    fn test_missing_values_propagate() {
        let series = vec![
            point(2022, None, Some(100.0)),
            point(2023, Some(10.0), None),
        ];
        let indexed = normalize(&series, 2022).unwrap();
        assert_eq!(indexed[1].company, None);
        assert_eq!(indexed[1].industry, None);
        assert_eq!(indexed[0].industry, Some(100.0));
    }

    #[test]
    fn test_missing_base_year_fails() {
        let series = vec![point(2023, Some(1.0), Some(1.0))];
        assert!(matches!(
            normalize(&series, 2022),
            Err(PlastError::BaseYearNotFound(2022))
        ));
    }

    #[test]
    fn test_combine_fills_company_gaps_with_zero() {
        let company = vec![YearlyTotal {
            year: 2023,
            number_sold: 5,
        }];
        let industry = vec![
            YearlyTotal {
                year: 2023,
                number_sold: 50,
            },
            YearlyTotal {
                year: 2022,
                number_sold: 40,
            },
        ];
        let points = combine(&company, &industry);
        assert_eq!(points[0], point(2022, Some(0.0), Some(40.0)));
        assert_eq!(points[1], point(2023, Some(5.0), Some(50.0)));
    }
}
