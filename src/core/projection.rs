//! Pure label/value projections over the indicator record collections.
//!
//! The functions are deterministic and side-effect free so adapters and
//! tests can consume the exact same label/value output.

use crate::core::types::{GdpRecord, PriceRecord};

/// Period labels of a price series, in original order.
#[must_use]
pub fn price_periods(records: &[PriceRecord]) -> Vec<String> {
    records.iter().map(|record| record.period.clone()).collect()
}

/// Index values of a price series, index-aligned with `price_periods`.
#[must_use]
pub fn price_totals(records: &[PriceRecord]) -> Vec<f64> {
    records.iter().map(|record| record.total).collect()
}

/// Province labels of a GDP breakdown, in original order.
#[must_use]
pub fn gdp_provinces(records: &[GdpRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.province.clone())
        .collect()
}

/// Aggregate values of a GDP breakdown, index-aligned with `gdp_provinces`.
#[must_use]
pub fn gdp_totals(records: &[GdpRecord]) -> Vec<f64> {
    records.iter().map(|record| record.total).collect()
}
