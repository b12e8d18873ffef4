use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;

/// One consumer-price-index sample.
///
/// `period` is an opaque chronological key owned by the upstream
/// aggregation. Records arrive already ordered and are never reordered or
/// recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub period: String,
    pub total: f64,
}

impl PriceRecord {
    #[must_use]
    pub fn new(period: impl Into<String>, total: f64) -> Self {
        Self {
            period: period.into(),
            total,
        }
    }
}

/// One provincial GDP aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdpRecord {
    pub province: String,
    pub total: f64,
}

impl GdpRecord {
    #[must_use]
    pub fn new(province: impl Into<String>, total: f64) -> Self {
        Self {
            province: province.into(),
            total,
        }
    }
}

/// Parses the upstream price collection from its JSON wire shape.
///
/// A record with a missing or mistyped field fails deserialization;
/// nothing is substituted with defaults.
pub fn price_records_from_json(payload: &str) -> DashboardResult<Vec<PriceRecord>> {
    Ok(serde_json::from_str(payload)?)
}

/// Parses the upstream GDP collection from its JSON wire shape.
pub fn gdp_records_from_json(payload: &str) -> DashboardResult<Vec<GdpRecord>> {
    Ok(serde_json::from_str(payload)?)
}
