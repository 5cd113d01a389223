//! Peer Comparison
//!
//! Ratios against a fixed "typical startup" reference profile (median
//! values), banded into five statuses.

use serde::Serialize;

use crate::logic::features::{feature_display_name, FeatureRecord, FEATURE_COUNT};

/// Median metrics of a typical startup.
pub const TYPICAL_PROFILE: FeatureRecord = FeatureRecord {
    funding: 250_000.0,
    team_size: 8.0,
    market_size: 25_000_000.0,
    revenue: 15_000.0,
    growth_rate: 10.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonStatus {
    #[serde(rename = "Well Above Average")]
    WellAboveAverage,
    #[serde(rename = "Above Average")]
    AboveAverage,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
    #[serde(rename = "Well Below Average")]
    WellBelowAverage,
}

impl ComparisonStatus {
    /// Band for a value/typical ratio. Exactly 2x typical counts as
    /// well above average.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 2.0 {
            ComparisonStatus::WellAboveAverage
        } else if ratio > 1.2 {
            ComparisonStatus::AboveAverage
        } else if ratio > 0.8 {
            ComparisonStatus::Average
        } else if ratio > 0.5 {
            ComparisonStatus::BelowAverage
        } else {
            ComparisonStatus::WellBelowAverage
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonStatus::WellAboveAverage => "Well Above Average",
            ComparisonStatus::AboveAverage => "Above Average",
            ComparisonStatus::Average => "Average",
            ComparisonStatus::BelowAverage => "Below Average",
            ComparisonStatus::WellBelowAverage => "Well Below Average",
        }
    }
}

/// One metric measured against the reference profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricComparison {
    pub metric: &'static str,
    /// value / typical, rounded to 2 decimals
    pub ratio: f64,
    pub status: ComparisonStatus,
    pub typical: f64,
}

/// Compare every metric, in layout order.
pub fn compare_to_typical(record: &FeatureRecord) -> Vec<MetricComparison> {
    let values = record.to_vector();
    let typical = TYPICAL_PROFILE.to_vector();

    (0..FEATURE_COUNT)
        .map(|i| {
            let ratio = values[i] / typical[i].max(1.0);
            let ratio = (ratio * 100.0).round() / 100.0;
            MetricComparison {
                metric: feature_display_name(i).unwrap_or("unknown"),
                ratio,
                status: ComparisonStatus::from_ratio(ratio),
                typical: typical[i],
            }
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
