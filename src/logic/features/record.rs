//! Feature Record - the five business metrics for one startup
//!
//! Immutable input to every engine. Created by the caller (terminal
//! session or test), never mutated by the core.

use serde::{Deserialize, Serialize};

use super::layout::{feature_name, FEATURE_COUNT};

/// One startup's metrics, in business units (USD, head count, percent).
///
/// Field order matches [`FEATURE_LAYOUT`](super::layout::FEATURE_LAYOUT);
/// `to_vector` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Total funding raised (USD)
    pub funding: f64,
    /// Head count
    pub team_size: f64,
    /// Total addressable market (USD)
    pub market_size: f64,
    /// Monthly revenue (USD)
    pub revenue: f64,
    /// Month-over-month growth (%)
    pub growth_rate: f64,
}

impl FeatureRecord {
    /// Build the model input vector in the fixed feature order.
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.funding,
            self.team_size,
            self.market_size,
            self.revenue,
            self.growth_rate,
        ]
    }

    /// Get a metric by layout index.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.to_vector().get(index).copied()
    }

    /// Get a metric by layout name.
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// Iterate (name, value) pairs in layout order.
    pub fn named_values(&self) -> impl Iterator<Item = (&'static str, f64)> {
        self.to_vector()
            .into_iter()
            .enumerate()
            .map(|(i, v)| (feature_name(i).unwrap_or("unknown"), v))
    }
}

impl Default for FeatureRecord {
    /// The documented default session input.
    fn default() -> Self {
        Self {
            funding: 500_000.0,
            team_size: 10.0,
            market_size: 50_000_000.0,
            revenue: 25_000.0,
            growth_rate: 15.0,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
