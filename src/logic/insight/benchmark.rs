//! Tier Benchmarks
//!
//! Static per-tier reference profiles on a 0-100 scale, for radar-style
//! comparison against a predicted startup. Defined at process start,
//! never mutated.

use serde::Serialize;

use crate::logic::model::Tier;

/// Normalized reference values for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkProfile {
    pub funding: u8,
    pub team_size: u8,
    pub market_size: u8,
    pub revenue: u8,
    pub growth_rate: u8,
}

impl BenchmarkProfile {
    /// Values in layout order
    pub fn as_array(&self) -> [u8; 5] {
        [
            self.funding,
            self.team_size,
            self.market_size,
            self.revenue,
            self.growth_rate,
        ]
    }
}

/// Reference profile for a tier.
pub const fn benchmark_for(tier: Tier) -> BenchmarkProfile {
    match tier {
        Tier::High => BenchmarkProfile {
            funding: 80,
            team_size: 75,
            market_size: 85,
            revenue: 70,
            growth_rate: 80,
        },
        Tier::Moderate => BenchmarkProfile {
            funding: 50,
            team_size: 45,
            market_size: 55,
            revenue: 50,
            growth_rate: 50,
        },
        Tier::Low => BenchmarkProfile {
            funding: 25,
            team_size: 20,
            market_size: 30,
            revenue: 25,
            growth_rate: 20,
        },
    }
}

/// Lookup by free-form label. Unrecognized labels fall back to the
/// Moderate profile - intentional graceful degradation, not an error.
pub fn benchmark_for_label(label: &str) -> BenchmarkProfile {
    benchmark_for(Tier::parse(label).unwrap_or(Tier::Moderate))
}

// ============================================================================
// TESTS
// ============================================================================
