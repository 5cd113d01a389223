//! Insight Module - Derived Analytics
//!
//! Pure heuristic layer on top of the feature record: status bands per
//! dimension, risk flags, strengths, runway, peer comparison and tier
//! benchmarks. Everything here is independent of the classifier and
//! encodes hand-authored business judgment, not learned weights.
//!
//! ## Structure
//! - `types`: status enums, risk/strength records, the bundle
//! - `engine`: per-dimension analyses + bundle assembly
//! - `runway`: burn-rate runway estimation
//! - `comparison`: ratios against a typical startup
//! - `benchmark`: static per-tier reference profiles

pub mod benchmark;
pub mod comparison;
pub mod engine;
pub mod runway;
pub mod types;

// Re-export main types for convenience
pub use benchmark::{benchmark_for, benchmark_for_label, BenchmarkProfile};
pub use comparison::{compare_to_typical, ComparisonStatus, MetricComparison, TYPICAL_PROFILE};
pub use engine::generate_insights;
pub use runway::{calculate_runway, RunwayEstimate, RunwayReport, RunwayStatus};
pub use types::{
    Assessment, FundingStatus, GrowthStatus, InsightBundle, MarketStatus, RevenueStatus,
    RiskFactor, RiskKind, Severity, Strength, StrengthKind, TeamStatus,
};
