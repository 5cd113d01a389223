//! Input Validation Boundary
//!
//! Rejects out-of-range metrics BEFORE they reach the prediction
//! service. The engines downstream never re-validate. All violations
//! are collected and surfaced as a single concatenated message.

use super::record::FeatureRecord;

// ============================================================================
// ACCEPTED RANGES
// ============================================================================

/// Maximum accepted funding (USD)
pub const MAX_FUNDING: f64 = 1e10;

/// Maximum accepted team size
pub const MAX_TEAM_SIZE: f64 = 10_000.0;

/// Maximum accepted market size (USD)
pub const MAX_MARKET_SIZE: f64 = 1e12;

/// Maximum accepted monthly revenue (USD)
pub const MAX_REVENUE: f64 = 1e9;

/// Accepted growth rate range (%)
pub const MIN_GROWTH_RATE: f64 = -100.0;
pub const MAX_GROWTH_RATE: f64 = 1_000.0;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// One or more metrics outside the accepted ranges.
///
/// Display joins all violations with "; " so the caller can show a
/// single message.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub violations: Vec<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.violations.join("; "))
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate a record against the accepted ranges.
pub fn validate(record: &FeatureRecord) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    if record.funding < 0.0 {
        violations.push("Funding cannot be negative".to_string());
    }
    if record.funding > MAX_FUNDING {
        violations.push("Funding amount seems unrealistic (max: $10B)".to_string());
    }

    if record.team_size < 1.0 {
        violations.push("Team size must be at least 1".to_string());
    }
    if record.team_size > MAX_TEAM_SIZE {
        violations.push("Team size seems unrealistic (max: 10,000)".to_string());
    }

    if record.market_size < 0.0 {
        violations.push("Market size cannot be negative".to_string());
    }
    if record.market_size > MAX_MARKET_SIZE {
        violations.push("Market size seems unrealistic (max: $1T)".to_string());
    }

    if record.revenue < 0.0 {
        violations.push("Revenue cannot be negative".to_string());
    }
    if record.revenue > MAX_REVENUE {
        violations.push("Monthly revenue seems unrealistic (max: $1B/month)".to_string());
    }

    if record.growth_rate < MIN_GROWTH_RATE {
        violations.push("Growth rate cannot be less than -100%".to_string());
    }
    if record.growth_rate > MAX_GROWTH_RATE {
        violations.push("Growth rate seems unrealistic (max: 1000%)".to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

// ============================================================================
// TESTS
// ============================================================================
