//! Advisory Rules
//!
//! Fixed-order rule list over the feature record and predicted tier.
//! Each rule appends at most one suggestion; the result keeps the first
//! five in evaluation order. Definition order IS the ranking - there is
//! no priority sort.

use crate::logic::features::FeatureRecord;
use crate::logic::model::Tier;

/// Hard cap on returned suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// Strategic suggestions for one record, most relevant first.
pub fn suggestions(label: Tier, record: &FeatureRecord) -> Vec<&'static str> {
    let mut suggestions: Vec<&'static str> = Vec::new();

    if record.funding < 100_000.0 {
        suggestions.push("Consider seeking additional funding to scale operations");
    }

    // Team-size extremes are mutually exclusive.
    if record.team_size < 5.0 {
        suggestions.push("Growing your team could help accelerate development");
    } else if record.team_size > 50.0 && record.revenue < 50_000.0 {
        suggestions.push("Team size seems large relative to revenue - optimize costs");
    }

    if record.market_size < 10_000_000.0 {
        suggestions.push("Consider expanding to larger markets for better growth potential");
    }

    if record.revenue < 10_000.0 {
        suggestions.push("Focus on revenue generation and finding product-market fit");
    }

    // Growth-rate extremes are mutually exclusive.
    if record.growth_rate < 5.0 {
        suggestions.push("Implement aggressive growth strategies to improve momentum");
    } else if record.growth_rate > 30.0 {
        suggestions.push("Excellent growth! Ensure infrastructure scales with demand");
    }

    match label {
        Tier::High => {
            suggestions.push("Strong fundamentals! Focus on execution and scaling");
            suggestions.push("Consider strategic partnerships to accelerate market dominance");
        }
        Tier::Moderate => {
            suggestions.push("Solid foundation - identify key metrics to push to the next level");
            suggestions.push("Analyze competitors and find differentiation opportunities");
        }
        Tier::Low => {
            suggestions.push("Pivot consideration: reassess product-market fit");
            suggestions.push("Focus on lean operations and validated learning");
            suggestions.push("Seek mentorship and advisory support");
        }
    }

    if suggestions.is_empty() {
        suggestions.push("Keep iterating and focusing on customer needs!");
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struggling_startup_fills_all_five_slots() {
        // Every metric rule fires; the label block is truncated away.
        let record = FeatureRecord {
            funding: 50_000.0,
            team_size: 2.0,
            market_size: 5_000_000.0,
            revenue: 1_000.0,
            growth_rate: 0.0,
        };
        let result = suggestions(Tier::Low, &record);
        assert_eq!(result.len(), MAX_SUGGESTIONS);
        assert_eq!(result[0], "Consider seeking additional funding to scale operations");
        assert_eq!(result[1], "Growing your team could help accelerate development");
        assert_eq!(result[4], "Implement aggressive growth strategies to improve momentum");
    }

    #[test]
    fn test_healthy_startup_gets_only_label_block() {
        let record = FeatureRecord {
            funding: 2_000_000.0,
            team_size: 30.0,
            market_size: 200_000_000.0,
            revenue: 200_000.0,
            growth_rate: 20.0,
        };
        let result = suggestions(Tier::High, &record);
        assert_eq!(
            result,
            vec![
                "Strong fundamentals! Focus on execution and scaling",
                "Consider strategic partnerships to accelerate market dominance",
            ]
        );
    }

    #[test]
    fn test_team_rules_are_mutually_exclusive() {
        // Large team with weak revenue triggers the cost warning, not
        // the hiring nudge.
        let record = FeatureRecord {
            funding: 2_000_000.0,
            team_size: 60.0,
            market_size: 200_000_000.0,
            revenue: 20_000.0,
            growth_rate: 10.0,
        };
        let result = suggestions(Tier::Moderate, &record);
        assert!(result.contains(&"Team size seems large relative to revenue - optimize costs"));
        assert!(!result.contains(&"Growing your team could help accelerate development"));
    }

    #[test]
    fn test_runaway_growth_gets_scaling_warning() {
        let record = FeatureRecord {
            growth_rate: 45.0,
            ..FeatureRecord::default()
        };
        let result = suggestions(Tier::High, &record);
        assert!(result.contains(&"Excellent growth! Ensure infrastructure scales with demand"));
        assert!(!result.contains(&"Implement aggressive growth strategies to improve momentum"));
    }

    #[test]
    fn test_low_tier_block_has_three_entries() {
        let record = FeatureRecord {
            funding: 500_000.0,
            team_size: 10.0,
            market_size: 50_000_000.0,
            revenue: 25_000.0,
            growth_rate: 10.0,
        };
        let result = suggestions(Tier::Low, &record);
        assert_eq!(
            result,
            vec![
                "Pivot consideration: reassess product-market fit",
                "Focus on lean operations and validated learning",
                "Seek mentorship and advisory support",
            ]
        );
    }
}
