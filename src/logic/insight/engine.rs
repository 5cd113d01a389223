//! Analytics Engine
//!
//! Hand-authored business heuristics, independent of the classifier.
//! Input: FeatureRecord (+ label/score). Output: qualitative bands.
//! All functions are pure and deterministic.

use crate::logic::features::FeatureRecord;
use crate::logic::model::Tier;

use super::types::{
    Assessment, FundingStatus, GrowthStatus, InsightBundle, MarketStatus, RevenueStatus,
    RiskFactor, RiskKind, Strength, StrengthKind, TeamStatus,
};

// ============================================================================
// DIMENSION ANALYSES
// ============================================================================

/// Funding per employee: above $100k is comfortable, below $50k is thin.
pub fn funding_adequacy(record: &FeatureRecord) -> Assessment<FundingStatus> {
    let per_employee = record.funding / record.team_size.max(1.0);

    Assessment::of(if per_employee > 100_000.0 {
        FundingStatus::Strong
    } else if per_employee > 50_000.0 {
        FundingStatus::Adequate
    } else {
        FundingStatus::Concern
    })
}

/// Monthly revenue per employee.
pub fn team_efficiency(record: &FeatureRecord) -> Assessment<TeamStatus> {
    let per_employee = record.revenue / record.team_size.max(1.0);

    Assessment::of(if per_employee > 10_000.0 {
        TeamStatus::Excellent
    } else if per_employee > 5_000.0 {
        TeamStatus::Good
    } else {
        TeamStatus::NeedsImprovement
    })
}

/// Annualized revenue as a share of the addressable market. A small
/// share means headroom, not weakness.
pub fn market_opportunity(record: &FeatureRecord) -> Assessment<MarketStatus> {
    let annual_share = (record.revenue * 12.0) / record.market_size.max(1.0);

    Assessment::of(if annual_share < 0.001 {
        MarketStatus::HugeOpportunity
    } else if annual_share < 0.01 {
        MarketStatus::GoodOpportunity
    } else {
        MarketStatus::Limited
    })
}

pub fn revenue_health(record: &FeatureRecord) -> Assessment<RevenueStatus> {
    Assessment::of(if record.revenue > 100_000.0 {
        RevenueStatus::Strong
    } else if record.revenue > 10_000.0 {
        RevenueStatus::Growing
    } else {
        RevenueStatus::EarlyStage
    })
}

pub fn growth_momentum(record: &FeatureRecord) -> Assessment<GrowthStatus> {
    Assessment::of(if record.growth_rate > 20.0 {
        GrowthStatus::Exceptional
    } else if record.growth_rate > 10.0 {
        GrowthStatus::Strong
    } else if record.growth_rate > 5.0 {
        GrowthStatus::Moderate
    } else {
        GrowthStatus::Slow
    })
}

// ============================================================================
// RISKS & STRENGTHS
// ============================================================================

/// Every flag fires independently; any subset can be present.
pub fn risk_factors(record: &FeatureRecord) -> Vec<RiskFactor> {
    let mut risks = Vec::new();

    if record.funding < 50_000.0 {
        risks.push(RiskFactor::of(RiskKind::Underfunded));
    }
    if record.team_size < 3.0 {
        risks.push(RiskFactor::of(RiskKind::SmallTeam));
    }
    if record.revenue < 5_000.0 {
        risks.push(RiskFactor::of(RiskKind::LowRevenue));
    }
    if record.growth_rate < 0.0 {
        risks.push(RiskFactor::of(RiskKind::NegativeGrowth));
    }
    if record.market_size < 5_000_000.0 {
        risks.push(RiskFactor::of(RiskKind::SmallMarket));
    }

    risks
}

pub fn strengths(record: &FeatureRecord, success_score: f64) -> Vec<Strength> {
    let mut strengths = Vec::new();

    if record.funding > 1_000_000.0 {
        strengths.push(Strength::of(StrengthKind::WellFunded));
    }
    if record.team_size > 20.0 {
        strengths.push(Strength::of(StrengthKind::StrongTeam));
    }
    if record.revenue > 50_000.0 {
        strengths.push(Strength::of(StrengthKind::RevenueTraction));
    }
    if record.growth_rate > 15.0 {
        strengths.push(Strength::of(StrengthKind::HighGrowth));
    }
    if record.market_size > 100_000_000.0 {
        strengths.push(Strength::of(StrengthKind::LargeMarket));
    }
    if success_score > 70.0 {
        strengths.push(Strength::of(StrengthKind::StrongOverallScore));
    }

    strengths
}

// ============================================================================
// BUNDLE
// ============================================================================

/// Run every analysis over one record.
pub fn generate_insights(record: &FeatureRecord, label: Tier, success_score: f64) -> InsightBundle {
    log::debug!("Generating insights for {} (score {:.1})", label, success_score);

    InsightBundle {
        funding_adequacy: funding_adequacy(record),
        team_efficiency: team_efficiency(record),
        market_opportunity: market_opportunity(record),
        revenue_health: revenue_health(record),
        growth_momentum: growth_momentum(record),
        risk_factors: risk_factors(record),
        strengths: strengths(record, success_score),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(funding: f64, team: f64, market: f64, revenue: f64, growth: f64) -> FeatureRecord {
        FeatureRecord {
            funding,
            team_size: team,
            market_size: market,
            revenue,
            growth_rate: growth,
        }
    }

    #[test]
    fn test_funding_adequacy_bands() {
        // $150k, $80k and $30k per employee.
        let strong = funding_adequacy(&record(1_500_000.0, 10.0, 0.0, 0.0, 0.0));
        let adequate = funding_adequacy(&record(800_000.0, 10.0, 0.0, 0.0, 0.0));
        let concern = funding_adequacy(&record(300_000.0, 10.0, 0.0, 0.0, 0.0));
        assert_eq!(strong.status, FundingStatus::Strong);
        assert_eq!(adequate.status, FundingStatus::Adequate);
        assert_eq!(concern.status, FundingStatus::Concern);
        assert_eq!(strong.score, 85);
    }

    #[test]
    fn test_funding_adequacy_boundary_is_strict() {
        // Exactly $100k per employee falls in the middle band.
        let edge = funding_adequacy(&record(1_000_000.0, 10.0, 0.0, 0.0, 0.0));
        assert_eq!(edge.status, FundingStatus::Adequate);
    }

    #[test]
    fn test_team_efficiency_guards_zero_division() {
        // team_size below 1 clamps instead of dividing by zero.
        let assessment = team_efficiency(&record(0.0, 0.5, 0.0, 12_000.0, 0.0));
        assert_eq!(assessment.status, TeamStatus::Excellent);
    }

    #[test]
    fn test_market_opportunity_bands() {
        // 24k/yr over 50M = tiny share; 3.6M/yr over 50M = 7.2%.
        let huge = market_opportunity(&record(0.0, 1.0, 50_000_000.0, 2_000.0, 0.0));
        let limited = market_opportunity(&record(0.0, 1.0, 50_000_000.0, 300_000.0, 0.0));
        assert_eq!(huge.status, MarketStatus::HugeOpportunity);
        assert_eq!(limited.status, MarketStatus::Limited);
    }

    #[test]
    fn test_growth_momentum_bands() {
        assert_eq!(growth_momentum(&record(0.0, 1.0, 0.0, 0.0, 25.0)).status, GrowthStatus::Exceptional);
        assert_eq!(growth_momentum(&record(0.0, 1.0, 0.0, 0.0, 12.0)).status, GrowthStatus::Strong);
        assert_eq!(growth_momentum(&record(0.0, 1.0, 0.0, 0.0, 7.0)).status, GrowthStatus::Moderate);
        assert_eq!(growth_momentum(&record(0.0, 1.0, 0.0, 0.0, 5.0)).status, GrowthStatus::Slow);
    }

    #[test]
    fn test_negative_growth_risk_boundary() {
        let firing = risk_factors(&record(100_000.0, 5.0, 10_000_000.0, 10_000.0, -1.0));
        assert!(firing.iter().any(|r| r.factor == RiskKind::NegativeGrowth));

        let quiet = risk_factors(&record(100_000.0, 5.0, 10_000_000.0, 10_000.0, 0.0));
        assert!(!quiet.iter().any(|r| r.factor == RiskKind::NegativeGrowth));
    }

    #[test]
    fn test_all_risks_fire_together() {
        let risks = risk_factors(&record(10_000.0, 1.0, 1_000_000.0, 0.0, -5.0));
        assert_eq!(risks.len(), 5);
    }

    #[test]
    fn test_strengths_any_subset() {
        let none = strengths(&record(100_000.0, 5.0, 10_000_000.0, 10_000.0, 5.0), 50.0);
        assert!(none.is_empty());

        let all = strengths(&record(2_000_000.0, 30.0, 200_000_000.0, 80_000.0, 20.0), 80.0);
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn test_bundle_collects_every_dimension() {
        let bundle = generate_insights(&FeatureRecord::default(), Tier::Moderate, 55.0);
        assert_eq!(bundle.revenue_health.status, RevenueStatus::Growing);
        assert_eq!(bundle.growth_momentum.status, GrowthStatus::Strong);
        assert!(bundle.risk_factors.is_empty());
    }
}
