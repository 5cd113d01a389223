//! Insight Types
//!
//! Closed status enumerations for the qualitative bands, each carrying
//! its fixed score, message and display metadata. No logic here - the
//! band cutoffs live in `engine`.

use serde::Serialize;

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity attached to a risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::Medium => "#f59e0b",   // Yellow
            Severity::High => "#f97316",     // Orange
            Severity::Critical => "#ef4444", // Red
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DIMENSION ASSESSMENTS
// ============================================================================

/// A status band plus its fixed message and 0-100 contribution score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment<S> {
    pub status: S,
    pub message: &'static str,
    pub score: u8,
}

/// Implemented by every per-dimension status enum; keeps message and
/// score attached to the band instead of scattered through the engine.
pub trait StatusBand: Copy {
    fn message(self) -> &'static str;
    fn score(self) -> u8;
}

impl<S: StatusBand> Assessment<S> {
    pub fn of(status: S) -> Self {
        Self {
            status,
            message: status.message(),
            score: status.score(),
        }
    }
}

/// Funding relative to team size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FundingStatus {
    Strong,
    Adequate,
    Concern,
}

impl FundingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FundingStatus::Strong => "Strong",
            FundingStatus::Adequate => "Adequate",
            FundingStatus::Concern => "Concern",
        }
    }
}

impl StatusBand for FundingStatus {
    fn message(self) -> &'static str {
        match self {
            FundingStatus::Strong => "Funding level is healthy relative to team size",
            FundingStatus::Adequate => "Funding is reasonable but could be improved",
            FundingStatus::Concern => "Funding may be stretched thin for team size",
        }
    }

    fn score(self) -> u8 {
        match self {
            FundingStatus::Strong => 85,
            FundingStatus::Adequate => 60,
            FundingStatus::Concern => 35,
        }
    }
}

/// Revenue per employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TeamStatus {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl TeamStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TeamStatus::Excellent => "Excellent",
            TeamStatus::Good => "Good",
            TeamStatus::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl StatusBand for TeamStatus {
    fn message(self) -> &'static str {
        match self {
            TeamStatus::Excellent => "High revenue per employee indicates strong efficiency",
            TeamStatus::Good => "Team efficiency is solid",
            TeamStatus::NeedsImprovement => "Focus on improving revenue per team member",
        }
    }

    fn score(self) -> u8 {
        match self {
            TeamStatus::Excellent => 90,
            TeamStatus::Good => 70,
            TeamStatus::NeedsImprovement => 40,
        }
    }
}

/// Annualized revenue against the addressable market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketStatus {
    #[serde(rename = "Huge Opportunity")]
    HugeOpportunity,
    #[serde(rename = "Good Opportunity")]
    GoodOpportunity,
    Limited,
}

impl MarketStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MarketStatus::HugeOpportunity => "Huge Opportunity",
            MarketStatus::GoodOpportunity => "Good Opportunity",
            MarketStatus::Limited => "Limited",
        }
    }
}

impl StatusBand for MarketStatus {
    fn message(self) -> &'static str {
        match self {
            MarketStatus::HugeOpportunity => "Large untapped market potential",
            MarketStatus::GoodOpportunity => "Significant room for market expansion",
            MarketStatus::Limited => "Consider expanding to new markets",
        }
    }

    fn score(self) -> u8 {
        match self {
            MarketStatus::HugeOpportunity => 95,
            MarketStatus::GoodOpportunity => 75,
            MarketStatus::Limited => 45,
        }
    }
}

/// Absolute monthly revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RevenueStatus {
    Strong,
    Growing,
    #[serde(rename = "Early Stage")]
    EarlyStage,
}

impl RevenueStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RevenueStatus::Strong => "Strong",
            RevenueStatus::Growing => "Growing",
            RevenueStatus::EarlyStage => "Early Stage",
        }
    }
}

impl StatusBand for RevenueStatus {
    fn message(self) -> &'static str {
        match self {
            RevenueStatus::Strong => "Revenue demonstrates strong product-market fit",
            RevenueStatus::Growing => "Revenue shows promising early traction",
            RevenueStatus::EarlyStage => "Focus on achieving product-market fit",
        }
    }

    fn score(self) -> u8 {
        match self {
            RevenueStatus::Strong => 85,
            RevenueStatus::Growing => 65,
            RevenueStatus::EarlyStage => 35,
        }
    }
}

/// Month-over-month growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrowthStatus {
    Exceptional,
    Strong,
    Moderate,
    Slow,
}

impl GrowthStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GrowthStatus::Exceptional => "Exceptional",
            GrowthStatus::Strong => "Strong",
            GrowthStatus::Moderate => "Moderate",
            GrowthStatus::Slow => "Slow",
        }
    }
}

impl StatusBand for GrowthStatus {
    fn message(self) -> &'static str {
        match self {
            GrowthStatus::Exceptional => "Outstanding growth momentum",
            GrowthStatus::Strong => "Solid growth trajectory",
            GrowthStatus::Moderate => "Steady growth, room for acceleration",
            GrowthStatus::Slow => "Growth needs significant improvement",
        }
    }

    fn score(self) -> u8 {
        match self {
            GrowthStatus::Exceptional => 95,
            GrowthStatus::Strong => 75,
            GrowthStatus::Moderate => 55,
            GrowthStatus::Slow => 30,
        }
    }
}

// ============================================================================
// RISK FACTORS
// ============================================================================

/// The closed set of risk flags. Severity and description are fixed per
/// flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskKind {
    Underfunded,
    #[serde(rename = "Small Team")]
    SmallTeam,
    #[serde(rename = "Low Revenue")]
    LowRevenue,
    #[serde(rename = "Negative Growth")]
    NegativeGrowth,
    #[serde(rename = "Small Market")]
    SmallMarket,
}

impl RiskKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskKind::Underfunded => "Underfunded",
            RiskKind::SmallTeam => "Small Team",
            RiskKind::LowRevenue => "Low Revenue",
            RiskKind::NegativeGrowth => "Negative Growth",
            RiskKind::SmallMarket => "Small Market",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            RiskKind::Underfunded => Severity::High,
            RiskKind::SmallTeam => Severity::Medium,
            RiskKind::LowRevenue => Severity::High,
            RiskKind::NegativeGrowth => Severity::Critical,
            RiskKind::SmallMarket => Severity::Medium,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskKind::Underfunded => "Insufficient funding may limit growth",
            RiskKind::SmallTeam => "Limited team may slow execution",
            RiskKind::LowRevenue => "Need to establish revenue stream",
            RiskKind::NegativeGrowth => "Declining metrics require immediate action",
            RiskKind::SmallMarket => "Limited market size may cap growth potential",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskFactor {
    pub factor: RiskKind,
    pub severity: Severity,
    pub description: &'static str,
}

impl RiskFactor {
    pub fn of(kind: RiskKind) -> Self {
        Self {
            factor: kind,
            severity: kind.severity(),
            description: kind.description(),
        }
    }
}

// ============================================================================
// STRENGTHS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthKind {
    #[serde(rename = "Well-Funded")]
    WellFunded,
    #[serde(rename = "Strong Team")]
    StrongTeam,
    #[serde(rename = "Revenue Traction")]
    RevenueTraction,
    #[serde(rename = "High Growth")]
    HighGrowth,
    #[serde(rename = "Large Market")]
    LargeMarket,
    #[serde(rename = "Strong Overall Score")]
    StrongOverallScore,
}

impl StrengthKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthKind::WellFunded => "Well-Funded",
            StrengthKind::StrongTeam => "Strong Team",
            StrengthKind::RevenueTraction => "Revenue Traction",
            StrengthKind::HighGrowth => "High Growth",
            StrengthKind::LargeMarket => "Large Market",
            StrengthKind::StrongOverallScore => "Strong Overall Score",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StrengthKind::WellFunded => "Strong financial backing for growth",
            StrengthKind::StrongTeam => "Substantial team to execute on vision",
            StrengthKind::RevenueTraction => "Demonstrated ability to generate revenue",
            StrengthKind::HighGrowth => "Strong momentum and market validation",
            StrengthKind::LargeMarket => "Significant opportunity for expansion",
            StrengthKind::StrongOverallScore => "Well-balanced metrics across all dimensions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strength {
    pub factor: StrengthKind,
    pub description: &'static str,
}

impl Strength {
    pub fn of(kind: StrengthKind) -> Self {
        Self {
            factor: kind,
            description: kind.description(),
        }
    }
}

// ============================================================================
// BUNDLE
// ============================================================================

/// Everything the analytics engine derives for one record. Built fresh
/// per request, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct InsightBundle {
    pub funding_adequacy: Assessment<FundingStatus>,
    pub team_efficiency: Assessment<TeamStatus>,
    pub market_opportunity: Assessment<MarketStatus>,
    pub revenue_health: Assessment<RevenueStatus>,
    pub growth_momentum: Assessment<GrowthStatus>,
    pub risk_factors: Vec<RiskFactor>,
    pub strengths: Vec<Strength>,
}

// ============================================================================
// TESTS
// ============================================================================
