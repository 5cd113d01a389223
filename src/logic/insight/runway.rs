//! Runway Estimation
//!
//! Months until funds run out at the current net burn. Burn is modeled
//! from head count only: cost per employee times an overhead multiplier.

use serde::{Serialize, Serializer};

use crate::constants::{COST_PER_EMPLOYEE, OPERATIONAL_OVERHEAD};
use crate::logic::features::FeatureRecord;

// ============================================================================
// STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunwayStatus {
    /// Cash-flow positive, runway is not a constraint
    Excellent,
    /// More than 18 months
    Healthy,
    /// More than 12 months
    Adequate,
    /// More than 6 months
    Concerning,
    /// 6 months or less
    Critical,
}

impl RunwayStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RunwayStatus::Excellent => "Excellent",
            RunwayStatus::Healthy => "Healthy",
            RunwayStatus::Adequate => "Adequate",
            RunwayStatus::Concerning => "Concerning",
            RunwayStatus::Critical => "Critical",
        }
    }

    pub fn is_urgent(self) -> bool {
        matches!(self, RunwayStatus::Concerning | RunwayStatus::Critical)
    }
}

impl std::fmt::Display for RunwayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ESTIMATE
// ============================================================================

/// Either a month count or "no runway limit" for cash-flow-positive
/// companies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunwayEstimate {
    CashFlowPositive,
    /// Months remaining, rounded to 1 decimal
    Months(f64),
}

impl Serialize for RunwayEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RunwayEstimate::CashFlowPositive => {
                serializer.serialize_str("Indefinite (Cash Flow Positive)")
            }
            RunwayEstimate::Months(months) => serializer.serialize_f64(*months),
        }
    }
}

impl std::fmt::Display for RunwayEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunwayEstimate::CashFlowPositive => write!(f, "Indefinite (Cash Flow Positive)"),
            RunwayEstimate::Months(months) => write!(f, "{:.1} months", months),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunwayReport {
    #[serde(rename = "runway_months")]
    pub estimate: RunwayEstimate,
    pub status: RunwayStatus,
    pub monthly_burn: f64,
    pub monthly_net: f64,
}

// ============================================================================
// CALCULATION
// ============================================================================

pub fn calculate_runway(record: &FeatureRecord) -> RunwayReport {
    let monthly_burn = record.team_size * COST_PER_EMPLOYEE * OPERATIONAL_OVERHEAD;
    let monthly_net = record.revenue - monthly_burn;

    if monthly_net >= 0.0 {
        return RunwayReport {
            estimate: RunwayEstimate::CashFlowPositive,
            status: RunwayStatus::Excellent,
            monthly_burn,
            monthly_net,
        };
    }

    let months = record.funding / monthly_net.abs();
    let status = if months > 18.0 {
        RunwayStatus::Healthy
    } else if months > 12.0 {
        RunwayStatus::Adequate
    } else if months > 6.0 {
        RunwayStatus::Concerning
    } else {
        RunwayStatus::Critical
    };

    RunwayReport {
        estimate: RunwayEstimate::Months((months * 10.0).round() / 10.0),
        status,
        monthly_burn,
        monthly_net,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(funding: f64, team: f64, revenue: f64) -> FeatureRecord {
        FeatureRecord {
            funding,
            team_size: team,
            market_size: 0.0,
            revenue,
            growth_rate: 0.0,
        }
    }

    #[test]
    fn test_cash_flow_positive_is_excellent() {
        // 10 people -> burn 60k; 100k revenue nets +40k.
        let report = calculate_runway(&record(0.0, 10.0, 100_000.0));
        assert_eq!(report.monthly_burn, 60_000.0);
        assert_eq!(report.monthly_net, 40_000.0);
        assert_eq!(report.status, RunwayStatus::Excellent);
        assert_eq!(report.estimate, RunwayEstimate::CashFlowPositive);
    }

    #[test]
    fn test_two_month_runway_is_critical() {
        // Burn 60k with no revenue; 120k funding buys 2 months.
        let report = calculate_runway(&record(120_000.0, 10.0, 0.0));
        assert_eq!(report.monthly_net, -60_000.0);
        assert_eq!(report.estimate, RunwayEstimate::Months(2.0));
        assert_eq!(report.status, RunwayStatus::Critical);
        assert!(report.status.is_urgent());
    }

    #[test]
    fn test_status_bands() {
        // Burn 6k/month (1 person), no revenue.
        let healthy = calculate_runway(&record(120_000.0, 1.0, 0.0)); // 20 months
        let adequate = calculate_runway(&record(90_000.0, 1.0, 0.0)); // 15 months
        let concerning = calculate_runway(&record(60_000.0, 1.0, 0.0)); // 10 months
        assert_eq!(healthy.status, RunwayStatus::Healthy);
        assert_eq!(adequate.status, RunwayStatus::Adequate);
        assert_eq!(concerning.status, RunwayStatus::Concerning);
    }

    #[test]
    fn test_breakeven_counts_as_positive() {
        let report = calculate_runway(&record(0.0, 10.0, 60_000.0));
        assert_eq!(report.status, RunwayStatus::Excellent);
    }

    #[test]
    fn test_estimate_serializes_like_the_report_field() {
        let positive = serde_json::to_string(&RunwayEstimate::CashFlowPositive).unwrap();
        assert_eq!(positive, "\"Indefinite (Cash Flow Positive)\"");
        let months = serde_json::to_string(&RunwayEstimate::Months(2.5)).unwrap();
        assert_eq!(months, "2.5");
    }
}
