//! Model Types
//!
//! Core types for classification output. No logic here - only data
//! structures and their display metadata.

use serde::{Deserialize, Serialize};

// ============================================================================
// SUCCESS TIER
// ============================================================================

/// The three classification outcomes.
///
/// Class indices (0/1/2) are the label encoding used by the synthetic
/// dataset and the forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Low Potential")]
    Low,
    #[serde(rename = "Moderate Potential")]
    Moderate,
    #[serde(rename = "High Potential")]
    High,
}

impl Tier {
    /// Number of classes
    pub const COUNT: usize = 3;

    /// All tiers in class-index order
    pub const ALL: [Tier; Tier::COUNT] = [Tier::Low, Tier::Moderate, Tier::High];

    /// Class index used for training labels
    pub fn class_index(self) -> usize {
        match self {
            Tier::Low => 0,
            Tier::Moderate => 1,
            Tier::High => 2,
        }
    }

    /// Tier for a class index; out-of-range indices clamp to High
    pub fn from_class_index(index: usize) -> Self {
        match index {
            0 => Tier::Low,
            1 => Tier::Moderate,
            _ => Tier::High,
        }
    }

    /// User-facing label
    pub fn label(self) -> &'static str {
        match self {
            Tier::Low => "Low Potential",
            Tier::Moderate => "Moderate Potential",
            Tier::High => "High Potential",
        }
    }

    /// Midpoint weight for the blended success score
    pub fn score_weight(self) -> f64 {
        match self {
            Tier::Low => 0.0,
            Tier::Moderate => 50.0,
            Tier::High => 100.0,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Tier::Low => "#dc3545",      // Red
            Tier::Moderate => "#ffc107", // Yellow
            Tier::High => "#28a745",     // Green
        }
    }

    /// Parse a user-facing label. Returns None on anything unrecognized;
    /// the benchmark lookup layers its documented Moderate default on top.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Low Potential" => Some(Tier::Low),
            "Moderate Potential" => Some(Tier::Moderate),
            "High Potential" => Some(Tier::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// PROBABILITIES
// ============================================================================

/// Per-tier probabilities as percentages (each 0-100, summing to 100
/// within rounding tolerance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierProbabilities {
    pub low: f64,
    pub moderate: f64,
    pub high: f64,
}

impl TierProbabilities {
    /// Values in class-index order
    pub fn as_array(&self) -> [f64; Tier::COUNT] {
        [self.low, self.moderate, self.high]
    }

    pub fn sum(&self) -> f64 {
        self.low + self.moderate + self.high
    }

    /// Tier with the highest probability; ties break toward the lowest
    /// class index.
    pub fn argmax(&self) -> Tier {
        let values = self.as_array();
        let mut best = 0;
        for (i, &value) in values.iter().enumerate() {
            if value > values[best] {
                best = i;
            }
        }
        Tier::from_class_index(best)
    }
}

// ============================================================================
// PREDICTION
// ============================================================================

/// Result of one prediction call. All fields rounded to 2 decimals for
/// external consumption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Probability-weighted blend of tier midpoints (0-100)
    pub success_score: f64,
    /// Argmax class
    #[serde(rename = "prediction_label")]
    pub label: Tier,
    /// Max class probability as a percentage
    pub confidence: f64,
    pub probabilities: TierProbabilities,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Fatal training-time failures. Prediction itself has no error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A feature column had zero variance at scaler fit; scaling would
    /// divide by zero.
    DegenerateFeature { feature: &'static str },
    /// Sample budget too small to cover the three tiers.
    EmptyTrainingSet,
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::DegenerateFeature { feature } => {
                write!(f, "feature '{}' has zero variance in the training set", feature)
            }
            ModelError::EmptyTrainingSet => {
                write!(f, "sample budget too small to produce training data")
            }
        }
    }
}

impl std::error::Error for ModelError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_index_round_trip() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_class_index(tier.class_index()), tier);
        }
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(Tier::parse("High Potential"), Some(Tier::High));
        assert_eq!(Tier::parse("unknown"), None);
    }

    #[test]
    fn test_argmax_tie_breaks_low() {
        let probabilities = TierProbabilities {
            low: 40.0,
            moderate: 40.0,
            high: 20.0,
        };
        assert_eq!(probabilities.argmax(), Tier::Low);
    }

    #[test]
    fn test_label_serializes_as_display_string() {
        let json = serde_json::to_string(&Tier::Moderate).unwrap();
        assert_eq!(json, "\"Moderate Potential\"");
    }
}
