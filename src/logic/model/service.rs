//! Prediction Service
//!
//! Owns the fitted scaler + forest pair and turns a feature record into
//! a prediction. Training is an explicit step; the fitted state is
//! never mutated afterwards, so inference is safe to share.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_SAMPLES, DEFAULT_SEED, DEFAULT_TREES};
use crate::logic::dataset;
use crate::logic::features::{FeatureRecord, FEATURE_COUNT, FEATURE_DISPLAY_NAMES};

use super::forest::{ForestClassifier, ForestConfig};
use super::scaler::StandardScaler;
use super::types::{ModelError, Prediction, Tier, TierProbabilities};

// ============================================================================
// CONFIG
// ============================================================================

/// Training knobs, all seeded and explicit so tests can reproduce any
/// model exactly.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrainingConfig {
    pub seed: u64,
    /// Synthetic sample budget, split evenly across the three tiers
    pub samples: usize,
    pub trees: usize,
    pub max_depth: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            samples: DEFAULT_SAMPLES,
            trees: DEFAULT_TREES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

// ============================================================================
// STATUS
// ============================================================================

/// Snapshot of the fitted model for logging and the status line.
#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
    pub trees: usize,
    pub max_depth: usize,
    pub seed: u64,
    pub samples: usize,
    pub trained_at: DateTime<Utc>,
    pub prediction_count: u64,
}

// ============================================================================
// SERVICE
// ============================================================================

/// Fitted scaler + forest. Construct via [`SuccessModel::train`].
#[derive(Debug)]
pub struct SuccessModel {
    scaler: StandardScaler,
    forest: ForestClassifier,
    config: TrainingConfig,
    trained_at: DateTime<Utc>,
    predictions: AtomicU64,
}

impl SuccessModel {
    /// Generate the synthetic training set, fit the scaler, fit the
    /// forest. Fatal on a degenerate training set.
    pub fn train(config: TrainingConfig) -> Result<Self, ModelError> {
        let started = std::time::Instant::now();

        let set = dataset::generate(config.seed, config.samples);
        if set.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        let scaler = StandardScaler::fit(&set.features)?;
        let scaled = scaler.transform_matrix(&set.features);
        let forest = ForestClassifier::fit(
            &scaled,
            &set.labels,
            &ForestConfig {
                trees: config.trees,
                max_depth: config.max_depth,
                seed: config.seed,
            },
        );

        log::info!(
            "Trained {} trees on {} samples in {:?}",
            forest.tree_count(),
            set.len(),
            started.elapsed()
        );

        Ok(Self {
            scaler,
            forest,
            config,
            trained_at: Utc::now(),
            predictions: AtomicU64::new(0),
        })
    }

    /// Scale, classify, blend the score. Assumes the record already
    /// passed the validation boundary.
    pub fn predict(&self, record: &FeatureRecord) -> Prediction {
        let scaled = self.scaler.transform(&record.to_vector());
        let proba = self.forest.predict_proba(&scaled);

        // Blend of tier midpoints: 0 * low + 50 * moderate + 100 * high.
        let success_score = Tier::ALL
            .iter()
            .map(|tier| proba[tier.class_index()] * tier.score_weight())
            .sum::<f64>();

        let mut best = 0;
        for (i, &p) in proba.iter().enumerate() {
            if p > proba[best] {
                best = i;
            }
        }
        let label = Tier::from_class_index(best);
        let confidence = proba[best] * 100.0;

        self.predictions.fetch_add(1, Ordering::Relaxed);
        log::debug!(
            "Prediction: {} (score {:.1}, confidence {:.1})",
            label,
            success_score,
            confidence
        );

        Prediction {
            success_score: round2(success_score),
            label,
            confidence: round2(confidence),
            probabilities: TierProbabilities {
                low: round2(proba[0] * 100.0),
                moderate: round2(proba[1] * 100.0),
                high: round2(proba[2] * 100.0),
            },
        }
    }

    /// Impurity-based importances as percentages over the five named
    /// features, summing to 100. Falls back to an equal 20% weighting
    /// when the forest found no usable split.
    pub fn feature_importance(&self) -> Vec<(&'static str, f64)> {
        let raw = self.forest.feature_importances();
        let total: f64 = raw.iter().sum();

        if total <= 0.0 {
            return FEATURE_DISPLAY_NAMES
                .iter()
                .map(|&name| (name, 100.0 / FEATURE_COUNT as f64))
                .collect();
        }

        FEATURE_DISPLAY_NAMES
            .iter()
            .zip(raw.iter())
            .map(|(&name, &value)| (name, value / total * 100.0))
            .collect()
    }

    pub fn status(&self) -> ModelStatus {
        ModelStatus {
            trees: self.config.trees,
            max_depth: self.config.max_depth,
            seed: self.config.seed,
            samples: self.config.samples,
            trained_at: self.trained_at,
            prediction_count: self.predictions.load(Ordering::Relaxed),
        }
    }
}

// ============================================================================
// SHARED HANDLE
// ============================================================================

static SHARED: OnceCell<SuccessModel> = OnceCell::new();

/// Process-wide model, trained with the default config unless the
/// PREDICTOR_SEED / PREDICTOR_TREES environment overrides are set.
/// First caller pays the training cost; the init is idempotent and
/// later reads are lock-free.
pub fn shared() -> Result<&'static SuccessModel, ModelError> {
    SHARED.get_or_try_init(|| {
        log::info!("Training shared model (first use)");
        SuccessModel::train(TrainingConfig {
            seed: crate::constants::get_training_seed(),
            trees: crate::constants::get_tree_count(),
            ..Default::default()
        })
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Smaller than the default config so the suite stays fast; the
    /// tier geometry is identical.
    fn test_model() -> &'static SuccessModel {
        static MODEL: OnceCell<SuccessModel> = OnceCell::new();
        MODEL.get_or_init(|| {
            SuccessModel::train(TrainingConfig {
                samples: 300,
                trees: 30,
                ..Default::default()
            })
            .unwrap()
        })
    }

    fn sample_records() -> Vec<FeatureRecord> {
        vec![
            FeatureRecord::default(),
            FeatureRecord {
                funding: 55_000.0,
                team_size: 3.0,
                market_size: 5_500_000.0,
                revenue: 5_000.0,
                growth_rate: 0.0,
            },
            FeatureRecord {
                funding: 5_000_000.0,
                team_size: 60.0,
                market_size: 275_000_000.0,
                revenue: 550_000.0,
                growth_rate: 32.0,
            },
            FeatureRecord {
                funding: 0.0,
                team_size: 1.0,
                market_size: 0.0,
                revenue: 0.0,
                growth_rate: -50.0,
            },
        ]
    }

    #[test]
    fn test_probabilities_are_percentages_summing_to_100() {
        let model = test_model();
        for record in sample_records() {
            let prediction = model.predict(&record);
            let p = prediction.probabilities;
            for value in p.as_array() {
                assert!((0.0..=100.0).contains(&value), "{:?}", p);
            }
            assert!((p.sum() - 100.0).abs() < 0.1, "sum {}", p.sum());
        }
    }

    #[test]
    fn test_score_reconstructible_from_probabilities() {
        let model = test_model();
        for record in sample_records() {
            let prediction = model.predict(&record);
            let expected =
                0.5 * prediction.probabilities.moderate + 1.0 * prediction.probabilities.high;
            assert!(
                (prediction.success_score - expected).abs() < 0.05,
                "score {} vs reconstructed {}",
                prediction.success_score,
                expected
            );
            assert!((0.0..=100.0).contains(&prediction.success_score));
        }
    }

    #[test]
    fn test_label_is_argmax_of_probabilities() {
        let model = test_model();
        for record in sample_records() {
            let prediction = model.predict(&record);
            assert_eq!(prediction.label, prediction.probabilities.argmax());
        }
    }

    #[test]
    fn test_prediction_is_idempotent() {
        let model = test_model();
        let record = FeatureRecord::default();
        assert_eq!(model.predict(&record), model.predict(&record));
    }

    #[test]
    fn test_default_input_lands_in_upper_tiers() {
        let model = test_model();
        let prediction = model.predict(&FeatureRecord::default());
        assert!(
            matches!(prediction.label, Tier::Moderate | Tier::High),
            "unexpected label {:?}",
            prediction.label
        );
        assert!((0.0..=100.0).contains(&prediction.success_score));
    }

    #[test]
    fn test_importance_percentages_sum_to_100() {
        let model = test_model();
        let importance = model.feature_importance();
        assert_eq!(importance.len(), FEATURE_COUNT);
        let total: f64 = importance.iter().map(|(_, pct)| pct).sum();
        assert!((total - 100.0).abs() < 1e-6, "total {}", total);
        assert_eq!(importance[0].0, "Funding");
    }

    #[test]
    fn test_retraining_with_same_config_is_deterministic() {
        let config = TrainingConfig {
            samples: 300,
            trees: 20,
            ..Default::default()
        };
        let a = SuccessModel::train(config).unwrap();
        let b = SuccessModel::train(config).unwrap();
        let record = FeatureRecord::default();
        assert_eq!(a.predict(&record), b.predict(&record));
    }

    #[test]
    fn test_tiny_sample_budget_rejected() {
        let config = TrainingConfig {
            samples: 2,
            ..Default::default()
        };
        assert_eq!(
            SuccessModel::train(config).unwrap_err(),
            ModelError::EmptyTrainingSet
        );
    }

    #[test]
    fn test_status_counts_predictions() {
        let model = SuccessModel::train(TrainingConfig {
            samples: 300,
            trees: 10,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(model.status().prediction_count, 0);
        model.predict(&FeatureRecord::default());
        model.predict(&FeatureRecord::default());
        assert_eq!(model.status().prediction_count, 2);
    }
}
