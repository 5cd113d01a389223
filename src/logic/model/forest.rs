//! Forest Classifier
//!
//! Ensemble of CART trees over bootstrap samples. Probabilities are the
//! average of per-tree leaf distributions, so they are calibrated by
//! vote share and always sum to 1.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::logic::features::FEATURE_COUNT;

use super::tree::{DecisionTree, TreeConfig};
use super::types::Tier;

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone)]
pub struct ForestConfig {
    pub trees: usize,
    pub max_depth: usize,
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            trees: crate::constants::DEFAULT_TREES,
            max_depth: crate::constants::DEFAULT_MAX_DEPTH,
            seed: crate::constants::DEFAULT_SEED,
        }
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Fitted ensemble. Read-only after `fit`.
#[derive(Debug, Clone)]
pub struct ForestClassifier {
    trees: Vec<DecisionTree>,
    /// Impurity-based importances, normalized to sum 1 (all zero when
    /// no tree found a usable split).
    importances: [f64; FEATURE_COUNT],
}

impl ForestClassifier {
    /// Train `config.trees` trees on bootstrap samples of the rows.
    /// A single sequentially-consumed seeded RNG drives bootstrapping
    /// and per-split feature subsets, so the same seed reproduces the
    /// same forest.
    pub fn fit(features: &Array2<f64>, labels: &[usize], config: &ForestConfig) -> Self {
        let n = labels.len();
        let mut rng = StdRng::seed_from_u64(config.seed);
        let tree_config = TreeConfig {
            max_depth: config.max_depth,
            ..Default::default()
        };

        let mut importances = [0.0; FEATURE_COUNT];
        let mut trees = Vec::with_capacity(config.trees);

        for _ in 0..config.trees {
            let bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
            trees.push(DecisionTree::fit(
                features,
                labels,
                bootstrap,
                &tree_config,
                &mut rng,
                &mut importances,
            ));
        }

        let total: f64 = importances.iter().sum();
        if total > 0.0 {
            for value in &mut importances {
                *value /= total;
            }
        }

        Self { trees, importances }
    }

    /// Average of per-tree leaf distributions, in class-index order.
    pub fn predict_proba(&self, vector: &[f64; FEATURE_COUNT]) -> [f64; Tier::COUNT] {
        let mut acc = [0.0; Tier::COUNT];
        for tree in &self.trees {
            let distribution = tree.predict_proba(vector);
            for (slot, value) in acc.iter_mut().zip(distribution.iter()) {
                *slot += value;
            }
        }
        let count = self.trees.len().max(1) as f64;
        for slot in &mut acc {
            *slot /= count;
        }
        acc
    }

    /// Argmax class index; ties break toward the lowest index.
    pub fn predict(&self, vector: &[f64; FEATURE_COUNT]) -> usize {
        let proba = self.predict_proba(vector);
        let mut best = 0;
        for (i, &value) in proba.iter().enumerate() {
            if value > proba[best] {
                best = i;
            }
        }
        best
    }

    pub fn feature_importances(&self) -> &[f64; FEATURE_COUNT] {
        &self.importances
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
