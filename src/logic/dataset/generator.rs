//! Synthetic Training Data Generator
//!
//! Produces the labeled examples the forest is fit on. The per-tier
//! uniform ranges below are the ground truth that defines what
//! Low/Moderate/High potential mean numerically - the classifier's
//! decision boundaries and the benchmark numbers all derive from them.
//! Do not adjust a bound without retiring every trained model.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::logic::features::FEATURE_COUNT;
use crate::logic::model::Tier;

// ============================================================================
// TIER RANGES (Ground truth)
// ============================================================================

/// Uniform sampling bounds per feature, in layout order
/// [funding, team_size, market_size, revenue, growth_rate].
/// Draws are half-open: [lo, hi).
pub fn feature_ranges(tier: Tier) -> [(f64, f64); FEATURE_COUNT] {
    match tier {
        Tier::High => [
            (1_000_000.0, 10_000_000.0),
            (20.0, 100.0),
            (50_000_000.0, 500_000_000.0),
            (100_000.0, 1_000_000.0),
            (15.0, 50.0),
        ],
        Tier::Moderate => [
            (100_000.0, 1_000_000.0),
            (5.0, 20.0),
            (10_000_000.0, 50_000_000.0),
            (10_000.0, 100_000.0),
            (5.0, 15.0),
        ],
        Tier::Low => [
            (10_000.0, 100_000.0),
            (1.0, 5.0),
            (1_000_000.0, 10_000_000.0),
            (0.0, 10_000.0),
            (-5.0, 5.0),
        ],
    }
}

// ============================================================================
// TRAINING SET
// ============================================================================

/// Labeled training matrix. Lives only between generation and fitting;
/// the fitted scaler/forest keep aggregate statistics, not rows.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    /// One row per sample, columns in layout order
    pub features: Array2<f64>,
    /// Class index per row (0 Low, 1 Moderate, 2 High)
    pub labels: Vec<usize>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ============================================================================
// GENERATION
// ============================================================================

/// Generate `n_samples / 3` uniform samples per tier (truncating, so the
/// default budget of 1000 yields 999 rows), then shuffle row order so
/// downstream training sees no block structure. Same seed, same output.
pub fn generate(seed: u64, n_samples: usize) -> TrainingSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let per_tier = n_samples / Tier::COUNT;
    let total = per_tier * Tier::COUNT;

    let mut rows: Vec<[f64; FEATURE_COUNT]> = Vec::with_capacity(total);
    let mut labels: Vec<usize> = Vec::with_capacity(total);

    // Generation order mirrors the tier definition: High, Moderate, Low.
    for tier in [Tier::High, Tier::Moderate, Tier::Low] {
        let ranges = feature_ranges(tier);
        for _ in 0..per_tier {
            let mut row = [0.0; FEATURE_COUNT];
            for (slot, &(lo, hi)) in row.iter_mut().zip(ranges.iter()) {
                *slot = rng.gen_range(lo..hi);
            }
            rows.push(row);
            labels.push(tier.class_index());
        }
    }

    // Seeded permutation of row order.
    let mut order: Vec<usize> = (0..total).collect();
    order.shuffle(&mut rng);

    let mut features = Array2::zeros((total, FEATURE_COUNT));
    let mut shuffled_labels = Vec::with_capacity(total);
    for (new_row, &old_row) in order.iter().enumerate() {
        for (col, &value) in rows[old_row].iter().enumerate() {
            features[[new_row, col]] = value;
        }
        shuffled_labels.push(labels[old_row]);
    }

    log::debug!("Generated {} synthetic samples (seed {})", total, seed);

    TrainingSet {
        features,
        labels: shuffled_labels,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_splits_evenly() {
        let set = generate(42, 1000);
        assert_eq!(set.len(), 999);
        for tier in Tier::ALL {
            let count = set
                .labels
                .iter()
                .filter(|&&l| l == tier.class_index())
                .count();
            assert_eq!(count, 333, "tier {:?}", tier);
        }
    }

    #[test]
    fn test_generation_is_reproducible() {
        let a = generate(42, 1000);
        let b = generate(42, 1000);
        assert_eq!(a.features, b.features);
        assert_eq!(a.labels, b.labels);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate(42, 300);
        let b = generate(43, 300);
        assert_ne!(a.features, b.features);
    }

    #[test]
    fn test_samples_stay_inside_tier_ranges() {
        let set = generate(7, 300);
        for (row, &label) in set.labels.iter().enumerate() {
            let ranges = feature_ranges(Tier::from_class_index(label));
            for (col, &(lo, hi)) in ranges.iter().enumerate() {
                let value = set.features[[row, col]];
                assert!(
                    value >= lo && value < hi,
                    "row {} col {} value {} outside [{}, {})",
                    row,
                    col,
                    value,
                    lo,
                    hi
                );
            }
        }
    }

    #[test]
    fn test_rows_are_shuffled() {
        let set = generate(42, 1000);
        // Without the shuffle the first 333 rows would all be High.
        let first_block_uniform = set.labels[..333]
            .iter()
            .all(|&l| l == Tier::High.class_index());
        assert!(!first_block_uniform);
    }
}
