//! CART Decision Tree
//!
//! Single tree of the ensemble: Gini impurity, binary splits on feature
//! thresholds, leaves holding class distributions. Split candidates are
//! restricted to a random feature subset per node, which is where the
//! ensemble gets its variance from.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::logic::features::FEATURE_COUNT;

use super::types::Tier;

const CLASS_COUNT: usize = Tier::COUNT;

/// Split gains at or below this are noise, not structure.
const MIN_GAIN: f64 = 1e-12;

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone)]
pub struct TreeConfig {
    pub max_depth: usize,
    pub min_samples_split: usize,
    /// Random features considered per split (⌊√FEATURE_COUNT⌋)
    pub features_per_split: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            min_samples_split: 2,
            features_per_split: 2,
        }
    }
}

// ============================================================================
// NODES
// ============================================================================

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        distribution: [f64; CLASS_COUNT],
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Fitted tree. Nodes live in an arena; children are stored before
/// their parent, so `root` is always the last pushed node.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<Node>,
    root: usize,
}

impl DecisionTree {
    /// Grow a tree over `rows` (bootstrap indices into `features`).
    /// Impurity decreases are accumulated into `importance` weighted by
    /// node size.
    pub fn fit(
        features: &Array2<f64>,
        labels: &[usize],
        rows: Vec<usize>,
        config: &TreeConfig,
        rng: &mut StdRng,
        importance: &mut [f64; FEATURE_COUNT],
    ) -> Self {
        let mut grower = Grower {
            features,
            labels,
            config,
            root_size: rows.len().max(1) as f64,
            nodes: Vec::new(),
        };
        let root = grower.grow(rows, 0, rng, importance);
        Self {
            nodes: grower.nodes,
            root,
        }
    }

    /// Class distribution at the leaf this point falls into.
    pub fn predict_proba(&self, vector: &[f64; FEATURE_COUNT]) -> [f64; CLASS_COUNT] {
        let mut index = self.root;
        loop {
            match &self.nodes[index] {
                Node::Leaf { distribution } => return *distribution,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if vector[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

// ============================================================================
// GROWING
// ============================================================================

struct Grower<'a> {
    features: &'a Array2<f64>,
    labels: &'a [usize],
    config: &'a TreeConfig,
    root_size: f64,
    nodes: Vec<Node>,
}

impl Grower<'_> {
    fn grow(
        &mut self,
        rows: Vec<usize>,
        depth: usize,
        rng: &mut StdRng,
        importance: &mut [f64; FEATURE_COUNT],
    ) -> usize {
        let n = rows.len();
        let counts = self.class_counts(&rows);
        let node_gini = gini(&counts, n);
        let pure = counts.iter().filter(|&&c| c > 0).count() <= 1;

        if pure || depth >= self.config.max_depth || n < self.config.min_samples_split {
            return self.push_leaf(&counts, n);
        }

        let Some((feature, threshold, child_gini)) = self.best_split(&rows, &counts, rng) else {
            return self.push_leaf(&counts, n);
        };

        let gain = node_gini - child_gini;
        if gain <= MIN_GAIN {
            return self.push_leaf(&counts, n);
        }

        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = rows
            .into_iter()
            .partition(|&row| self.features[[row, feature]] <= threshold);

        // Midpoint rounding on near-identical floats can starve one side.
        if left_rows.is_empty() || right_rows.is_empty() {
            return self.push_leaf(&counts, n);
        }

        importance[feature] += (n as f64 / self.root_size) * gain;

        let left = self.grow(left_rows, depth + 1, rng, importance);
        let right = self.grow(right_rows, depth + 1, rng, importance);
        self.nodes.push(Node::Split {
            feature,
            threshold,
            left,
            right,
        });
        self.nodes.len() - 1
    }

    /// Best (feature, threshold, weighted child gini) among a random
    /// feature subset. Thresholds are midpoints between distinct
    /// consecutive sorted values.
    fn best_split(
        &self,
        rows: &[usize],
        counts: &[usize; CLASS_COUNT],
        rng: &mut StdRng,
    ) -> Option<(usize, f64, f64)> {
        let n = rows.len();
        let all_features: Vec<usize> = (0..FEATURE_COUNT).collect();
        let subset_size = self.config.features_per_split.clamp(1, FEATURE_COUNT);
        let chosen: Vec<usize> = all_features
            .choose_multiple(rng, subset_size)
            .copied()
            .collect();

        let mut best: Option<(usize, f64, f64)> = None;

        for &feature in &chosen {
            let mut pairs: Vec<(f64, usize)> = rows
                .iter()
                .map(|&row| (self.features[[row, feature]], self.labels[row]))
                .collect();
            pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

            let mut left_counts = [0usize; CLASS_COUNT];
            for i in 0..n - 1 {
                left_counts[pairs[i].1] += 1;
                if pairs[i].0 == pairs[i + 1].0 {
                    continue;
                }

                let left_n = i + 1;
                let right_n = n - left_n;
                let mut right_counts = [0usize; CLASS_COUNT];
                for class in 0..CLASS_COUNT {
                    right_counts[class] = counts[class] - left_counts[class];
                }

                let weighted = (left_n as f64 * gini(&left_counts, left_n)
                    + right_n as f64 * gini(&right_counts, right_n))
                    / n as f64;

                if best.map_or(true, |(_, _, current)| weighted < current) {
                    let threshold = (pairs[i].0 + pairs[i + 1].0) / 2.0;
                    best = Some((feature, threshold, weighted));
                }
            }
        }

        best
    }

    fn class_counts(&self, rows: &[usize]) -> [usize; CLASS_COUNT] {
        let mut counts = [0usize; CLASS_COUNT];
        for &row in rows {
            counts[self.labels[row]] += 1;
        }
        counts
    }

    fn push_leaf(&mut self, counts: &[usize; CLASS_COUNT], n: usize) -> usize {
        let total = n.max(1) as f64;
        let mut distribution = [0.0; CLASS_COUNT];
        for (slot, &count) in distribution.iter_mut().zip(counts.iter()) {
            *slot = count as f64 / total;
        }
        self.nodes.push(Node::Leaf { distribution });
        self.nodes.len() - 1
    }
}

fn gini(counts: &[usize; CLASS_COUNT], n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let total = n as f64;
    1.0 - counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            p * p
        })
        .sum::<f64>()
}

// ============================================================================
// TESTS
// ============================================================================
