//! Standard Scaler
//!
//! Zero-mean / unit-variance normalization. Fit exactly once on the
//! synthetic training set and reused for every transform afterwards,
//! including the live prediction path.

use ndarray::Array2;

use crate::logic::features::{feature_name, FEATURE_COUNT};

use super::types::ModelError;

/// Below this a feature column counts as zero-variance. Scaling would
/// divide by zero and poison every downstream score with NaN.
const MIN_SCALE: f64 = 1e-12;

/// Fitted per-feature mean and standard deviation.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    /// Compute per-column mean and population standard deviation.
    ///
    /// Fails loudly on a zero-variance column instead of producing
    /// silent NaN/Inf at inference.
    pub fn fit(features: &Array2<f64>) -> Result<Self, ModelError> {
        let rows = features.nrows();
        if rows == 0 {
            return Err(ModelError::EmptyTrainingSet);
        }

        let mut mean = [0.0; FEATURE_COUNT];
        let mut scale = [0.0; FEATURE_COUNT];

        for col in 0..FEATURE_COUNT {
            let column = features.column(col);
            let m = column.sum() / rows as f64;
            let variance = column.iter().map(|v| (v - m).powi(2)).sum::<f64>() / rows as f64;
            let std = variance.sqrt();

            if std < MIN_SCALE {
                return Err(ModelError::DegenerateFeature {
                    feature: feature_name(col).unwrap_or("unknown"),
                });
            }

            mean[col] = m;
            scale[col] = std;
        }

        Ok(Self { mean, scale })
    }

    /// Apply `(x - mean) / std` per feature.
    pub fn transform(&self, vector: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            scaled[i] = (vector[i] - self.mean[i]) / self.scale[i];
        }
        scaled
    }

    /// Transform a whole matrix (training path).
    pub fn transform_matrix(&self, features: &Array2<f64>) -> Array2<f64> {
        let mut scaled = features.clone();
        for mut row in scaled.rows_mut() {
            for i in 0..FEATURE_COUNT {
                row[i] = (row[i] - self.mean[i]) / self.scale[i];
            }
        }
        scaled
    }

    pub fn mean(&self) -> &[f64; FEATURE_COUNT] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64; FEATURE_COUNT] {
        &self.scale
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dataset;

    #[test]
    fn test_fit_then_transform_standardizes() {
        let set = dataset::generate(42, 300);
        let scaler = StandardScaler::fit(&set.features).unwrap();
        let scaled = scaler.transform_matrix(&set.features);

        let rows = scaled.nrows() as f64;
        for col in 0..FEATURE_COUNT {
            let column = scaled.column(col);
            let mean = column.sum() / rows;
            let variance = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / rows;
            assert!(mean.abs() < 1e-9, "col {} mean {}", col, mean);
            assert!((variance.sqrt() - 1.0).abs() < 1e-9, "col {} std", col);
        }
    }

    #[test]
    fn test_single_vector_matches_matrix_path() {
        let set = dataset::generate(42, 300);
        let scaler = StandardScaler::fit(&set.features).unwrap();
        let scaled = scaler.transform_matrix(&set.features);

        let mut first = [0.0; FEATURE_COUNT];
        for col in 0..FEATURE_COUNT {
            first[col] = set.features[[0, col]];
        }
        let single = scaler.transform(&first);
        for col in 0..FEATURE_COUNT {
            assert!((single[col] - scaled[[0, col]]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_variance_column_fails_loudly() {
        // Constant funding column, everything else varies.
        let mut features = Array2::zeros((10, FEATURE_COUNT));
        for row in 0..10 {
            features[[row, 0]] = 5.0;
            for col in 1..FEATURE_COUNT {
                features[[row, col]] = row as f64 + col as f64;
            }
        }
        let err = StandardScaler::fit(&features).unwrap_err();
        assert_eq!(err, ModelError::DegenerateFeature { feature: "funding" });
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let features = Array2::zeros((0, FEATURE_COUNT));
        assert_eq!(
            StandardScaler::fit(&features).unwrap_err(),
            ModelError::EmptyTrainingSet
        );
    }
}
