//! Model Module - Scaling, Classification, Prediction
//!
//! The pipeline: scale the five metrics into the training distribution,
//! run the tree ensemble, blend probabilities into a 0-100 score.
//!
//! ## Structure
//! - `types`: Tier, probabilities, prediction, errors
//! - `scaler`: zero-mean/unit-variance normalization
//! - `tree` / `forest`: the CART ensemble
//! - `service`: explicit train step + prediction entry point

pub mod forest;
pub mod scaler;
pub mod service;
pub mod tree;
pub mod types;

// Re-export main types for convenience
pub use forest::{ForestClassifier, ForestConfig};
pub use scaler::StandardScaler;
pub use service::{shared, ModelStatus, SuccessModel, TrainingConfig};
pub use types::{ModelError, Prediction, Tier, TierProbabilities};
