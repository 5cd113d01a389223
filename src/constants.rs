//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change a financial assumption or training default, only edit this file.

/// Estimated monthly cost per employee (USD)
pub const COST_PER_EMPLOYEE: f64 = 5_000.0;

/// Operational overhead multiplier on top of payroll (20%)
pub const OPERATIONAL_OVERHEAD: f64 = 1.2;

/// Default seed for synthetic training data and tree bootstrapping
pub const DEFAULT_SEED: u64 = 42;

/// Default synthetic sample budget (split evenly across the three tiers)
pub const DEFAULT_SAMPLES: usize = 1_000;

/// Default number of trees in the ensemble
pub const DEFAULT_TREES: usize = 100;

/// Default maximum tree depth
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Startup Success Predictor";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the training seed from environment or use default
pub fn get_training_seed() -> u64 {
    std::env::var("PREDICTOR_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED)
}

/// Get the ensemble size from environment or use default
pub fn get_tree_count() -> usize {
    std::env::var("PREDICTOR_TREES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TREES)
}
