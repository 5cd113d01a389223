//! Features Module - Metric Definitions & Input Boundary
//!
//! Owns the feature layout, the immutable input record, and the
//! validation boundary that runs before any prediction.

pub mod layout;
pub mod record;
pub mod validate;

// Re-export common types
pub use layout::{
    feature_display_name, feature_index, feature_name, FEATURE_COUNT, FEATURE_DISPLAY_NAMES,
    FEATURE_LAYOUT,
};
pub use record::FeatureRecord;
pub use validate::{validate, ValidationError};
