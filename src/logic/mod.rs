//! Logic Module - Engines
//!
//! The full pipeline: features in, prediction + insights + suggestions
//! out, optionally exported.
//!
//! ## Structure
//! - `features/` - metric layout, input record, validation boundary
//! - `dataset/` - synthetic training data generation
//! - `model/` - scaler, tree ensemble, prediction service
//! - `insight/` - derived analytics (bands, risks, runway, comparisons)
//! - `advisor/` - ordered strategic suggestions
//! - `export` - CSV / JSON / text report output

pub mod advisor;
pub mod dataset;
pub mod export;
pub mod features;
pub mod insight;
pub mod model;
