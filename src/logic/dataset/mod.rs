//! Dataset Module - Synthetic Training Data
//!
//! The generator is the single source of the tier semantics. Nothing in
//! here touches disk; training data is generated, consumed, discarded.

pub mod generator;

pub use generator::{feature_ranges, generate, TrainingSet};
