//! Startup Success Predictor - Core Engine
//!
//! Estimates a startup's success potential from five business metrics:
//! funding, team size, market size, monthly revenue and growth rate.
//! A forest classifier trained on synthetic tier data produces the
//! score/label/confidence; pure heuristic engines derive the
//! supporting rationale (status bands, risks, strengths, runway, peer
//! comparison, benchmarks, suggestions).
//!
//! Typical flow:
//!
//! ```no_run
//! use startup_success_core::{validate, FeatureRecord, SuccessModel, TrainingConfig};
//!
//! let record = FeatureRecord::default();
//! validate(&record)?;
//!
//! let model = SuccessModel::train(TrainingConfig::default())?;
//! let prediction = model.predict(&record);
//! println!("{}: {}/100", prediction.label, prediction.success_score);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod constants;
pub mod logic;

// The contract consumed by presentation/export front ends.
pub use logic::advisor::{suggestions, MAX_SUGGESTIONS};
pub use logic::export::{
    export_to_file, format_currency, to_csv, to_json, to_report, ExportFormat,
};
pub use logic::features::{validate, FeatureRecord, ValidationError, FEATURE_COUNT};
pub use logic::insight::{
    benchmark_for, benchmark_for_label, calculate_runway, compare_to_typical, generate_insights,
    BenchmarkProfile, InsightBundle, MetricComparison, RiskFactor, RunwayReport, Severity,
    Strength,
};
pub use logic::model::{
    shared, ModelError, Prediction, SuccessModel, Tier, TierProbabilities, TrainingConfig,
};
