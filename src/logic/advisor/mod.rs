//! Advisor Module - Strategic Suggestions
//!
//! Rule-based, ordered, capped at five. Rendering is the caller's job.

pub mod rules;

pub use rules::{suggestions, MAX_SUGGESTIONS};
