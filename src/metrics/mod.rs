//! Metrics module for scoring a single model response.
//!
//! This module provides a unified interface for the JOJO metrics:
//! - Joy (tone positivity)
//! - Outcomes (keyword coverage)
//! - Journey (readability)
//! - Opportunity (actionable suggestions)
//! - Emotional Resonance (derived from polarity and subjectivity)

// Submodules
mod journey;
mod joy;
mod opportunity;
mod outcomes;
mod resonance;
mod runner;


// Re-exports
pub use journey::{flesch_reading_ease, score_journey, JourneyMetric};
pub use joy::{joy_from_polarity, score_joy, JoyMetric};
pub use opportunity::{score_opportunity, OpportunityMetric, DEFAULT_MARKERS, DEFAULT_SATURATION};
pub use outcomes::{keyword_coverage, score_outcomes, OutcomesMetric};
pub use resonance::{emotional_resonance, ResonanceMetric, ResonanceWeights};
pub use runner::{
    default_metrics, evaluate, run_metrics, round_to, Metric, MetricEngine, MetricInput,
    MetricKind,
};

/// Upper bound of every 0 - 10 scaled score.
pub const MAX_SCORE: f64 = 10.0;
