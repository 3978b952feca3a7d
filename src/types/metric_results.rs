//! Metric result types for evaluation output.
//!
//! Score ranges:
//! - joy, journey, opportunity, emotional resonance, coverage: 0.0 - 10.0
//! - outcomes: count of distinct keywords matched (0 - keyword count)
//! - polarity: -1.0 - 1.0
//! - subjectivity: 0.0 - 1.0

use serde::{Deserialize, Serialize};

use super::core::Leader;

/// Output of the sentiment analyzer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentiment {
    /// Negative to positive tone (-1.0 - 1.0)
    pub polarity: f64,
    /// Fact (0.0) to opinion (1.0)
    pub subjectivity: f64,
}

impl Sentiment {
    pub const NEUTRAL: Sentiment = Sentiment {
        polarity: 0.0,
        subjectivity: 0.0,
    };
}

/// Every score computed for one response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricResult {
    pub joy: f64,
    pub outcomes: f64,
    pub journey: f64,
    pub opportunity: f64,
    pub emotional_resonance: f64,
    pub polarity: f64,
    pub subjectivity: f64,
    /// Share of keywords matched, scaled to 0 - 10
    pub coverage: f64,
}

/// Per-metric winner when two responses are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub joy: Leader,
    pub outcomes: Leader,
    pub journey: Leader,
    pub opportunity: Leader,
    pub emotional_resonance: Leader,
}

impl ComparisonSummary {
    pub fn between(first: &MetricResult, second: &MetricResult) -> Self {
        Self {
            joy: leader(first.joy, second.joy),
            outcomes: leader(first.outcomes, second.outcomes),
            journey: leader(first.journey, second.journey),
            opportunity: leader(first.opportunity, second.opportunity),
            emotional_resonance: leader(first.emotional_resonance, second.emotional_resonance),
        }
    }
}

fn leader(first: f64, second: f64) -> Leader {
    if (first - second).abs() < f64::EPSILON {
        Leader::Tie
    } else if first > second {
        Leader::First
    } else {
        Leader::Second
    }
}
