use serde::{Deserialize, Serialize};

use super::{Metric, MetricInput, MetricKind, MAX_SCORE};

/// Weights combining sentiment components into emotional resonance.
///
/// `resonance = clamp(10 * (subjectivity_weight * subjectivity
///                          + polarity_weight * |polarity|), 0, 10)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResonanceWeights {
    pub subjectivity: f64,
    pub polarity: f64,
}

impl Default for ResonanceWeights {
    fn default() -> Self {
        Self {
            subjectivity: 1.0,
            polarity: 0.0,
        }
    }
}

impl ResonanceWeights {
    pub fn combine(&self, polarity: f64, subjectivity: f64) -> f64 {
        let raw = self.subjectivity * subjectivity.clamp(0.0, 1.0)
            + self.polarity * polarity.clamp(-1.0, 1.0).abs();
        (raw * MAX_SCORE).clamp(0.0, MAX_SCORE)
    }
}

/// Emotional resonance with the default weights, i.e. `subjectivity * 10`.
pub fn emotional_resonance(polarity: f64, subjectivity: f64) -> f64 {
    ResonanceWeights::default().combine(polarity, subjectivity)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResonanceMetric {
    pub weights: ResonanceWeights,
}

impl Metric for ResonanceMetric {
    fn kind(&self) -> MetricKind {
        MetricKind::EmotionalResonance
    }

    fn compute(&self, input: &MetricInput<'_>) -> f64 {
        self.weights
            .combine(input.sentiment.polarity, input.sentiment.subjectivity)
    }
}
