use crate::text::{sentence_count, syllables, words};
use crate::types::ResponseText;

use super::{Metric, MetricInput, MetricKind, MAX_SCORE};

/// Flesch reading ease:
/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`.
///
/// Returns `None` when the text has no words.
pub fn flesch_reading_ease(text: &str) -> Option<f64> {
    let tokens = words(text);
    if tokens.is_empty() {
        return None;
    }

    let word_count = tokens.len() as f64;
    let sentences = sentence_count(text).max(1) as f64;
    let syllable_count: usize = tokens.iter().map(|w| syllables(w)).sum();

    Some(206.835 - 1.015 * (word_count / sentences) - 84.6 * (syllable_count as f64 / word_count))
}

/// Readability, 0 - 10: reading ease clamped to 0 - 100, divided by 10.
/// Blank text and text without words score 0.
pub fn score_journey(text: &ResponseText) -> f64 {
    if text.is_blank() {
        return 0.0;
    }
    match flesch_reading_ease(text.as_str()) {
        Some(ease) => ease.clamp(0.0, 100.0) / 100.0 * MAX_SCORE,
        None => 0.0,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JourneyMetric;

impl Metric for JourneyMetric {
    fn kind(&self) -> MetricKind {
        MetricKind::Journey
    }

    fn compute(&self, input: &MetricInput<'_>) -> f64 {
        score_journey(input.text)
    }
}
