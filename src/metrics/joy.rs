use crate::sentiment::sentiment;
use crate::text::has_words;
use crate::types::ResponseText;

use super::{Metric, MetricInput, MetricKind, MAX_SCORE};

/// Maps polarity (-1.0 - 1.0) onto the 0 - 10 joy scale; neutral tone is 5.
pub fn joy_from_polarity(polarity: f64) -> f64 {
    ((polarity.clamp(-1.0, 1.0) + 1.0) * 5.0).clamp(0.0, MAX_SCORE)
}

/// Positivity of tone, 0 - 10. Text without a single word scores 0.
pub fn score_joy(text: &ResponseText) -> f64 {
    if !has_words(text.as_str()) {
        return 0.0;
    }
    joy_from_polarity(sentiment(text).polarity)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JoyMetric;

impl Metric for JoyMetric {
    fn kind(&self) -> MetricKind {
        MetricKind::Joy
    }

    fn compute(&self, input: &MetricInput<'_>) -> f64 {
        if !has_words(input.text.as_str()) {
            return 0.0;
        }
        joy_from_polarity(input.sentiment.polarity)
    }
}
