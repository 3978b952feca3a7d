use crate::types::{KeywordSet, ResponseText};

use super::{Metric, MetricInput, MetricKind, MAX_SCORE};

/// Number of distinct keywords present in `text` (case-insensitive substring).
///
/// Repeated occurrences of a keyword count once, so the score never decreases
/// when keywords are added and equals `keywords.len()` when all are present.
pub fn score_outcomes(text: &ResponseText, keywords: &KeywordSet) -> f64 {
    if keywords.is_empty() || text.is_blank() {
        return 0.0;
    }
    let haystack = text.lowered();
    keywords.needles().filter(|k| haystack.contains(k)).count() as f64
}

/// Share of keywords present, scaled to 0 - 10. An empty set scores 0.
pub fn keyword_coverage(text: &ResponseText, keywords: &KeywordSet) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    score_outcomes(text, keywords) / keywords.len() as f64 * MAX_SCORE
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OutcomesMetric;

impl Metric for OutcomesMetric {
    fn kind(&self) -> MetricKind {
        MetricKind::Outcomes
    }

    fn compute(&self, input: &MetricInput<'_>) -> f64 {
        score_outcomes(input.text, input.keywords)
    }
}
