use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::types::ResponseText;
use crate::Result;

use super::{Metric, MetricInput, MetricKind, MAX_SCORE};

/// Phrases that signal an actionable suggestion.
pub const DEFAULT_MARKERS: &[&str] = &[
    "recommend",
    "suggest",
    "consider",
    "try",
    "you can",
    "you should",
    "you could",
    "make sure",
];

/// Marker count that earns the full score.
pub const DEFAULT_SATURATION: f64 = 5.0;

// "1. Install", "2) Run" at the start of a line
static NUMBERED_STEP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*\d{1,3}[.)]\s+\S").expect("numbered step pattern"));

static DEFAULT_METRIC: Lazy<OpportunityMetric> = Lazy::new(|| {
    OpportunityMetric::new(DEFAULT_MARKERS, DEFAULT_SATURATION).expect("default markers")
});

/// Actionable-suggestion score, 0 - 10, using the default markers.
pub fn score_opportunity(text: &ResponseText) -> f64 {
    DEFAULT_METRIC.score(text)
}

#[derive(Debug, Clone)]
pub struct OpportunityMetric {
    markers: Option<Regex>,
    saturation: f64,
}

impl OpportunityMetric {
    /// Markers match case-insensitively at a word start ("try" also counts
    /// "trying"); spaces inside a marker match any whitespace run.
    pub fn new<S: AsRef<str>>(markers: &[S], saturation: f64) -> Result<Self> {
        let alternatives = markers
            .iter()
            .map(|m| m.as_ref().trim())
            .filter(|m| !m.is_empty())
            .map(|m| {
                m.split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .collect::<Vec<_>>();

        let markers = if alternatives.is_empty() {
            None
        } else {
            let pattern = format!(r"\b(?:{})", alternatives.join("|"));
            Some(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
        };
        Ok(Self {
            markers,
            saturation,
        })
    }

    /// Marker hits plus numbered-step lines.
    pub fn count_markers(&self, text: &ResponseText) -> usize {
        let content = text.as_str();
        let markers = self
            .markers
            .as_ref()
            .map(|re| re.find_iter(content).count())
            .unwrap_or(0);
        let steps = NUMBERED_STEP_RE.find_iter(content).count();
        debug!(markers, steps, "opportunity markers");
        markers + steps
    }

    pub fn score(&self, text: &ResponseText) -> f64 {
        if text.is_blank() || self.saturation <= 0.0 {
            return 0.0;
        }
        let total = self.count_markers(text) as f64;
        (total / self.saturation * MAX_SCORE).min(MAX_SCORE)
    }
}

impl Default for OpportunityMetric {
    fn default() -> Self {
        DEFAULT_METRIC.clone()
    }
}

impl Metric for OpportunityMetric {
    fn kind(&self) -> MetricKind {
        MetricKind::Opportunity
    }

    fn compute(&self, input: &MetricInput<'_>) -> f64 {
        self.score(input.text)
    }
}
