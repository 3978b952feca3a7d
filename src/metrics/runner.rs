use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::config::{Config, MAX_PRECISION};
use crate::error::JojoError;
use crate::sentiment::SentimentAnalyzer;
use crate::types::{KeywordSet, MetricResult, ResponseText, Sentiment};
use crate::Result;

use super::{
    keyword_coverage, JourneyMetric, JoyMetric, OpportunityMetric, OutcomesMetric,
    ResonanceMetric, ResonanceWeights,
};

/// The kind of metric being computed, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Joy,
    Outcomes,
    Journey,
    Opportunity,
    EmotionalResonance,
}

impl MetricKind {
    pub const fn all() -> [MetricKind; 5] {
        [
            MetricKind::Joy,
            MetricKind::Outcomes,
            MetricKind::Journey,
            MetricKind::Opportunity,
            MetricKind::EmotionalResonance,
        ]
    }

    /// Human-readable label used in reports.
    pub const fn label(&self) -> &'static str {
        match self {
            MetricKind::Joy => "Joy",
            MetricKind::Outcomes => "Outcomes",
            MetricKind::Journey => "Journey",
            MetricKind::Opportunity => "Opportunity",
            MetricKind::EmotionalResonance => "Emotional Resonance",
        }
    }

    pub fn value_in(&self, result: &MetricResult) -> f64 {
        match self {
            MetricKind::Joy => result.joy,
            MetricKind::Outcomes => result.outcomes,
            MetricKind::Journey => result.journey,
            MetricKind::Opportunity => result.opportunity,
            MetricKind::EmotionalResonance => result.emotional_resonance,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MetricKind::Joy => "joy",
                MetricKind::Outcomes => "outcomes",
                MetricKind::Journey => "journey",
                MetricKind::Opportunity => "opportunity",
                MetricKind::EmotionalResonance => "emotional_resonance",
            }
        )
    }
}

impl FromStr for MetricKind {
    type Err = JojoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "joy" => Ok(MetricKind::Joy),
            "outcomes" => Ok(MetricKind::Outcomes),
            "journey" => Ok(MetricKind::Journey),
            "opportunity" => Ok(MetricKind::Opportunity),
            "emotional_resonance" | "resonance" => Ok(MetricKind::EmotionalResonance),
            _ => Err(JojoError::Config(format!("Unknown metric kind: {}", s))),
        }
    }
}

/// Everything a metric may look at for one response.
#[derive(Debug, Clone, Copy)]
pub struct MetricInput<'a> {
    pub text: &'a ResponseText,
    pub keywords: &'a KeywordSet,
    pub sentiment: Sentiment,
}

/// Trait for implementing a JOJO metric.
pub trait Metric {
    fn kind(&self) -> MetricKind;
    fn compute(&self, input: &MetricInput<'_>) -> f64;
}

/// Returns the default set of all metrics.
pub fn default_metrics() -> Vec<Box<dyn Metric>> {
    vec![
        Box::<JoyMetric>::default(),
        Box::<OutcomesMetric>::default(),
        Box::<JourneyMetric>::default(),
        Box::<OpportunityMetric>::default(),
        Box::<ResonanceMetric>::default(),
    ]
}

/// Run every metric on one response. Each kind must be covered exactly once.
pub fn run_metrics(metrics: &[Box<dyn Metric>], input: &MetricInput<'_>) -> Result<MetricResult> {
    let missing: Vec<MetricKind> = MetricKind::all()
        .into_iter()
        .filter(|kind| !metrics.iter().any(|m| m.kind() == *kind))
        .collect();

    if !missing.is_empty() {
        let names = missing
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(JojoError::metric(format!(
            "Required metrics not available: {}",
            names
        )));
    }

    for kind in MetricKind::all() {
        let duplicates = metrics.iter().filter(|m| m.kind() == kind).count();
        if duplicates > 1 {
            return Err(JojoError::metric(format!(
                "Metric {} registered {} times",
                kind, duplicates
            )));
        }
    }

    let mut result = MetricResult {
        polarity: input.sentiment.polarity,
        subjectivity: input.sentiment.subjectivity,
        coverage: keyword_coverage(input.text, input.keywords),
        ..MetricResult::default()
    };

    for metric in metrics {
        let value = metric.compute(input);
        debug!(metric = %metric.kind(), value, "computed metric");
        match metric.kind() {
            MetricKind::Joy => result.joy = value,
            MetricKind::Outcomes => result.outcomes = value,
            MetricKind::Journey => result.journey = value,
            MetricKind::Opportunity => result.opportunity = value,
            MetricKind::EmotionalResonance => result.emotional_resonance = value,
        }
    }

    Ok(result)
}

/// Round half away from zero to `decimals` places, at most `MAX_PRECISION`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_PRECISION) as i32);
    let rounded = (value * factor).round() / factor;
    // avoid reporting -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Scores responses with a fixed metric set, analyzer, and output precision.
///
/// The engine holds no per-response state: scoring one text never affects
/// the result for another.
pub struct MetricEngine {
    metrics: Vec<Box<dyn Metric>>,
    analyzer: Cow<'static, SentimentAnalyzer>,
    precision: u32,
}

impl MetricEngine {
    pub const DEFAULT_PRECISION: u32 = 2;

    pub fn new(metrics: Vec<Box<dyn Metric>>) -> Self {
        Self {
            metrics,
            analyzer: Cow::Borrowed(SentimentAnalyzer::shared()),
            precision: Self::DEFAULT_PRECISION,
        }
    }

    /// Precision above `MAX_PRECISION` is clamped.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    pub fn with_analyzer(mut self, analyzer: SentimentAnalyzer) -> Self {
        self.analyzer = Cow::Owned(analyzer);
        self
    }

    /// Build an engine from validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let opportunity = OpportunityMetric::new(
            config.opportunity.markers.as_slice(),
            config.opportunity.saturation,
        )?;
        let resonance = ResonanceMetric {
            weights: ResonanceWeights {
                subjectivity: config.resonance.subjectivity_weight,
                polarity: config.resonance.polarity_weight,
            },
        };
        let metrics: Vec<Box<dyn Metric>> = vec![
            Box::new(JoyMetric),
            Box::new(OutcomesMetric),
            Box::new(JourneyMetric),
            Box::new(opportunity),
            Box::new(resonance),
        ];

        let mut engine = Self::new(metrics).with_precision(config.output.precision);
        if !config.sentiment.lexicon.is_empty() {
            debug!(
                entries = config.sentiment.lexicon.len(),
                "extending sentiment lexicon from config"
            );
            engine = engine.with_analyzer(SentimentAnalyzer::with_entries(
                &config.sentiment.lexicon,
            ));
        }
        Ok(engine)
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn sentiment(&self, text: &ResponseText) -> Sentiment {
        self.analyzer.analyze(text)
    }

    /// Score one response; every field is rounded to the engine precision.
    pub fn evaluate(&self, text: &ResponseText, keywords: &KeywordSet) -> Result<MetricResult> {
        let input = MetricInput {
            text,
            keywords,
            sentiment: self.sentiment(text),
        };
        let raw = run_metrics(&self.metrics, &input)?;
        let p = self.precision;
        Ok(MetricResult {
            joy: round_to(raw.joy, p),
            outcomes: round_to(raw.outcomes, p),
            journey: round_to(raw.journey, p),
            opportunity: round_to(raw.opportunity, p),
            emotional_resonance: round_to(raw.emotional_resonance, p),
            polarity: round_to(raw.polarity, p),
            subjectivity: round_to(raw.subjectivity, p),
            coverage: round_to(raw.coverage, p),
        })
    }
}

impl Default for MetricEngine {
    fn default() -> Self {
        Self::new(default_metrics())
    }
}

/// Score one response with the default engine.
pub fn evaluate(text: &ResponseText, keywords: &KeywordSet) -> Result<MetricResult> {
    MetricEngine::default().evaluate(text, keywords)
}
