//! JOJO Library
//!
//! Scores AI model responses with heuristic "JOJO" metrics so two answers to
//! the same prompt can be compared side by side.
//!
//! # Module Overview
//!
//! - [`metrics`] - Joy, Outcomes, Journey, Opportunity, Emotional Resonance
//! - [`sentiment`] - Lexicon-based polarity/subjectivity analysis
//! - [`loader`] - Response and keyword file loading
//! - [`config`] - Configuration file support
//! - [`types`] - Core data types and structures
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```
//! use jojo_lib::{evaluate, KeywordSet, ResponseText};
//!
//! # fn example() -> jojo_lib::Result<()> {
//! let text = ResponseText::new("I love this! You should try adding more examples.");
//! let keywords = KeywordSet::parse_list("examples,love");
//! let result = evaluate(&text, &keywords)?;
//! assert_eq!(result.outcomes, 2.0);
//! assert!(result.opportunity > 0.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod output;
pub mod sentiment;
pub mod text;
pub mod types;

pub use config::Config;
pub use error::{ErrorCategory, ErrorPayload, JojoError, Result};
pub use loader::{load_keywords, load_text, parse_keyword_lines};
// Metrics module re-exports
pub use metrics::{
    // Per-metric scoring functions
    emotional_resonance, evaluate, keyword_coverage, score_journey, score_joy,
    score_opportunity, score_outcomes,
    // Engine and metric implementations (for custom configuration)
    default_metrics, run_metrics, JourneyMetric, JoyMetric, Metric, MetricEngine, MetricInput,
    MetricKind, OpportunityMetric, OutcomesMetric, ResonanceMetric, ResonanceWeights,
};
pub use output::{
    CompareOutput, ErrorOutput, Evaluation, JojoOutput, ScoreOutput, JOJO_OUTPUT_VERSION,
};
pub use sentiment::{sentiment, LexiconEntry, SentimentAnalyzer};
pub use types::{ComparisonSummary, KeywordSet, Leader, MetricResult, ResponseText, Sentiment};
