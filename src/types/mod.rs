mod core;
mod metric_results;

pub use self::core::{KeywordSet, Leader, ResponseText};
pub use self::metric_results::{ComparisonSummary, MetricResult, Sentiment};
