mod compare;
mod score;

pub use compare::run_compare;
pub use score::run_score;
