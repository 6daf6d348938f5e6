//! Score rows and their per-company summaries.

mod aggregate;
mod model;

pub use aggregate::aggregate;
pub use model::{CategorySummary, CompanySummary, ScoreRow};
