mod engine;
mod error;
mod household_summary;
mod stats;

pub use engine::CostAggregationEngine;
pub use error::AggregationError;
pub use household_summary::HouseholdSummary;
pub use stats::AggregationStats;
