mod engine;
mod household_point;
mod placement_config;
mod placement_outcome;
mod placement_stats;
mod sampler;

pub use engine::PlacementEngine;
pub use household_point::HouseholdPoint;
pub use placement_config::PlacementConfig;
pub use placement_outcome::PlacementOutcome;
pub use placement_stats::PlacementStats;
pub use sampler::{PointSampler, ZoneSample};
