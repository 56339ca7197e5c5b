use geo::Point;

use super::HouseholdPoint;

/// what happened when placing a single household.
#[derive(Clone, Debug, PartialEq)]
pub enum PlacementOutcome {
    Placed {
        /// accepted point in the projected system
        projected: Point<f64>,
        point: HouseholdPoint,
        tries: usize,
        topology_faults: usize,
    },
    /// the household's zone is not in the zone collection
    ZoneMissing,
    /// no acceptable point within the retry cap
    Exhausted { topology_faults: usize },
    /// the accepted point could not be converted to geographic coordinates
    TransformFailed { topology_faults: usize },
}
