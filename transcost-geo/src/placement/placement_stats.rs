use serde::{Deserialize, Serialize};

use super::PlacementOutcome;

/// tallies of placed and silently dropped households.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct PlacementStats {
    pub households: usize,
    pub placed: usize,
    pub zone_missing: usize,
    pub exhausted: usize,
    pub transform_failed: usize,
    /// faulted parcels skipped during containment tests, over all draws
    pub topology_faults: usize,
    /// draws spent on placed households
    pub tries: usize,
}

impl PlacementStats {
    pub fn add(&mut self, outcome: &PlacementOutcome) {
        self.households += 1;
        match outcome {
            PlacementOutcome::Placed {
                tries,
                topology_faults,
                ..
            } => {
                self.placed += 1;
                self.tries += tries;
                self.topology_faults += topology_faults;
            }
            PlacementOutcome::ZoneMissing => self.zone_missing += 1,
            PlacementOutcome::Exhausted { topology_faults } => {
                self.exhausted += 1;
                self.topology_faults += topology_faults;
            }
            PlacementOutcome::TransformFailed { topology_faults } => {
                self.transform_failed += 1;
                self.topology_faults += topology_faults;
            }
        }
    }

    pub fn dropped(&self) -> usize {
        self.zone_missing + self.exhausted + self.transform_failed
    }
}

impl std::fmt::Display for PlacementStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mean_tries = if self.placed == 0 {
            0.0
        } else {
            self.tries as f64 / self.placed as f64
        };
        write!(
            f,
            "households={} placed={} zone_missing={} exhausted={} transform_failed={} topology_faults={} mean_tries={mean_tries:.1}",
            self.households,
            self.placed,
            self.zone_missing,
            self.exhausted,
            self.transform_failed,
            self.topology_faults
        )
    }
}
