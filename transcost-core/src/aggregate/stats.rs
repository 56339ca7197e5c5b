use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// row counts and silent drops observed while aggregating household costs.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct AggregationStats {
    /// household rows read, including duplicates
    pub households: usize,
    /// person rows read
    pub persons: usize,
    /// trip rows read
    pub trips: usize,
    /// household rows that replaced an earlier row with the same id
    pub duplicate_households: usize,
    /// households excluded for reporting no positive income
    pub zero_income: usize,
    /// households excluded for spending more than their income on travel
    pub over_income: usize,
    /// households excluded because their cost or income share is not a number
    pub non_finite_cost: usize,
    /// households written to the summary collection
    pub emitted: usize,
    /// trips whose mode code is in no mode list, by code
    pub unrecognized_modes: IndexMap<String, usize>,
}

impl AggregationStats {
    pub fn add_unrecognized_mode(&mut self, mode: &str) -> bool {
        match self.unrecognized_modes.get_mut(mode) {
            Some(cnt) => {
                *cnt += 1;
                false
            }
            None => {
                let _ = self.unrecognized_modes.insert(mode.to_string(), 1);
                true
            }
        }
    }

    pub fn unrecognized_trips(&self) -> usize {
        self.unrecognized_modes.values().sum()
    }
}

impl std::fmt::Display for AggregationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let modes = self
            .unrecognized_modes
            .iter()
            .map(|(mode, cnt)| format!("{mode}={cnt}"))
            .join(", ");
        write!(
            f,
            "households={} persons={} trips={} duplicate_households={} zero_income={} over_income={} non_finite_cost={} emitted={} unrecognized_trips={} [{}]",
            self.households,
            self.persons,
            self.trips,
            self.duplicate_households,
            self.zero_income,
            self.over_income,
            self.non_finite_cost,
            self.emitted,
            self.unrecognized_trips(),
            modes
        )
    }
}
