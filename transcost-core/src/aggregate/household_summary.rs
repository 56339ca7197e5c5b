use serde::{Deserialize, Serialize};

use crate::model::ZoneId;

/// finalized affordability result for one household. both values are whole
/// numbers: the monthly cost in currency units and the cost as a percentage of
/// income.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HouseholdSummary {
    pub zone: ZoneId,
    pub cost: i64,
    pub proportion: i64,
}
