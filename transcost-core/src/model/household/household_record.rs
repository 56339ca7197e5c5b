use serde::{Deserialize, Serialize};

use super::HouseholdId;
use crate::{model::ZoneId, util::serde_ops::non_negative_f64};

/// row of the households survey file. columns not listed here are ignored.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct HouseholdRecord {
    #[serde(rename = "Unique")]
    pub household_id: HouseholdId,
    /// annual household income in thousands of currency units
    #[serde(rename = "Inc", deserialize_with = "non_negative_f64")]
    pub income: f64,
    #[serde(rename = "Zone")]
    pub zone: ZoneId,
    #[serde(rename = "Veh")]
    pub vehicle_count: u32,
}
