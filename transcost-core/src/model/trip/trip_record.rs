use serde::{Deserialize, Serialize};

use crate::{
    model::{household::HouseholdId, person::PersonId},
    util::serde_ops::optional_non_negative_f64,
};

/// row of the daily trips file.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TripRecord {
    #[serde(rename = "UniqueID")]
    pub household_id: HouseholdId,
    #[serde(rename = "Serial")]
    pub serial: String,
    #[serde(rename = "Person#")]
    pub person_number: String,
    #[serde(rename = "Mode")]
    pub mode: String,
    /// trip distance in kilometers. only auto trips need one.
    #[serde(
        rename = "Dist",
        default,
        deserialize_with = "optional_non_negative_f64"
    )]
    pub distance_km: Option<f64>,
}

impl TripRecord {
    pub fn person_id(&self) -> PersonId {
        PersonId::new(self.household_id, &self.serial, &self.person_number)
    }
}
