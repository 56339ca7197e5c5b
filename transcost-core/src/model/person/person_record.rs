use serde::{Deserialize, Serialize};

use super::PersonId;
use crate::model::household::HouseholdId;

/// row of the persons survey file. the license and pass columns are integer
/// flags where any non-zero value means the person holds one.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct PersonRecord {
    #[serde(rename = "Unique")]
    pub household_id: HouseholdId,
    #[serde(rename = "Serial")]
    pub serial: String,
    #[serde(rename = "Per#")]
    pub person_number: String,
    #[serde(rename = "Lic")]
    pub license: i64,
    #[serde(rename = "Transit Pass")]
    pub transit_pass: i64,
    /// category code (YO, Elem, WFT, ...) used to price a transit pass
    #[serde(rename = "Per Type")]
    pub person_type: String,
}

impl PersonRecord {
    pub fn person_id(&self) -> PersonId {
        PersonId::new(self.household_id, &self.serial, &self.person_number)
    }

    pub fn has_license(&self) -> bool {
        self.license != 0
    }

    pub fn has_transit_pass(&self) -> bool {
        self.transit_pass != 0
    }
}
