use serde::{Deserialize, Serialize};

use crate::model::household::HouseholdId;

/// composite identity of a survey respondent. persons and trips both carry
/// the three parts, which are compared field by field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PersonId {
    pub household_id: HouseholdId,
    pub serial: String,
    pub person_number: String,
}

impl PersonId {
    pub fn new(household_id: HouseholdId, serial: &str, person_number: &str) -> PersonId {
        PersonId {
            household_id,
            serial: serial.to_string(),
            person_number: person_number.to_string(),
        }
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.household_id, self.serial, self.person_number
        )
    }
}
