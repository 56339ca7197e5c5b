use std::path::PathBuf;

use crate::model::{household::HouseholdId, person::PersonId};

#[derive(thiserror::Error, Debug)]
pub enum AggregationError {
    #[error("failure reading file from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse row {row} of '{file}' due to: {message}")]
    Parse {
        file: String,
        row: usize,
        message: String,
    },
    #[error("person {person_id} holds a transit pass but has unknown person type '{person_type}'")]
    UnknownPersonType {
        person_id: PersonId,
        person_type: String,
    },
    #[error("{context} references household {household_id} which is not in the households file")]
    UnknownHousehold {
        household_id: HouseholdId,
        context: String,
    },
    #[error("trip row {row} by person {person_id} uses auto mode '{mode}' but has no distance")]
    MissingDistance {
        row: usize,
        person_id: PersonId,
        mode: String,
    },
    #[error("transit trip references person {person_id} which is not in the persons file")]
    UnknownPerson { person_id: PersonId },
}
