mod person_id;
mod person_record;

pub use person_id::PersonId;
pub use person_record::PersonRecord;
