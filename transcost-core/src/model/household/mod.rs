mod household;
mod household_id;
mod household_record;

pub use household::Household;
pub use household_id::HouseholdId;
pub use household_record::HouseholdRecord;
