mod mode_category;
mod trip_record;

pub use mode_category::ModeCategory;
pub use trip_record::TripRecord;
