pub mod cost;
pub mod household;
pub mod person;
pub mod trip;
mod zone_id;

pub use zone_id::ZoneId;
