mod zone;
mod zone_collection;

pub use zone::Zone;
pub use zone_collection::ZoneCollection;
