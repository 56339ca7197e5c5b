mod error;

pub mod parcel;
pub mod placement;
pub mod transform;
pub mod util;
pub mod zone;

pub use error::GeoError;
