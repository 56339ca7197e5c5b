pub mod aggregate;
pub mod model;
pub mod util;
