mod coordinate_transform;
mod proj_transform;
mod projection_config;

pub use coordinate_transform::CoordinateTransform;
pub use proj_transform::ProjTransform;
pub use projection_config::ProjectionConfig;
