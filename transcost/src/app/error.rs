use std::path::PathBuf;

use transcost_core::aggregate::AggregationError;
use transcost_geo::GeoError;

#[derive(thiserror::Error, Debug)]
pub enum TransCostAppError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error(transparent)]
    Geo(#[from] GeoError),
    #[error("failure writing to {path}: {message}")]
    Write { path: PathBuf, message: String },
}
