use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GeoError {
    #[error("failure reading file from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse '{path}' due to: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("failed to deserialize {col} of feature {feature} in file '{path}' due to: {message}")]
    Deserialize {
        col: String,
        feature: usize,
        path: PathBuf,
        message: String,
    },
    #[error("failure building spatial model: {0}")]
    Build(String),
    #[error("failure transforming coordinates: {0}")]
    Transform(String),
    #[error("failure writing household point: {0}")]
    Write(String),
}
