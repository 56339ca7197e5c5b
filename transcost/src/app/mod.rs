mod app_config;
mod cli;
mod error;
mod output;
pub mod pipeline;

pub use app_config::{TransCostConfig, DEFAULT_CONFIG_FILE};
pub use cli::TransCostApp;
pub use error::TransCostAppError;
