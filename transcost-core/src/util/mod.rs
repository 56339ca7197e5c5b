pub mod csv_ops;
pub mod rounding;
pub mod serde_ops;
