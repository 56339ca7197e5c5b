use std::{fs::File, path::Path};

use super::TransCostAppError;

pub const ZONE_HEADER: [&str; 3] = ["zone", "cost", "proportion"];
pub const POINT_HEADER: [&str; 4] = ["lon", "lat", "cost", "proportion"];

/// opens a CSV writer at `path`, replacing any existing file, and writes the
/// header row. the header is written even when no rows follow.
pub fn create_writer(path: &Path, header: &[&str]) -> Result<csv::Writer<File>, TransCostAppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| TransCostAppError::Write {
            path: path.to_path_buf(),
            message: format!("unable to create output file: {e}"),
        })?;
    writer
        .write_record(header)
        .map_err(|e| TransCostAppError::Write {
            path: path.to_path_buf(),
            message: format!("unable to write header: {e}"),
        })?;
    Ok(writer)
}

pub fn finish(mut writer: csv::Writer<File>, path: &Path) -> Result<(), TransCostAppError> {
    writer.flush().map_err(|e| TransCostAppError::Write {
        path: path.to_path_buf(),
        message: format!("failed to flush: {e}"),
    })
}
