use std::{fs::File, io::Read, path::Path};

use serde::de::DeserializeOwned;

use crate::aggregate::AggregationError;

/// opens a headed CSV file and yields its deserialized rows in file order.
/// any row that fails to deserialize is reported as a parse error naming the
/// file and the 1-based data row.
pub fn read_records<T>(
    path: &Path,
) -> Result<impl Iterator<Item = Result<T, AggregationError>>, AggregationError>
where
    T: DeserializeOwned,
{
    let file = File::open(path).map_err(|e| AggregationError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let file_name = path.to_string_lossy().to_string();
    Ok(deserialize_records(file, &file_name))
}

/// deserializes rows from any reader. column values are whitespace-trimmed and
/// columns absent from the row type are ignored.
pub fn deserialize_records<R, T>(
    reader: R,
    file_name: &str,
) -> impl Iterator<Item = Result<T, AggregationError>>
where
    R: Read,
    T: DeserializeOwned,
{
    let file_name = file_name.to_string();
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize::<T>()
        .enumerate()
        .map(move |(idx, row)| {
            row.map_err(|e| AggregationError::Parse {
                file: file_name.clone(),
                row: idx + 1,
                message: e.to_string(),
            })
        })
}
