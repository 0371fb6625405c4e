//! Semicolon-delimited dataset reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use jobs_model::RawRecord;

use crate::error::{IngestError, Result};

/// Field separator of the dataset file.
pub const DELIMITER: u8 = b';';

/// Dataset location used when the caller does not name one.
pub const DEFAULT_DATASET_PATH: &str = "data/clean-jobs-enriched-csv-enriched.csv";

/// Maximum dataset size (256 MB).
pub const MAX_DATASET_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Check the dataset size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_DATASET_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Loads every row of the dataset at `path`.
///
/// Rows shorter than the header are kept; their missing trailing fields are
/// simply absent from the record and read as blank downstream.
pub fn read_job_file(path: &Path) -> Result<Vec<RawRecord>> {
    check_file_size(path)?;
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let records = read_job_records(file, path)?;
    info!(
        path = %path.display(),
        records = records.len(),
        "loaded dataset"
    );
    Ok(records)
}

/// Parses delimited text from any reader. `origin` is used in error messages.
pub fn read_job_records<R: Read>(input: R, origin: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::parse(origin, &e))?
        .iter()
        .map(|name| name.trim_matches('\u{feff}').trim().to_string())
        .collect();

    if headers.is_empty() {
        return Err(IngestError::EmptyFile {
            path: origin.to_path_buf(),
        });
    }
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: origin.to_path_buf(),
        });
    }
    debug!(columns = headers.len(), "read header row");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::parse(origin, &e))?;
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        records.push(record);
    }
    Ok(records)
}
