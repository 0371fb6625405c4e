//! Job postings dataset ingestion.
//!
//! The dataset is a single semicolon-delimited text file whose first row
//! names the fields. Every data row becomes a [`RawRecord`] with untyped
//! string values; typing happens later in the normalizer.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use jobs_ingest::read_job_file;
//!
//! let records = read_job_file(Path::new("data/clean-jobs-enriched-csv-enriched.csv"))?;
//! println!("{} postings", records.len());
//! ```
//!
//! [`RawRecord`]: jobs_model::RawRecord

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Dataset Reading ===
pub use reader::{
    DEFAULT_DATASET_PATH, DELIMITER, MAX_DATASET_FILE_SIZE, check_file_size,
    check_file_size_with_limit, read_job_file, read_job_records,
};
