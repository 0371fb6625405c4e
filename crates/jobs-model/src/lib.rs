pub mod dimension;
pub mod error;
pub mod record;
pub mod summary;

pub use dimension::{BooleanField, Dimension};
pub use error::{ModelError, Result};
pub use record::{
    EMPTY_LIST, JobPosting, NOT_AVAILABLE, NOT_SPECIFIED, RawRecord, TRUE_LITERAL, fields,
    is_missing_marker,
};
pub use summary::{AggregateBucket, BooleanSplit, HistogramBin, KpiSummary, OTHER_BUCKET};
