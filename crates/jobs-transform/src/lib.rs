//! Job postings transformation pipeline.
//!
//! This crate turns raw rows into chart-ready summaries:
//!
//! - **normalization**: typed records from raw rows (numbers, flags, lists, defaults)
//! - **aggregate**: bucket counts per dimension, including list-valued dimensions
//! - **ranking**: top-N truncation, "Other" roll-up, dominant-value splits
//! - **filter**: salary sub-population selection
//! - **binning**: equal-width histograms
//! - **summary**: headline KPIs and median
//! - **dashboard**: the full chart set assembled from the above
//!
//! Nothing here renders or performs I/O; every function takes an immutable
//! slice and returns freshly allocated output.

pub mod aggregate;
pub mod binning;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod normalization;
pub mod ranking;
pub mod summary;

pub use aggregate::{aggregate, boolean_split};
pub use binning::histogram;
pub use dashboard::{
    Chart, ChartData, ChartKind, CountUnit, Dashboard, DashboardOptions, build_dashboard,
};
pub use error::BinningError;
pub use filter::{SalaryFilter, filtered_salaries};
pub use normalization::{
    NormalizationReport, NormalizedSet, normalize, normalize_records, parse_flag, parse_list,
    parse_salary,
};
pub use ranking::{rank, single_dominant_with_other, top_n, top_n_with_other};
pub use summary::{format_salary_k, median, summarize};
