//! Chart-ready result shapes produced by the transform stage.

use serde::{Deserialize, Serialize};

/// Name of the synthetic bucket that absorbs entries beyond a ranking cutoff.
pub const OTHER_BUCKET: &str = "Other";

/// A named count produced by grouping records on a dimension value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateBucket {
    pub name: String,
    pub count: usize,
}

impl AggregateBucket {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    pub fn is_other(&self) -> bool {
        self.name == OTHER_BUCKET
    }
}

/// One histogram bin. Bins are left-inclusive and right-exclusive except the
/// last, which also includes its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

/// True/false counts of a boolean field, with display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanSplit {
    pub yes_label: String,
    pub yes: usize,
    pub no_label: String,
    pub no: usize,
}

impl BooleanSplit {
    pub fn total(&self) -> usize {
        self.yes + self.no
    }

    /// The split as two buckets, true side first. Zero counts are kept.
    pub fn as_buckets(&self) -> [AggregateBucket; 2] {
        [
            AggregateBucket::new(self.yes_label.clone(), self.yes),
            AggregateBucket::new(self.no_label.clone(), self.no),
        ]
    }
}

/// Headline figures for the whole record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_count: usize,
    pub distinct_company_count: usize,
    /// `None` when no annual USD salary passed the filter.
    pub median_annual_usd_salary: Option<f64>,
}
