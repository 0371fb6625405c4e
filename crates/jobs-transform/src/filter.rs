//! Salary sub-population selection.

use serde::{Deserialize, Serialize};

use jobs_model::JobPosting;

/// Selects postings by salary type, currency and an open salary range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryFilter {
    pub salary_type: String,
    pub currency: String,
    /// Exclusive lower bound.
    #[serde(default)]
    pub above: Option<f64>,
    /// Exclusive upper bound.
    #[serde(default)]
    pub below: Option<f64>,
}

impl SalaryFilter {
    /// Annual USD salaries above 1000, used for the median KPI.
    pub fn kpi() -> Self {
        Self {
            salary_type: "annual".to_string(),
            currency: "USD".to_string(),
            above: Some(1_000.0),
            below: None,
        }
    }

    /// Annual USD salaries strictly between 20k and 500k, used for the
    /// distribution histogram.
    pub fn distribution() -> Self {
        Self {
            salary_type: "annual".to_string(),
            currency: "USD".to_string(),
            above: Some(20_000.0),
            below: Some(500_000.0),
        }
    }

    /// Salary of `posting` if it passes the filter.
    pub fn select(&self, posting: &JobPosting) -> Option<f64> {
        if posting.salary_type != self.salary_type || posting.salary_currency != self.currency {
            return None;
        }
        let value = posting.salary_value?;
        if self.above.is_some_and(|floor| value <= floor) {
            return None;
        }
        if self.below.is_some_and(|ceiling| value >= ceiling) {
            return None;
        }
        Some(value)
    }
}

impl Default for SalaryFilter {
    fn default() -> Self {
        Self::distribution()
    }
}

/// Salaries of every posting passing `filter`, in record order.
pub fn filtered_salaries(records: &[JobPosting], filter: &SalaryFilter) -> Vec<f64> {
    records.iter().filter_map(|r| filter.select(r)).collect()
}
