//! Headline KPIs.

use std::collections::HashSet;

use jobs_model::{JobPosting, KpiSummary};

use crate::filter::{SalaryFilter, filtered_salaries};

/// Median of `values`; the mean of the two middle values for even lengths.
/// `None` when there is nothing to take the median of. NaN is ignored.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Record count, distinct non-empty companies, and the median annual USD
/// salary (see [`SalaryFilter::kpi`]).
pub fn summarize(records: &[JobPosting]) -> KpiSummary {
    let companies: HashSet<&str> = records
        .iter()
        .map(|r| r.company.as_str())
        .filter(|c| !c.is_empty())
        .collect();
    KpiSummary {
        total_count: records.len(),
        distinct_company_count: companies.len(),
        median_annual_usd_salary: median(&filtered_salaries(records, &SalaryFilter::kpi())),
    }
}

/// Salary in thousands of dollars, e.g. `$65k`; `N/A` for no data.
pub fn format_salary_k(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${}k", (v / 1000.0).round() as i64),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annual_usd(value: f64, company: &str) -> JobPosting {
        JobPosting {
            company: company.to_string(),
            salary_value: Some(value),
            salary_type: "annual".to_string(),
            salary_currency: "USD".to_string(),
            ..JobPosting::default()
        }
    }

    #[test]
    fn median_even_and_odd() {
        assert_eq!(median(&[80_000.0, 50_000.0, 70_000.0, 60_000.0]), Some(65_000.0));
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[7.0]), Some(7.0));
    }

    #[test]
    fn median_of_nothing_is_none() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[f64::NAN]), None);
    }

    #[test]
    fn summarize_counts_and_median() {
        let records = vec![
            annual_usd(50_000.0, "Acme"),
            annual_usd(60_000.0, "Acme"),
            annual_usd(70_000.0, "Globex"),
            annual_usd(80_000.0, ""),
            annual_usd(500.0, "Initech"),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total_count, 5);
        assert_eq!(summary.distinct_company_count, 3);
        assert_eq!(summary.median_annual_usd_salary, Some(65_000.0));
    }

    #[test]
    fn summarize_without_salaries_reports_no_data() {
        let summary = summarize(&[JobPosting::default()]);
        assert_eq!(summary.total_count, 1);
        assert_eq!(summary.distinct_company_count, 0);
        assert_eq!(summary.median_annual_usd_salary, None);
    }

    #[test]
    fn salary_formatting() {
        assert_eq!(format_salary_k(Some(65_000.0)), "$65k");
        assert_eq!(format_salary_k(Some(72_600.0)), "$73k");
        assert_eq!(format_salary_k(None), "N/A");
    }
}
