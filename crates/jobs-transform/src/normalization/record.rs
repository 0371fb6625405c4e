//! Whole-record normalization.

use serde::{Deserialize, Serialize};

use jobs_model::{JobPosting, NOT_AVAILABLE, NOT_SPECIFIED, RawRecord, fields};

use super::flags::{is_canonical_flag, parse_flag};
use super::list::parse_list;
use super::numeric::parse_salary;

/// Converts one raw row into a [`JobPosting`].
///
/// Pure and total: every input yields exactly one record. Missing columns
/// read as blank and take the field's default.
pub fn normalize(raw: &RawRecord) -> JobPosting {
    JobPosting {
        title: raw.get_or_blank(fields::TITLE).to_string(),
        company: raw.get_or_blank(fields::COMPANY).to_string(),
        salary_value: parse_salary(raw.get_or_blank(fields::SALARY_VALUE)),
        salary_type: raw.get_or_blank(fields::SALARY_TYPE).to_string(),
        salary_currency: raw.get_or_blank(fields::SALARY_CURRENCY).to_string(),
        hybrid_policy: parse_flag(raw.get_or_blank(fields::HYBRID_POLICY)),
        visa_sponsorship: parse_flag(raw.get_or_blank(fields::VISA_SPONSORSHIP)),
        technical_skills: parse_list(raw.get_or_blank(fields::TECHNICAL_SKILLS)),
        tools_used: parse_list(raw.get_or_blank(fields::TOOLS_USED)),
        domains: parse_list(raw.get_or_blank(fields::DOMAINS)),
        seniority_level: or_default(raw, fields::SENIORITY_LEVEL, NOT_SPECIFIED),
        country: or_default(raw, fields::COUNTRY, NOT_SPECIFIED),
        source: or_default(raw, fields::SOURCE, NOT_AVAILABLE),
    }
}

fn or_default(raw: &RawRecord, field: &str, default: &str) -> String {
    let value = raw.get_or_blank(field);
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Counts of values that fell back to a default during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationReport {
    pub records: usize,
    /// Non-blank salary strings that did not parse to a finite number.
    pub unparsable_salaries: usize,
    /// Boolean values other than `True`, `False` or blank (coerced to false).
    pub non_canonical_flags: usize,
    pub defaulted_seniority: usize,
    pub defaulted_country: usize,
    pub defaulted_source: usize,
}

impl NormalizationReport {
    /// Number of values silently replaced because they could not be read.
    pub fn fallback_count(&self) -> usize {
        self.unparsable_salaries + self.non_canonical_flags
    }

    fn observe(&mut self, raw: &RawRecord, posting: &JobPosting) {
        self.records += 1;
        if posting.salary_value.is_none() && !raw.get_or_blank(fields::SALARY_VALUE).trim().is_empty()
        {
            self.unparsable_salaries += 1;
        }
        for field in [fields::HYBRID_POLICY, fields::VISA_SPONSORSHIP] {
            if !is_canonical_flag(raw.get_or_blank(field)) {
                self.non_canonical_flags += 1;
            }
        }
        if raw.get_or_blank(fields::SENIORITY_LEVEL).trim().is_empty() {
            self.defaulted_seniority += 1;
        }
        if raw.get_or_blank(fields::COUNTRY).trim().is_empty() {
            self.defaulted_country += 1;
        }
        if raw.get_or_blank(fields::SOURCE).trim().is_empty() {
            self.defaulted_source += 1;
        }
    }
}

/// The normalized record set plus its data-quality report.
#[derive(Debug, Clone, Default)]
pub struct NormalizedSet {
    pub records: Vec<JobPosting>,
    pub report: NormalizationReport,
}

/// Normalizes every row, in order. No row is dropped.
pub fn normalize_records(raws: &[RawRecord]) -> NormalizedSet {
    let mut report = NormalizationReport::default();
    let records = raws
        .iter()
        .map(|raw| {
            let posting = normalize(raw);
            report.observe(raw, &posting);
            posting
        })
        .collect();
    NormalizedSet { records, report }
}
