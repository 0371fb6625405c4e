//! Raw and normalized job posting records.
//!
//! A [`RawRecord`] is one row of the source file keyed by header name. A
//! [`JobPosting`] is the typed record every downstream stage consumes; it is
//! built once at load time and never mutated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default for blank seniority and country fields.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Default for a blank source field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Encoding of an empty list-valued field.
pub const EMPTY_LIST: &str = "[]";

/// The only token that coerces to `true` in boolean fields (case-sensitive).
pub const TRUE_LITERAL: &str = "True";

/// Column names of the source file.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const COMPANY: &str = "company";
    pub const COUNTRY: &str = "country";
    pub const SENIORITY_LEVEL: &str = "seniority_level";
    pub const SOURCE: &str = "source";
    pub const SALARY_VALUE: &str = "salary_value";
    pub const SALARY_TYPE: &str = "salary_type";
    pub const SALARY_CURRENCY: &str = "salary_currency";
    pub const HYBRID_POLICY: &str = "hybrid_policy";
    pub const VISA_SPONSORSHIP: &str = "visa_sponsorship";
    pub const TECHNICAL_SKILLS: &str = "technical_skills";
    pub const TOOLS_USED: &str = "tools_used";
    pub const DOMAINS: &str = "domains";
}

/// Returns true for values that mark missing data and must never be counted.
pub fn is_missing_marker(value: &str) -> bool {
    value.trim().is_empty() || value == EMPTY_LIST || value == NOT_SPECIFIED
}

/// One parsed row: field name to untyped string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Field value, or the empty string when the row has no such column.
    pub fn get_or_blank(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A normalized job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    /// Absent when the source value was blank, unparsable or non-finite.
    pub salary_value: Option<f64>,
    pub salary_type: String,
    pub salary_currency: String,
    pub hybrid_policy: bool,
    pub visa_sponsorship: bool,
    pub technical_skills: Vec<String>,
    pub tools_used: Vec<String>,
    pub domains: Vec<String>,
    /// [`NOT_SPECIFIED`] when blank.
    pub seniority_level: String,
    /// [`NOT_SPECIFIED`] when blank.
    pub country: String,
    /// [`NOT_AVAILABLE`] when blank.
    pub source: String,
}

impl Default for JobPosting {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            salary_value: None,
            salary_type: String::new(),
            salary_currency: String::new(),
            hybrid_policy: false,
            visa_sponsorship: false,
            technical_skills: Vec::new(),
            tools_used: Vec::new(),
            domains: Vec::new(),
            seniority_level: NOT_SPECIFIED.to_string(),
            country: NOT_SPECIFIED.to_string(),
            source: NOT_AVAILABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_markers() {
        assert!(is_missing_marker(""));
        assert!(is_missing_marker("   "));
        assert!(is_missing_marker("[]"));
        assert!(is_missing_marker("Not specified"));
        assert!(!is_missing_marker("N/A"));
        assert!(!is_missing_marker("not specified"));
    }

    #[test]
    fn raw_record_lookup() {
        let raw: RawRecord = [("title", "Data Engineer"), ("country", "")]
            .into_iter()
            .collect();
        assert_eq!(raw.get("title"), Some("Data Engineer"));
        assert_eq!(raw.get("country"), Some(""));
        assert_eq!(raw.get("company"), None);
        assert_eq!(raw.get_or_blank("company"), "");
        assert_eq!(raw.len(), 2);
    }
}
