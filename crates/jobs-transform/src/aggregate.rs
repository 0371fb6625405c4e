//! Grouping and counting.

use std::collections::HashSet;

use indexmap::IndexMap;

use jobs_model::{
    AggregateBucket, BooleanField, BooleanSplit, Dimension, JobPosting, is_missing_marker,
};

/// Counts records per value of `dimension`.
///
/// A single-valued dimension adds at most one to one bucket per record. A
/// multi-valued dimension ([`Dimension::is_multi_valued`]) adds one to every
/// distinct value in the record's list, so a posting listing three skills
/// counts toward three buckets. Blank values and the `[]` and
/// `Not specified` sentinels never produce a bucket.
///
/// Buckets come back in first-encountered order; callers rank them.
pub fn aggregate(records: &[JobPosting], dimension: Dimension) -> Vec<AggregateBucket> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for record in records {
        seen.clear();
        for value in dimension.values(record) {
            let value = value.as_str();
            if is_missing_marker(value) || !seen.insert(value) {
                continue;
            }
            *counts.entry(value).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(name, count)| AggregateBucket::new(name, count))
        .collect()
}

/// Counts records with `field` set and unset.
pub fn boolean_split(records: &[JobPosting], field: BooleanField) -> BooleanSplit {
    let yes = records.iter().filter(|record| field.get(record)).count();
    let (yes_label, no_label) = field.labels();
    BooleanSplit {
        yes_label: yes_label.to_string(),
        yes,
        no_label: no_label.to_string(),
        no: records.len() - yes,
    }
}
