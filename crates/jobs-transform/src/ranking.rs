//! Ranked truncation of aggregate buckets.

use jobs_model::{AggregateBucket, OTHER_BUCKET};

/// Sorts by count, highest first. The sort is stable, so equal counts keep
/// their input order.
pub fn rank(mut buckets: Vec<AggregateBucket>) -> Vec<AggregateBucket> {
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}

/// The `n` highest-count buckets.
pub fn top_n(buckets: Vec<AggregateBucket>, n: usize) -> Vec<AggregateBucket> {
    let mut ranked = rank(buckets);
    ranked.truncate(n);
    ranked
}

/// Like [`top_n`], with everything past the cutoff summed into one trailing
/// `Other` bucket. No `Other` bucket is added when nothing was cut.
///
/// If a kept bucket is itself named `Other`, the remainder is added to it
/// instead, so bucket names stay unique.
pub fn top_n_with_other(buckets: Vec<AggregateBucket>, n: usize) -> Vec<AggregateBucket> {
    let mut ranked = rank(buckets);
    let rest: usize = ranked.iter().skip(n).map(|b| b.count).sum();
    ranked.truncate(n);
    if rest > 0 {
        match ranked.iter_mut().find(|b| b.is_other()) {
            Some(existing) => existing.count += rest,
            None => ranked.push(AggregateBucket::new(OTHER_BUCKET, rest)),
        }
    }
    ranked
}

/// The highest-count bucket and an `Other` bucket holding the sum of every
/// other bucket (possibly zero). `None` when there are no buckets.
pub fn single_dominant_with_other(
    buckets: Vec<AggregateBucket>,
) -> Option<(AggregateBucket, AggregateBucket)> {
    let mut ranked = rank(buckets).into_iter();
    let dominant = ranked.next()?;
    let rest = ranked.map(|b| b.count).sum();
    Some((dominant, AggregateBucket::new(OTHER_BUCKET, rest)))
}
