//! Equal-width histograms over a numeric sample.

use jobs_model::HistogramBin;

use crate::error::BinningError;

/// Bins `values` into `bucket_count` equal-width bins spanning
/// `[min(values), max(values)]`.
///
/// Each bin includes its lower bound and excludes its upper bound, except the
/// last bin, whose upper bound is exactly the maximum and is included. Every
/// finite value lands in exactly one bin. Non-finite values are skipped.
///
/// When all values are equal the domain has zero width and a single bin
/// `[v, v]` holds everything.
///
/// # Errors
///
/// [`BinningError::ZeroBuckets`] if `bucket_count` is zero and
/// [`BinningError::EmptyDomain`] if there is no finite value.
pub fn histogram(
    values: &[f64],
    bucket_count: usize,
) -> Result<Vec<HistogramBin>, BinningError> {
    if bucket_count == 0 {
        return Err(BinningError::ZeroBuckets);
    }
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let (min, max) = domain(&finite).ok_or(BinningError::EmptyDomain)?;

    if min == max {
        return Ok(vec![HistogramBin {
            lower_bound: min,
            upper_bound: max,
            count: finite.len(),
        }]);
    }

    let last = bucket_count - 1;
    let boundary = |i: usize| interpolate(min, max, i as f64 / bucket_count as f64);
    let mut bins: Vec<HistogramBin> = (0..bucket_count)
        .map(|i| HistogramBin {
            lower_bound: boundary(i),
            upper_bound: if i == last { max } else { boundary(i + 1) },
            count: 0,
        })
        .collect();

    // Halved so the span stays finite even for [-f64::MAX, f64::MAX].
    let half_span = max / 2.0 - min / 2.0;
    for value in finite {
        let position = (value / 2.0 - min / 2.0) / half_span * bucket_count as f64;
        let mut index = (position.floor() as usize).min(last);
        // Snap to the bin whose stored bounds contain the value.
        while index > 0 && value < bins[index].lower_bound {
            index -= 1;
        }
        while index < last && value >= bins[index + 1].lower_bound {
            index += 1;
        }
        bins[index].count += 1;
    }
    Ok(bins)
}

/// Point at fraction `t` of `[min, max]` without computing `max - min`.
fn interpolate(min: f64, max: f64, t: f64) -> f64 {
    min * (1.0 - t) + max * t
}

fn domain(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_bins_over_five_values() {
        let bins = histogram(&[10.0, 20.0, 30.0, 40.0, 50.0], 2).unwrap();
        assert_eq!(
            bins,
            vec![
                HistogramBin {
                    lower_bound: 10.0,
                    upper_bound: 30.0,
                    count: 2
                },
                HistogramBin {
                    lower_bound: 30.0,
                    upper_bound: 50.0,
                    count: 3
                },
            ]
        );
    }

    #[test]
    fn max_lands_in_last_bin() {
        let bins = histogram(&[0.0, 1.0], 4).unwrap();
        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[3].count, 1);
        assert_eq!(bins[3].upper_bound, 1.0);
    }

    #[test]
    fn bins_are_contiguous() {
        let bins = histogram(&[3.0, 7.5, 11.0, 0.2, 9.9], 7).unwrap();
        assert_eq!(bins.first().unwrap().lower_bound, 0.2);
        assert_eq!(bins.last().unwrap().upper_bound, 11.0);
        for pair in bins.windows(2) {
            assert_eq!(pair[0].upper_bound, pair[1].lower_bound);
        }
    }

    #[test]
    fn empty_values_signal_empty_domain() {
        assert_eq!(histogram(&[], 5), Err(BinningError::EmptyDomain));
        assert_eq!(histogram(&[f64::NAN], 5), Err(BinningError::EmptyDomain));
    }

    #[test]
    fn zero_buckets_is_rejected() {
        assert_eq!(histogram(&[1.0], 0), Err(BinningError::ZeroBuckets));
    }

    #[test]
    fn degenerate_domain_gets_one_bin() {
        let bins = histogram(&[42.0, 42.0, 42.0], 10).unwrap();
        assert_eq!(
            bins,
            vec![HistogramBin {
                lower_bound: 42.0,
                upper_bound: 42.0,
                count: 3
            }]
        );
    }

    #[test]
    fn widest_finite_domain_stays_finite() {
        let bins = histogram(&[-f64::MAX, f64::MAX], 2).unwrap();
        assert_eq!(
            bins,
            vec![
                HistogramBin {
                    lower_bound: -f64::MAX,
                    upper_bound: 0.0,
                    count: 1
                },
                HistogramBin {
                    lower_bound: 0.0,
                    upper_bound: f64::MAX,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let bins = histogram(&[1.0, f64::INFINITY, 3.0], 2).unwrap();
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
        assert_eq!(bins.last().unwrap().upper_bound, 3.0);
    }
}
