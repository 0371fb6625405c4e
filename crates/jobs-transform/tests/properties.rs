//! Property tests for normalization totality and histogram partitioning.

use jobs_model::{Dimension, RawRecord};
use jobs_transform::{aggregate, histogram, normalize, parse_list, top_n_with_other};
use proptest::prelude::*;

const FIELDS: [&str; 13] = [
    "title",
    "company",
    "salary_value",
    "salary_type",
    "salary_currency",
    "hybrid_policy",
    "visa_sponsorship",
    "technical_skills",
    "tools_used",
    "domains",
    "seniority_level",
    "country",
    "source",
];

fn raw_record() -> impl Strategy<Value = RawRecord> {
    proptest::collection::vec(
        (proptest::sample::select(FIELDS.to_vec()), any::<String>()),
        0..20,
    )
    .prop_map(|fields: Vec<(&str, String)>| fields.into_iter().collect())
}

proptest! {
    #[test]
    fn normalize_is_total(raw in raw_record()) {
        let posting = normalize(&raw);
        prop_assert!(!posting.seniority_level.trim().is_empty());
        prop_assert!(!posting.country.trim().is_empty());
        prop_assert!(!posting.source.trim().is_empty());
        prop_assert!(posting.salary_value.is_none_or(f64::is_finite));
    }

    #[test]
    fn parsed_list_tokens_are_clean(value in ".*") {
        for token in parse_list(&value) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.trim(), token.as_str());
            prop_assert!(!token.contains(['[', ']', '\'']));
        }
    }

    #[test]
    fn histogram_partitions_values(
        values in proptest::collection::vec(-1.0e6f64..1.0e6, 1..200),
        bucket_count in 1usize..40,
    ) {
        let bins = histogram(&values, bucket_count).unwrap();
        prop_assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        for pair in bins.windows(2) {
            prop_assert_eq!(pair[0].upper_bound, pair[1].lower_bound);
        }
    }

    #[test]
    fn top_n_with_other_preserves_mass(
        skills in proptest::collection::vec(
            proptest::collection::vec("[a-e]", 0..4),
            0..30,
        ),
        n in 0usize..6,
    ) {
        let records: Vec<_> = skills
            .iter()
            .map(|list| {
                let encoded = format!("['{}']", list.join("', '"));
                normalize(&[("technical_skills", encoded)].into_iter().collect())
            })
            .collect();
        let buckets = aggregate(&records, Dimension::TechnicalSkills);
        let total: usize = buckets.iter().map(|b| b.count).sum();
        let ranked = top_n_with_other(buckets, n);
        prop_assert_eq!(ranked.iter().map(|b| b.count).sum::<usize>(), total);
    }
}
