//! Tests for jobs-model types.

use jobs_model::{
    AggregateBucket, BooleanField, BooleanSplit, Dimension, HistogramBin, JobPosting,
    KpiSummary, ModelError,
};

#[test]
fn dimension_parses_column_names_and_aliases() {
    for dimension in Dimension::ALL {
        assert_eq!(dimension.as_str().parse::<Dimension>().unwrap(), dimension);
    }
    assert_eq!("skills".parse::<Dimension>().unwrap(), Dimension::TechnicalSkills);
    assert_eq!("Tools".parse::<Dimension>().unwrap(), Dimension::ToolsUsed);
    assert_eq!("seniority".parse::<Dimension>().unwrap(), Dimension::SeniorityLevel);
    assert_eq!("salary-type".parse::<Dimension>().unwrap(), Dimension::SalaryType);
}

#[test]
fn dimension_rejects_unknown_names() {
    let err = "salary_value".parse::<Dimension>().unwrap_err();
    assert!(matches!(err, ModelError::UnknownDimension { .. }));
    assert_eq!(err.to_string(), "unknown dimension: salary_value");
}

#[test]
fn only_list_fields_are_multi_valued() {
    let multi: Vec<Dimension> = Dimension::ALL
        .into_iter()
        .filter(Dimension::is_multi_valued)
        .collect();
    assert_eq!(
        multi,
        vec![
            Dimension::TechnicalSkills,
            Dimension::ToolsUsed,
            Dimension::Domains
        ]
    );
}

#[test]
fn dimension_values_reads_the_matching_field() {
    let posting = JobPosting {
        title: "Data Analyst".to_string(),
        technical_skills: vec!["SQL".to_string(), "Python".to_string()],
        ..JobPosting::default()
    };
    assert_eq!(Dimension::Title.values(&posting), ["Data Analyst"]);
    assert_eq!(Dimension::TechnicalSkills.values(&posting), ["SQL", "Python"]);
    assert_eq!(Dimension::Country.values(&posting), ["Not specified"]);
    assert!(Dimension::Domains.values(&posting).is_empty());
}

#[test]
fn default_posting_uses_sentinels() {
    let posting = JobPosting::default();
    assert_eq!(posting.seniority_level, "Not specified");
    assert_eq!(posting.country, "Not specified");
    assert_eq!(posting.source, "N/A");
    assert!(posting.salary_value.is_none());
    assert!(!posting.hybrid_policy);
}

#[test]
fn boolean_field_labels_and_lookup() {
    let posting = JobPosting {
        hybrid_policy: true,
        ..JobPosting::default()
    };
    assert!(BooleanField::HybridPolicy.get(&posting));
    assert!(!BooleanField::VisaSponsorship.get(&posting));
    assert_eq!(BooleanField::VisaSponsorship.labels(), ("Visa OK", "Visa No"));
    assert_eq!(
        "visa".parse::<BooleanField>().unwrap(),
        BooleanField::VisaSponsorship
    );
}

#[test]
fn boolean_split_buckets_keep_zero_sides() {
    let split = BooleanSplit {
        yes_label: "Hybrid".to_string(),
        yes: 4,
        no_label: "On-site".to_string(),
        no: 0,
    };
    assert_eq!(split.total(), 4);
    assert_eq!(
        split.as_buckets(),
        [
            AggregateBucket::new("Hybrid", 4),
            AggregateBucket::new("On-site", 0)
        ]
    );
}

#[test]
fn histogram_bin_width() {
    let bin = HistogramBin {
        lower_bound: 10.0,
        upper_bound: 30.0,
        count: 2,
    };
    assert_eq!(bin.width(), 20.0);
}

#[test]
fn kpi_summary_serializes_missing_median_as_null() {
    let summary = KpiSummary {
        total_count: 3,
        distinct_company_count: 2,
        median_annual_usd_salary: None,
    };
    let json = serde_json::to_value(&summary).expect("serialize summary");
    assert_eq!(json["median_annual_usd_salary"], serde_json::Value::Null);
    let round: KpiSummary = serde_json::from_value(json).expect("deserialize summary");
    assert_eq!(round, summary);
}
