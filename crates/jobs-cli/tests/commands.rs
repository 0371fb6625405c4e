//! Integration tests for the subcommands against on-disk datasets.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use jobs_cli::cli::{OutputFormatArg, ReportArgs, SummaryArgs, TopArgs};
use jobs_cli::commands::{ReportOutput, load_postings, ranked, run_report, run_summary, run_top};
use jobs_cli::config::Settings;
use jobs_model::Dimension;
use jobs_report::TableRenderer;

const HEADER: &str = "title;company;country;seniority_level;source;salary_value;\
salary_type;salary_currency;hybrid_policy;visa_sponsorship;technical_skills;tools_used;domains";

fn write_dataset(dir: &Path) -> PathBuf {
    let rows = [
        "Data Engineer;Acme;USA;Senior;LinkedIn;50000;annual;USD;True;False;['Python', 'SQL'];['Git'];['Finance']",
        "Data Engineer;Acme;USA;Junior;LinkedIn;70000;annual;USD;False;False;['Python'];['Git', 'Docker'];[]",
        "ML Engineer;Globex;Germany;Not specified;Indeed;90000;annual;USD;True;True;['Rust'];[];['Health']",
        "Analyst;;;;;abc;monthly;EUR;yes;;[];[];",
    ];
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    let path = dir.join("jobs.csv");
    fs::write(&path, text).unwrap();
    path
}

fn report_args(data: PathBuf, format: OutputFormatArg, output_dir: Option<PathBuf>) -> ReportArgs {
    ReportArgs {
        data,
        format,
        output_dir,
        top_n: None,
        bins: None,
    }
}

#[test]
fn test_load_postings_normalizes_rows() {
    let dir = tempfile::tempdir().unwrap();
    let records = load_postings(&write_dataset(dir.path())).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].technical_skills, vec!["Python", "SQL"]);
    assert!(records[0].hybrid_policy);
    let last = &records[3];
    assert_eq!(last.salary_value, None);
    assert_eq!(last.seniority_level, "Not specified");
    assert_eq!(last.source, "N/A");
    assert!(!last.hybrid_policy);
}

#[test]
fn test_missing_dataset_reports_path() {
    let err = load_postings(Path::new("no/such/jobs.csv")).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("could not load no/such/jobs.csv"), "{message}");
}

#[test]
fn test_summary_shows_kpis() {
    let dir = tempfile::tempdir().unwrap();
    let args = SummaryArgs {
        data: write_dataset(dir.path()),
    };
    let text = run_summary(&args, TableRenderer::plain()).unwrap();
    assert!(text.contains("Total offers"));
    assert!(text.contains("$70k"));
}

#[test]
fn test_report_json_uses_config_and_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = report_args(write_dataset(dir.path()), OutputFormatArg::Json, None);
    args.top_n = NonZeroUsize::new(1);
    let settings = Settings::from_toml("[dashboard]\ntop_n = 5\n").unwrap();

    let ReportOutput::Text(text) = run_report(&args, settings, TableRenderer::plain()).unwrap()
    else {
        panic!("expected text output");
    };
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["kpis"]["total_count"], 4);
    assert_eq!(value["kpis"]["distinct_company_count"], 2);
    let skills = &value["charts"][0];
    assert_eq!(skills["id"], "tech-skills");
    assert_eq!(skills["data"]["value"].as_array().unwrap().len(), 1);
    assert_eq!(skills["data"]["value"][0]["name"], "Python");
}

#[test]
fn test_report_svg_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let args = report_args(
        write_dataset(dir.path()),
        OutputFormatArg::Svg,
        Some(out.clone()),
    );
    let ReportOutput::Files(paths) =
        run_report(&args, Settings::default(), TableRenderer::plain()).unwrap()
    else {
        panic!("expected files");
    };
    assert_eq!(paths.len(), 12);
    assert!(out.join("index.html").exists());
    assert!(out.join("companies.svg").exists());
}

#[test]
fn test_top_with_other() {
    let dir = tempfile::tempdir().unwrap();
    let args = TopArgs {
        data: write_dataset(dir.path()),
        dimension: Dimension::ToolsUsed,
        limit: NonZeroUsize::MIN,
        with_other: true,
    };
    let text = run_top(&args, TableRenderer::plain()).unwrap();
    assert!(text.contains("Git"));
    assert!(text.contains("Other"));
}

#[test]
fn test_ranked_skips_missing_markers() {
    let dir = tempfile::tempdir().unwrap();
    let records = load_postings(&write_dataset(dir.path())).unwrap();
    let buckets = ranked(&records, Dimension::SeniorityLevel, 10, false);
    let names: Vec<&str> = buckets.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Senior", "Junior"]);
}

#[test]
fn test_ranked_domains_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let records = load_postings(&write_dataset(dir.path())).unwrap();
    let buckets = ranked(&records, Dimension::Domains, 10, true);
    insta::assert_json_snapshot!(buckets, @r#"
    [
      {
        "name": "Finance",
        "count": 1
      },
      {
        "name": "Health",
        "count": 1
      }
    ]
    "#);
}
