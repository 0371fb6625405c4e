//! End-to-end rendering of a small dashboard in every output format.

use jobs_model::JobPosting;
use jobs_report::{
    ChartTheme, DashboardRenderer, JsonRenderer, Margins, SvgRenderer, TableRenderer,
    write_rendered_files,
};
use jobs_transform::{Dashboard, DashboardOptions, build_dashboard};

fn posting(company: &str, salary: f64, skills: &[&str]) -> JobPosting {
    JobPosting {
        title: "Data Engineer".to_string(),
        company: company.to_string(),
        salary_value: Some(salary),
        salary_type: "annual".to_string(),
        salary_currency: "USD".to_string(),
        hybrid_policy: true,
        technical_skills: skills.iter().map(|s| (*s).to_string()).collect(),
        ..JobPosting::default()
    }
}

fn sample_dashboard() -> Dashboard {
    let records = vec![
        posting("Acme", 50_000.0, &["Python", "SQL"]),
        posting("Acme", 70_000.0, &["Python"]),
        posting("Globex", 90_000.0, &["Rust"]),
    ];
    build_dashboard(&records, &DashboardOptions::default())
}

#[test]
fn table_output_lists_every_chart() {
    let dashboard = sample_dashboard();
    let text = TableRenderer::plain().render(&dashboard).unwrap();
    assert!(text.starts_with("Key figures"));
    assert!(text.contains("$70k"));
    for chart in &dashboard.charts {
        assert!(text.contains(&chart.title), "missing {}", chart.id);
    }
}

#[test]
fn json_output_keeps_chart_order() {
    let dashboard = sample_dashboard();
    let text = JsonRenderer::pretty().render(&dashboard).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let ids: Vec<&str> = value["charts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.first(), Some(&"tech-skills"));
    assert_eq!(ids.last(), Some(&"companies"));
    assert_eq!(value["kpis"]["distinct_company_count"], 2);
}

#[test]
fn svg_files_are_written_with_index() {
    let dashboard = sample_dashboard();
    let files = SvgRenderer::default().render(&dashboard).unwrap();
    assert_eq!(files.len(), dashboard.charts.len() + 1);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dashboard");
    let written = write_rendered_files(&out, &files).unwrap();
    assert_eq!(written.len(), files.len());
    assert!(out.join("tech-skills.svg").exists());

    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.starts_with("<!DOCTYPE html>"));
    assert!(index.contains("src=\"salary-dist.svg\""));
    assert!(index.contains("$70k"));

    let hybrid = std::fs::read_to_string(out.join("hybrid.svg")).unwrap();
    assert!(hybrid.contains("Hybrid\n3 jobs (100.0%)"));
}

#[test]
fn partial_theme_from_toml_keeps_defaults() {
    let theme: ChartTheme = toml::from_str(
        r##"
accent = "#ff8800"

[bar_margin]
top = 0.0
right = 0.0
bottom = 0.0
left = 80.0
"##,
    )
    .unwrap();
    assert_eq!(theme.accent, "#ff8800");
    assert_eq!(theme.gray, "#aaa");
    assert_eq!(theme.bar_margin, Margins::new(0.0, 0.0, 0.0, 80.0));
    assert_eq!(theme.histogram_margin, ChartTheme::default().histogram_margin);

    let svg = SvgRenderer::new(theme)
        .render_chart(&sample_dashboard().charts[0])
        .unwrap();
    assert!(svg.contains("fill=\"#ff8800\""));
}
