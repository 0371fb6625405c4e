//! Subcommand implementations.
//!
//! Each command loads the dataset once, normalizes it and hands the typed
//! records to the transform and report crates. Output is returned to the
//! caller rather than printed so the commands stay testable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use jobs_ingest::read_job_file;
use jobs_model::{AggregateBucket, Dimension, JobPosting};
use jobs_report::{
    DashboardRenderer, JsonRenderer, SvgRenderer, TableRenderer, write_rendered_files,
};
use jobs_transform::{
    Chart, ChartData, ChartKind, CountUnit, aggregate, build_dashboard, normalize_records,
    summarize, top_n, top_n_with_other,
};

use crate::cli::{OutputFormatArg, ReportArgs, SummaryArgs, TopArgs};
use crate::config::Settings;

/// Default directory for SVG output.
pub const DEFAULT_OUTPUT_DIR: &str = "dashboard";

/// What a `report` run produced.
#[derive(Debug)]
pub enum ReportOutput {
    /// Rendered text for stdout.
    Text(String),
    /// Files written to disk.
    Files(Vec<PathBuf>),
}

/// Reads and normalizes the dataset at `path`.
pub fn load_postings(path: &Path) -> Result<Vec<JobPosting>> {
    let raws =
        read_job_file(path).with_context(|| format!("could not load {}", path.display()))?;
    let normalized = normalize_records(&raws);
    let report = &normalized.report;
    if report.fallback_count() > 0 {
        warn!(
            records = report.records,
            unparsable_salaries = report.unparsable_salaries,
            non_canonical_flags = report.non_canonical_flags,
            defaulted_seniority = report.defaulted_seniority,
            defaulted_country = report.defaulted_country,
            defaulted_source = report.defaulted_source,
            "normalization fell back to defaults"
        );
    }
    Ok(normalized.records)
}

pub fn run_summary(args: &SummaryArgs, table: TableRenderer) -> Result<String> {
    let records = load_postings(&args.data)?;
    Ok(table.kpi_table(&summarize(&records)).to_string())
}

pub fn run_report(
    args: &ReportArgs,
    settings: Settings,
    table: TableRenderer,
) -> Result<ReportOutput> {
    let records = load_postings(&args.data)?;
    let settings = settings.with_report_overrides(args);
    let dashboard = build_dashboard(&records, &settings.dashboard);

    let output = match args.format {
        OutputFormatArg::Table => ReportOutput::Text(table.render(&dashboard)?),
        OutputFormatArg::Json => ReportOutput::Text(JsonRenderer::pretty().render(&dashboard)?),
        OutputFormatArg::Svg => {
            let dir = args
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
            let files = SvgRenderer::new(settings.theme).render(&dashboard)?;
            let written = write_rendered_files(&dir, &files)
                .with_context(|| format!("could not write dashboard to {}", dir.display()))?;
            info!(charts = dashboard.charts.len(), "dashboard rendered");
            ReportOutput::Files(written)
        }
    };
    Ok(output)
}

pub fn run_top(args: &TopArgs, table: TableRenderer) -> Result<String> {
    let records = load_postings(&args.data)?;
    let buckets = ranked(&records, args.dimension, args.limit.get(), args.with_other);
    Ok(table.chart_table(&top_chart(args.dimension, buckets)).to_string())
}

/// Aggregates one dimension and keeps the top `limit` entries.
pub fn ranked(
    records: &[JobPosting],
    dimension: Dimension,
    limit: usize,
    with_other: bool,
) -> Vec<AggregateBucket> {
    let buckets = aggregate(records, dimension);
    if with_other {
        top_n_with_other(buckets, limit)
    } else {
        top_n(buckets, limit)
    }
}

fn top_chart(dimension: Dimension, buckets: Vec<AggregateBucket>) -> Chart {
    let data = if buckets.is_empty() {
        ChartData::NoData {
            reason: format!("no {} values", dimension.label().to_lowercase()),
        }
    } else {
        ChartData::Buckets(buckets)
    };
    Chart {
        id: dimension.as_str().to_string(),
        title: dimension.label().to_string(),
        kind: ChartKind::Bar,
        unit: count_unit(dimension),
        data,
    }
}

/// Tooltip unit for a ranking, matching the dashboard charts.
fn count_unit(dimension: Dimension) -> CountUnit {
    match dimension {
        Dimension::Title | Dimension::Company => CountUnit::Offers,
        _ if dimension.is_multi_valued() => CountUnit::Mentions,
        _ => CountUnit::Jobs,
    }
}
