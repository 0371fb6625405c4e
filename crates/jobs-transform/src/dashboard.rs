//! Assembly of the full chart set.
//!
//! [`build_dashboard`] runs every aggregation the dashboard shows and packs
//! the results into [`Chart`]s. Renderers consume the [`Dashboard`] without
//! touching records again.

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use jobs_model::{
    AggregateBucket, BooleanField, Dimension, HistogramBin, JobPosting, KpiSummary,
};

use crate::aggregate::{aggregate, boolean_split};
use crate::binning::histogram;
use crate::filter::{SalaryFilter, filtered_salaries};
use crate::ranking::{single_dominant_with_other, top_n, top_n_with_other};
use crate::summary::summarize;

/// Tuning knobs for [`build_dashboard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardOptions {
    /// Entries kept in each ranked bar chart.
    pub top_n: usize,
    /// Slices kept in the seniority pie before the "Other" roll-up.
    pub seniority_top_n: usize,
    /// Number of bins in the salary histogram.
    pub histogram_bins: usize,
    /// Sub-population shown in the salary histogram.
    pub salary_distribution: SalaryFilter,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            seniority_top_n: 5,
            histogram_bins: 20,
            salary_distribution: SalaryFilter::distribution(),
        }
    }
}

/// How a chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    /// Horizontal bars, one per bucket.
    Bar,
    /// Vertical bars, one per bucket.
    Column,
    Histogram,
    /// `inner_radius` is a fraction of the outer radius; zero draws a full pie.
    Pie { inner_radius: f64 },
}

/// What a count in a chart stands for; drives tooltip wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountUnit {
    /// A posting mentioning a value.
    Mentions,
    Jobs,
    Offers,
}

/// The data behind one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ChartData {
    Buckets(Vec<AggregateBucket>),
    Bins(Vec<HistogramBin>),
    /// Nothing to draw; `reason` is suitable for an empty-state message.
    NoData { reason: String },
}

impl ChartData {
    fn buckets_or_empty(buckets: Vec<AggregateBucket>, reason: &str) -> Self {
        if buckets.is_empty() {
            ChartData::NoData {
                reason: reason.to_string(),
            }
        } else {
            ChartData::Buckets(buckets)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ChartData::NoData { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Stable identifier, also used for output file names.
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub unit: CountUnit,
    pub data: ChartData,
}

impl Chart {
    fn new(id: &str, title: &str, kind: ChartKind, unit: CountUnit, data: ChartData) -> Self {
        let entries = match &data {
            ChartData::Buckets(buckets) => buckets.len(),
            ChartData::Bins(bins) => bins.len(),
            ChartData::NoData { .. } => 0,
        };
        debug!(chart = id, entries, "built chart");
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            unit,
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub kpis: KpiSummary,
    pub charts: Vec<Chart>,
}

impl Dashboard {
    pub fn chart(&self, id: &str) -> Option<&Chart> {
        self.charts.iter().find(|c| c.id == id)
    }
}

const NO_VALUES: &str = "no values to aggregate";
const DONUT: ChartKind = ChartKind::Pie { inner_radius: 0.5 };

/// Builds every chart of the dashboard from the normalized record set.
///
/// Empty inputs become [`ChartData::NoData`] entries rather than errors, so
/// the result always has the same chart list.
pub fn build_dashboard(records: &[JobPosting], options: &DashboardOptions) -> Dashboard {
    let span = info_span!("build_dashboard", records = records.len());
    let _guard = span.enter();

    let top = |dimension: Dimension| {
        let ranked = top_n(aggregate(records, dimension), options.top_n);
        ChartData::buckets_or_empty(ranked, NO_VALUES)
    };

    let mut charts = Vec::with_capacity(11);
    charts.push(Chart::new(
        "tech-skills",
        "Top technical skills",
        ChartKind::Bar,
        CountUnit::Mentions,
        top(Dimension::TechnicalSkills),
    ));
    charts.push(Chart::new(
        "salary-dist",
        "Annual salary distribution (USD)",
        ChartKind::Histogram,
        CountUnit::Jobs,
        salary_histogram(records, options),
    ));
    charts.push(Chart::new(
        "tools",
        "Top tools",
        ChartKind::Bar,
        CountUnit::Mentions,
        top(Dimension::ToolsUsed),
    ));
    charts.push(Chart::new(
        "geo",
        "Top countries",
        ChartKind::Bar,
        CountUnit::Mentions,
        top(Dimension::Country),
    ));
    charts.push(Chart::new(
        "domains",
        "Top domains",
        ChartKind::Bar,
        CountUnit::Mentions,
        top(Dimension::Domains),
    ));
    charts.push(Chart::new(
        "seniority",
        "Seniority level",
        ChartKind::Pie { inner_radius: 0.0 },
        CountUnit::Jobs,
        ChartData::buckets_or_empty(
            top_n_with_other(
                aggregate(records, Dimension::SeniorityLevel),
                options.seniority_top_n,
            ),
            NO_VALUES,
        ),
    ));
    charts.push(Chart::new(
        "hybrid",
        "Hybrid policy",
        DONUT,
        CountUnit::Jobs,
        split(records, BooleanField::HybridPolicy),
    ));
    charts.push(Chart::new(
        "visa",
        "Visa sponsorship",
        DONUT,
        CountUnit::Jobs,
        split(records, BooleanField::VisaSponsorship),
    ));
    charts.push(Chart::new(
        "source",
        "Posting source",
        DONUT,
        CountUnit::Jobs,
        match single_dominant_with_other(aggregate(records, Dimension::Source)) {
            Some((dominant, other)) => ChartData::Buckets(vec![dominant, other]),
            None => ChartData::NoData {
                reason: NO_VALUES.to_string(),
            },
        },
    ));
    charts.push(Chart::new(
        "titles",
        "Top job titles",
        ChartKind::Bar,
        CountUnit::Offers,
        top(Dimension::Title),
    ));
    charts.push(Chart::new(
        "companies",
        "Top companies",
        ChartKind::Column,
        CountUnit::Offers,
        top(Dimension::Company),
    ));

    Dashboard {
        kpis: summarize(records),
        charts,
    }
}

fn salary_histogram(records: &[JobPosting], options: &DashboardOptions) -> ChartData {
    let salaries = filtered_salaries(records, &options.salary_distribution);
    match histogram(&salaries, options.histogram_bins) {
        Ok(bins) => ChartData::Bins(bins),
        Err(err) => ChartData::NoData {
            reason: err.to_string(),
        },
    }
}

fn split(records: &[JobPosting], field: BooleanField) -> ChartData {
    let split = boolean_split(records, field);
    if split.total() == 0 {
        return ChartData::NoData {
            reason: "no postings".to_string(),
        };
    }
    ChartData::Buckets(Vec::from(split.as_buckets()))
}
