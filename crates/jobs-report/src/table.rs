//! Terminal rendering with comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use jobs_model::{AggregateBucket, HistogramBin, KpiSummary};
use jobs_transform::{Chart, ChartData, Dashboard, format_salary_k};

use crate::DashboardRenderer;
use crate::common::{bin_label, share_percent};
use crate::error::Result;

/// Renders the dashboard as a sequence of text tables.
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    /// Whether ANSI styling is emitted.
    pub styled: bool,
    pub width: u16,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self {
            styled: true,
            width: 120,
        }
    }
}

impl TableRenderer {
    pub fn plain() -> Self {
        Self {
            styled: false,
            ..Self::default()
        }
    }

    pub fn kpi_table(&self, kpis: &KpiSummary) -> Table {
        let mut table = self.new_table();
        table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
        table.add_row(vec![Cell::new("Total offers"), Cell::new(kpis.total_count)]);
        table.add_row(vec![
            Cell::new("Companies"),
            Cell::new(kpis.distinct_company_count),
        ]);
        table.add_row(vec![
            Cell::new("Median salary"),
            salary_cell(kpis.median_annual_usd_salary),
        ]);
        align_column(&mut table, 1, CellAlignment::Right);
        table
    }

    pub fn chart_table(&self, chart: &Chart) -> Table {
        let mut table = self.new_table();
        match &chart.data {
            ChartData::Buckets(buckets) => fill_buckets(&mut table, buckets),
            ChartData::Bins(bins) => fill_bins(&mut table, bins),
            ChartData::NoData { reason } => {
                table.set_header(vec![header_cell(&chart.title)]);
                table.add_row(vec![dim_cell(reason)]);
            }
        }
        table
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        apply_table_style(&mut table, self.width);
        if !self.styled {
            table.force_no_tty();
        }
        table
    }
}

impl DashboardRenderer for TableRenderer {
    type Output = String;

    fn render(&self, dashboard: &Dashboard) -> Result<String> {
        let mut out = String::new();
        out.push_str("Key figures\n");
        out.push_str(&self.kpi_table(&dashboard.kpis).to_string());
        out.push('\n');
        for chart in &dashboard.charts {
            out.push('\n');
            out.push_str(&chart.title);
            out.push('\n');
            out.push_str(&self.chart_table(chart).to_string());
            out.push('\n');
        }
        Ok(out)
    }
}

fn fill_buckets(table: &mut Table, buckets: &[AggregateBucket]) {
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Count"),
        header_cell("Share"),
    ]);
    let total: usize = buckets.iter().map(|b| b.count).sum();
    for bucket in buckets {
        let name = if bucket.is_other() {
            dim_cell(&bucket.name)
        } else {
            Cell::new(&bucket.name)
        };
        table.add_row(vec![
            name,
            Cell::new(bucket.count),
            Cell::new(format!("{:.1}%", share_percent(bucket.count, total))),
        ]);
    }
    align_column(table, 1, CellAlignment::Right);
    align_column(table, 2, CellAlignment::Right);
}

fn fill_bins(table: &mut Table, bins: &[HistogramBin]) {
    table.set_header(vec![header_cell("Range"), header_cell("Count")]);
    for bin in bins {
        let count = if bin.count == 0 {
            dim_cell(0)
        } else {
            Cell::new(bin.count)
        };
        table.add_row(vec![Cell::new(bin_label(bin)), count]);
    }
    align_column(table, 1, CellAlignment::Right);
}

fn salary_cell(median: Option<f64>) -> Cell {
    let text = format_salary_k(median);
    match median {
        Some(_) => Cell::new(text).fg(Color::Cyan),
        None => dim_cell(text),
    }
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
