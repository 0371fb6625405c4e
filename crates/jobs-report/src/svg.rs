//! Static SVG rendering.
//!
//! Each chart becomes a standalone SVG document. Hover feedback comes from a
//! CSS rule on the marks and a `<title>` child carrying the tooltip text, so
//! the files need no script. An `index.html` lays the charts out next to the
//! KPI cards.

use std::f64::consts::{PI, TAU};
use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use tracing::{debug, info};

use jobs_model::{AggregateBucket, HistogramBin, KpiSummary};
use jobs_transform::{Chart, ChartData, ChartKind, CountUnit, Dashboard, format_salary_k};

use crate::DashboardRenderer;
use crate::common::{
    bin_tooltip, bucket_tooltip, coord, emit, write_empty_element,
    write_text_element,
};
use crate::error::{ReportError, Result};
use crate::theme::{ChartTheme, Margins};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const INDEX_FILE: &str = "index.html";

/// One output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub file_name: String,
    pub contents: String,
}

#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    pub theme: ChartTheme,
}

impl SvgRenderer {
    pub fn new(theme: ChartTheme) -> Self {
        Self { theme }
    }

    /// Renders a single chart to an SVG document.
    pub fn render_chart(&self, chart: &Chart) -> Result<String> {
        let theme = &self.theme;
        let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

        let mut root = BytesStart::new("svg");
        root.push_attribute(("xmlns", SVG_NS));
        root.push_attribute(("width", coord(theme.width).as_str()));
        root.push_attribute(("height", coord(theme.height).as_str()));
        root.push_attribute((
            "viewBox",
            format!("0 0 {} {}", coord(theme.width), coord(theme.height)).as_str(),
        ));
        root.push_attribute(("id", chart.id.as_str()));
        emit(&mut xml, Event::Start(root))?;

        write_text_element(&mut xml, "title", &[], &chart.title)?;
        write_text_element(&mut xml, "style", &[], &stylesheet(theme))?;
        write_empty_element(
            &mut xml,
            "rect",
            &[
                ("width", "100%"),
                ("height", "100%"),
                ("fill", theme.background.as_str()),
            ],
        )?;

        match (&chart.data, chart.kind) {
            (ChartData::NoData { reason }, _) => self.no_data(&mut xml, reason)?,
            (ChartData::Bins(bins), _) => self.histogram(&mut xml, bins)?,
            (ChartData::Buckets(buckets), ChartKind::Pie { inner_radius }) => {
                self.pie(&mut xml, buckets, inner_radius, chart.unit)?;
            }
            (ChartData::Buckets(buckets), ChartKind::Column) => {
                self.columns(&mut xml, buckets, chart.unit)?;
            }
            (ChartData::Buckets(buckets), _) => self.bars(&mut xml, buckets, chart.unit)?,
        }

        emit(&mut xml, Event::End(BytesEnd::new("svg")))?;
        into_string(xml)
    }

    /// Renders the landing page that embeds every chart file.
    pub fn render_index(&self, dashboard: &Dashboard) -> Result<String> {
        let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);
        let mut html = BytesStart::new("html");
        html.push_attribute(("lang", "en"));
        emit(&mut xml, Event::Start(html))?;

        emit(&mut xml, Event::Start(BytesStart::new("head")))?;
        write_empty_element(&mut xml, "meta", &[("charset", "utf-8")])?;
        write_text_element(&mut xml, "title", &[], "Job postings dashboard")?;
        write_text_element(&mut xml, "style", &[], &page_stylesheet(&self.theme))?;
        emit(&mut xml, Event::End(BytesEnd::new("head")))?;

        emit(&mut xml, Event::Start(BytesStart::new("body")))?;
        write_text_element(&mut xml, "h1", &[], "Job postings dashboard")?;
        write_kpis(&mut xml, &dashboard.kpis)?;

        let mut grid = BytesStart::new("div");
        grid.push_attribute(("class", "charts"));
        emit(&mut xml, Event::Start(grid))?;
        for chart in &dashboard.charts {
            emit(&mut xml, Event::Start(BytesStart::new("figure")))?;
            write_empty_element(
                &mut xml,
                "img",
                &[
                    ("src", chart_file_name(chart).as_str()),
                    ("alt", chart.title.as_str()),
                ],
            )?;
            write_text_element(&mut xml, "figcaption", &[], &chart.title)?;
            emit(&mut xml, Event::End(BytesEnd::new("figure")))?;
        }
        emit(&mut xml, Event::End(BytesEnd::new("div")))?;

        emit(&mut xml, Event::End(BytesEnd::new("body")))?;
        emit(&mut xml, Event::End(BytesEnd::new("html")))?;
        Ok(format!("<!DOCTYPE html>\n{}", into_string(xml)?))
    }

    fn no_data(&self, xml: &mut Writer<Vec<u8>>, reason: &str) -> Result<()> {
        let x = coord(self.theme.width / 2.0);
        let y = coord(self.theme.height / 2.0);
        write_text_element(
            xml,
            "text",
            &[
                ("class", "empty"),
                ("x", x.as_str()),
                ("y", y.as_str()),
                ("text-anchor", "middle"),
            ],
            &format!("No data: {reason}"),
        )
    }

    /// Horizontal bars, one band per bucket, largest first.
    fn bars(
        &self,
        xml: &mut Writer<Vec<u8>>,
        buckets: &[AggregateBucket],
        unit: CountUnit,
    ) -> Result<()> {
        let margin = self.theme.bar_margin;
        let (plot_width, plot_height) = self.plot_size(margin);
        let total = total_count(buckets);
        let max = max_count(buckets);
        let band = plot_height / buckets.len() as f64;
        let padding = band * self.theme.band_padding;

        for (index, bucket) in buckets.iter().enumerate() {
            let y = margin.top + band * index as f64 + padding / 2.0;
            let width = bucket.count as f64 / max * plot_width;
            self.mark(
                xml,
                margin.left,
                y,
                width,
                band - padding,
                &self.theme.accent,
                &bucket_tooltip(bucket, unit, total),
            )?;
            let label_y = coord(y + (band - padding) / 2.0);
            let label_x = coord(margin.left - 6.0);
            write_text_element(
                xml,
                "text",
                &[
                    ("x", label_x.as_str()),
                    ("y", label_y.as_str()),
                    ("text-anchor", "end"),
                    ("dominant-baseline", "middle"),
                ],
                &bucket.name,
            )?;
        }
        self.count_axis_label(xml, margin, max)
    }

    /// Vertical bars with labels rotated under the axis.
    fn columns(
        &self,
        xml: &mut Writer<Vec<u8>>,
        buckets: &[AggregateBucket],
        unit: CountUnit,
    ) -> Result<()> {
        let margin = self.theme.column_margin;
        let (plot_width, plot_height) = self.plot_size(margin);
        let total = total_count(buckets);
        let max = max_count(buckets);
        let band = plot_width / buckets.len() as f64;
        let padding = band * self.theme.band_padding;
        let baseline = margin.top + plot_height;

        for (index, bucket) in buckets.iter().enumerate() {
            let x = margin.left + band * index as f64 + padding / 2.0;
            let height = bucket.count as f64 / max * plot_height;
            self.mark(
                xml,
                x,
                baseline - height,
                band - padding,
                height,
                &self.theme.accent,
                &bucket_tooltip(bucket, unit, total),
            )?;
            let transform = format!(
                "translate({},{}) rotate(-45)",
                coord(x + (band - padding) / 2.0),
                coord(baseline + 8.0)
            );
            write_text_element(
                xml,
                "text",
                &[("transform", transform.as_str()), ("text-anchor", "end")],
                &bucket.name,
            )?;
        }
        Ok(())
    }

    /// Adjacent bins over a linear salary axis.
    fn histogram(&self, xml: &mut Writer<Vec<u8>>, bins: &[HistogramBin]) -> Result<()> {
        let margin = self.theme.histogram_margin;
        let (plot_width, plot_height) = self.plot_size(margin);
        let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
            return self.no_data(xml, "no bins");
        };
        let domain_start = first.lower_bound;
        let span = (last.upper_bound - domain_start).max(f64::EPSILON);
        let max = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64;
        let scale_x = |value: f64| margin.left + (value - domain_start) / span * plot_width;
        let baseline = margin.top + plot_height;

        for bin in bins {
            let x = scale_x(bin.lower_bound) + 1.0;
            let width = (scale_x(bin.upper_bound) - scale_x(bin.lower_bound) - 1.0).max(0.0);
            let height = bin.count as f64 / max * plot_height;
            self.mark(
                xml,
                x,
                baseline - height,
                width,
                height,
                &self.theme.accent,
                &bin_tooltip(bin),
            )?;
        }

        let label_y = coord(baseline + 16.0);
        for value in [first.lower_bound, last.upper_bound] {
            let x = coord(scale_x(value));
            write_text_element(
                xml,
                "text",
                &[
                    ("x", x.as_str()),
                    ("y", label_y.as_str()),
                    ("text-anchor", "middle"),
                ],
                &format!("${}k", (value / 1000.0).round() as i64),
            )?;
        }
        Ok(())
    }

    /// Pie or donut; slices clockwise from twelve o'clock with a legend.
    fn pie(
        &self,
        xml: &mut Writer<Vec<u8>>,
        buckets: &[AggregateBucket],
        inner_ratio: f64,
        unit: CountUnit,
    ) -> Result<()> {
        let total = total_count(buckets);
        if total == 0 {
            return self.no_data(xml, "no postings");
        }
        let theme = &self.theme;
        let legend_width = theme.width * 0.35;
        let radius = ((theme.width - legend_width).min(theme.height) / 2.0 - 10.0).max(1.0);
        let inner = radius * inner_ratio.clamp(0.0, 0.95);
        let center = ((theme.width - legend_width) / 2.0, theme.height / 2.0);

        let mut start = 0.0;
        for (index, bucket) in buckets.iter().enumerate() {
            if bucket.count == 0 {
                continue;
            }
            let sweep = bucket.count as f64 / total as f64 * TAU;
            let path = if bucket.count == total {
                ring_path(center, radius, inner)
            } else {
                slice_path(center, radius, inner, start, start + sweep)
            };
            start += sweep;

            let mut node = BytesStart::new("path");
            node.push_attribute(("class", "mark"));
            node.push_attribute(("d", path.as_str()));
            node.push_attribute(("fill", theme.slice_color(index, buckets.len())));
            node.push_attribute(("fill-rule", "evenodd"));
            node.push_attribute(("stroke", theme.background.as_str()));
            emit(xml, Event::Start(node))?;
            write_text_element(xml, "title", &[], &bucket_tooltip(bucket, unit, total))?;
            emit(xml, Event::End(BytesEnd::new("path")))?;
        }

        let legend_x = theme.width - legend_width;
        let legend_top = center.1 - buckets.len() as f64 * 10.0;
        for (index, bucket) in buckets.iter().enumerate() {
            let y = legend_top + index as f64 * 20.0;
            let (swatch_x, swatch_y) = (coord(legend_x), coord(y));
            write_empty_element(
                xml,
                "rect",
                &[
                    ("x", swatch_x.as_str()),
                    ("y", swatch_y.as_str()),
                    ("width", "12"),
                    ("height", "12"),
                    ("fill", theme.slice_color(index, buckets.len())),
                ],
            )?;
            let (text_x, text_y) = (coord(legend_x + 18.0), coord(y + 10.0));
            write_text_element(
                xml,
                "text",
                &[("x", text_x.as_str()), ("y", text_y.as_str())],
                &format!("{} ({})", bucket.name, bucket.count),
            )?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn mark(
        &self,
        xml: &mut Writer<Vec<u8>>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: &str,
        tooltip: &str,
    ) -> Result<()> {
        let mut rect = BytesStart::new("rect");
        rect.push_attribute(("class", "mark"));
        rect.push_attribute(("x", coord(x).as_str()));
        rect.push_attribute(("y", coord(y).as_str()));
        rect.push_attribute(("width", coord(width.max(0.0)).as_str()));
        rect.push_attribute(("height", coord(height.max(0.0)).as_str()));
        rect.push_attribute(("fill", fill));
        emit(xml, Event::Start(rect))?;
        write_text_element(xml, "title", &[], tooltip)?;
        emit(xml, Event::End(BytesEnd::new("rect")))
    }

    fn count_axis_label(
        &self,
        xml: &mut Writer<Vec<u8>>,
        margin: Margins,
        max: f64,
    ) -> Result<()> {
        let x = coord(self.theme.width - margin.right);
        let y = coord(self.theme.height - margin.bottom + 16.0);
        write_text_element(
            xml,
            "text",
            &[("x", x.as_str()), ("y", y.as_str()), ("text-anchor", "end")],
            &format!("{max}"),
        )
    }

    fn plot_size(&self, margin: Margins) -> (f64, f64) {
        (
            (self.theme.width - margin.left - margin.right).max(1.0),
            (self.theme.height - margin.top - margin.bottom).max(1.0),
        )
    }
}

impl DashboardRenderer for SvgRenderer {
    type Output = Vec<RenderedFile>;

    fn render(&self, dashboard: &Dashboard) -> Result<Vec<RenderedFile>> {
        let mut files = Vec::with_capacity(dashboard.charts.len() + 1);
        for chart in &dashboard.charts {
            files.push(RenderedFile {
                file_name: chart_file_name(chart),
                contents: self.render_chart(chart)?,
            });
            debug!(chart = %chart.id, "rendered svg");
        }
        files.push(RenderedFile {
            file_name: INDEX_FILE.to_string(),
            contents: self.render_index(dashboard)?,
        });
        Ok(files)
    }
}

/// Writes rendered documents into `dir`, creating it when missing.
pub fn write_rendered_files(dir: &Path, files: &[RenderedFile]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| ReportError::write(dir, source))?;
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.file_name);
        fs::write(&path, &file.contents).map_err(|source| ReportError::write(&path, source))?;
        written.push(path);
    }
    info!(dir = %dir.display(), files = written.len(), "wrote dashboard files");
    Ok(written)
}

pub fn chart_file_name(chart: &Chart) -> String {
    format!("{}.svg", chart.id)
}

fn write_kpis(xml: &mut Writer<Vec<u8>>, kpis: &KpiSummary) -> Result<()> {
    let mut cards = BytesStart::new("div");
    cards.push_attribute(("class", "kpis"));
    emit(xml, Event::Start(cards))?;
    let entries = [
        ("kpi-total", kpis.total_count.to_string(), "Total offers"),
        (
            "kpi-companies",
            kpis.distinct_company_count.to_string(),
            "Companies",
        ),
        (
            "kpi-salary",
            format_salary_k(kpis.median_annual_usd_salary),
            "Median salary",
        ),
    ];
    for (id, value, label) in &entries {
        let mut card = BytesStart::new("div");
        card.push_attribute(("class", "kpi"));
        card.push_attribute(("id", *id));
        emit(xml, Event::Start(card))?;
        write_text_element(xml, "span", &[("class", "value")], value)?;
        write_text_element(xml, "span", &[("class", "label")], label)?;
        emit(xml, Event::End(BytesEnd::new("div")))?;
    }
    emit(xml, Event::End(BytesEnd::new("div")))
}

fn stylesheet(theme: &ChartTheme) -> String {
    format!(
        "text {{ fill: {gray}; font-family: sans-serif; font-size: 11px; }} \
         .mark:hover {{ fill: {hover}; }}",
        gray = theme.gray,
        hover = theme.accent_hover,
    )
}

fn page_stylesheet(theme: &ChartTheme) -> String {
    format!(
        "body {{ background: {bg}; color: {gray}; font-family: sans-serif; }} \
         .kpis {{ display: flex; gap: 1em; }} \
         .kpi {{ background: {dark}; padding: 1em; }} \
         .kpi .value {{ color: {accent}; font-size: 2em; display: block; }} \
         .charts {{ display: flex; flex-wrap: wrap; }}",
        bg = theme.background,
        gray = theme.gray,
        dark = theme.background_dark,
        accent = theme.accent,
    )
}

fn total_count(buckets: &[AggregateBucket]) -> usize {
    buckets.iter().map(|b| b.count).sum()
}

fn max_count(buckets: &[AggregateBucket]) -> f64 {
    buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64
}

fn point(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    (
        center.0 + radius * angle.sin(),
        center.1 - radius * angle.cos(),
    )
}

fn slice_path(center: (f64, f64), outer: f64, inner: f64, start: f64, end: f64) -> String {
    let large = u8::from(end - start > PI);
    let (ox0, oy0) = point(center, outer, start);
    let (ox1, oy1) = point(center, outer, end);
    let outer_arc = format!(
        "M{},{} A{},{} 0 {large} 1 {},{}",
        coord(ox0),
        coord(oy0),
        coord(outer),
        coord(outer),
        coord(ox1),
        coord(oy1)
    );
    if inner <= 0.0 {
        return format!("{outer_arc} L{},{} Z", coord(center.0), coord(center.1));
    }
    let (ix1, iy1) = point(center, inner, end);
    let (ix0, iy0) = point(center, inner, start);
    format!(
        "{outer_arc} L{},{} A{},{} 0 {large} 0 {},{} Z",
        coord(ix1),
        coord(iy1),
        coord(inner),
        coord(inner),
        coord(ix0),
        coord(iy0)
    )
}

/// A full circle, with a hole when `inner` is positive. SVG arcs cannot
/// span 360 degrees, so each circle is two half arcs.
fn ring_path(center: (f64, f64), outer: f64, inner: f64) -> String {
    let circle = |r: f64, sweep: u8| {
        let (cx, top, bottom) = (coord(center.0), coord(center.1 - r), coord(center.1 + r));
        let r = coord(r);
        format!("M{cx},{top} A{r},{r} 0 1 {sweep} {cx},{bottom} A{r},{r} 0 1 {sweep} {cx},{top} Z")
    };
    if inner <= 0.0 {
        circle(outer, 1)
    } else {
        format!("{} {}", circle(outer, 1), circle(inner, 0))
    }
}

fn into_string(xml: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(xml.into_inner()).map_err(|err| ReportError::Markup {
        message: err.to_string(),
    })
}
