//! Shared label and tooltip formatting.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use jobs_model::{AggregateBucket, HistogramBin};
use jobs_transform::CountUnit;

use crate::error::{ReportError, Result};

/// Percentage of `count` in `total`; zero when `total` is zero.
pub fn share_percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Hover text for one bucket. `total` is the chart's total count and is
/// used by units that show a share.
pub fn bucket_tooltip(bucket: &AggregateBucket, unit: CountUnit, total: usize) -> String {
    match unit {
        CountUnit::Mentions => format!("{}\n{} mentions", bucket.name, bucket.count),
        CountUnit::Jobs => format!(
            "{}\n{} jobs ({:.1}%)",
            bucket.name,
            bucket.count,
            share_percent(bucket.count, total)
        ),
        CountUnit::Offers => format!("{}\nOffers: {}", bucket.name, bucket.count),
    }
}

/// Salary range of a bin in thousands, e.g. `$20k - $44k`.
pub fn bin_label(bin: &HistogramBin) -> String {
    format!(
        "${}k - ${}k",
        thousands(bin.lower_bound),
        thousands(bin.upper_bound)
    )
}

pub fn bin_tooltip(bin: &HistogramBin) -> String {
    format!("{}\n{} jobs", bin_label(bin), bin.count)
}

fn thousands(value: f64) -> i64 {
    (value / 1000.0).round() as i64
}

/// Formats a coordinate with at most two decimals.
pub fn coord(value: f64) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Writes one markup event, flattening the writer error into [`ReportError`].
pub fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|err| ReportError::Markup {
            message: err.to_string(),
        })
}

/// Write a simple text element with optional attributes.
pub fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    let mut start = BytesStart::new(name);
    for attribute in attributes {
        start.push_attribute(*attribute);
    }
    emit(writer, Event::Start(start))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

/// Write an element without children.
pub fn write_empty_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
) -> Result<()> {
    let mut node = BytesStart::new(name);
    for attribute in attributes {
        node.push_attribute(*attribute);
    }
    emit(writer, Event::Empty(node))
}
