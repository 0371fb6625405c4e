//! Rendering collaborators for the job postings dashboard.
//!
//! The transform crate produces a [`Dashboard`]; this crate turns it into
//! something to look at. Each output format implements [`DashboardRenderer`]
//! so callers pick a strategy without the data pipeline knowing about any
//! of them.
//!
//! [`Dashboard`]: jobs_transform::Dashboard

pub mod common;
pub mod error;
pub mod json;
pub mod svg;
pub mod table;
pub mod theme;

pub use error::{ReportError, Result};
pub use json::JsonRenderer;
pub use svg::{RenderedFile, SvgRenderer, write_rendered_files};
pub use table::TableRenderer;
pub use theme::{ChartTheme, Margins};

use jobs_transform::Dashboard;

/// A dashboard output strategy.
pub trait DashboardRenderer {
    type Output;

    fn render(&self, dashboard: &Dashboard) -> Result<Self::Output>;
}
