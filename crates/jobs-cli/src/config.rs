//! Optional TOML configuration file.
//!
//! ```toml
//! [dashboard]
//! top_n = 15
//! histogram_bins = 25
//!
//! [theme]
//! accent = "#ff8800"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use jobs_report::ChartTheme;
use jobs_transform::DashboardOptions;

use crate::cli::ReportArgs;

/// Settings read from `--config`; every table and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub dashboard: DashboardOptions,
    pub theme: ChartTheme,
}

impl Settings {
    /// Loads settings from `path`, or returns the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects counts that would silently empty a chart.
    pub fn validate(&self) -> Result<()> {
        let dashboard = &self.dashboard;
        ensure!(dashboard.top_n > 0, "dashboard.top_n must be at least 1");
        ensure!(
            dashboard.seniority_top_n > 0,
            "dashboard.seniority_top_n must be at least 1"
        );
        ensure!(
            dashboard.histogram_bins > 0,
            "dashboard.histogram_bins must be at least 1"
        );
        Ok(())
    }

    /// Applies command line overrides on top of file values.
    pub fn with_report_overrides(mut self, args: &ReportArgs) -> Self {
        if let Some(top_n) = args.top_n {
            self.dashboard.top_n = top_n.get();
        }
        if let Some(bins) = args.bins {
            self.dashboard.histogram_bins = bins.get();
        }
        self
    }
}
