//! JSON rendering for downstream tooling.

use jobs_transform::Dashboard;

use crate::DashboardRenderer;
use crate::error::Result;

/// Serializes the dashboard model as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl DashboardRenderer for JsonRenderer {
    type Output = String;

    fn render(&self, dashboard: &Dashboard) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(dashboard)?
        } else {
            serde_json::to_string(dashboard)?
        };
        Ok(text)
    }
}
