//! Colors and geometry shared by the chart renderers.

use serde::{Deserialize, Serialize};

/// Space between the SVG edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Visual configuration handed to renderers.
///
/// Every field has a default, so a partial TOML `[theme]` table is enough to
/// override a single color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub accent: String,
    pub accent_hover: String,
    pub gray: String,
    pub background_dark: String,
    pub background: String,
    /// Slice colors for pies with more than two slices.
    pub pie_palette: Vec<String>,
    /// Slice colors for two-slice pies.
    pub pair_palette: Vec<String>,
    pub width: f64,
    pub height: f64,
    pub bar_margin: Margins,
    pub column_margin: Margins,
    pub histogram_margin: Margins,
    /// Padding between bands as a fraction of the band.
    pub band_padding: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        let accent = "cyan".to_string();
        let gray = "#aaa".to_string();
        let background_dark = "#333".to_string();
        Self {
            pie_palette: vec![
                accent.clone(),
                gray.clone(),
                "#888".to_string(),
                "#666".to_string(),
                "#444".to_string(),
                background_dark.clone(),
            ],
            pair_palette: vec![accent.clone(), background_dark.clone()],
            accent,
            accent_hover: "#00ffff".to_string(),
            gray,
            background_dark,
            background: "#000".to_string(),
            width: 600.0,
            height: 400.0,
            bar_margin: Margins::new(10.0, 30.0, 40.0, 120.0),
            column_margin: Margins::new(40.0, 30.0, 100.0, 100.0),
            histogram_margin: Margins::new(10.0, 30.0, 40.0, 50.0),
            band_padding: 0.1,
        }
    }
}

impl ChartTheme {
    /// Color of slice `index` in a pie with `slices` slices.
    pub fn slice_color(&self, index: usize, slices: usize) -> &str {
        let palette = if slices <= 2 && !self.pair_palette.is_empty() {
            &self.pair_palette
        } else {
            &self.pie_palette
        };
        if palette.is_empty() {
            return &self.accent;
        }
        &palette[index % palette.len()]
    }
}
