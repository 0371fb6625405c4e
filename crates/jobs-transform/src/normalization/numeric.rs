//! Numeric normalization utilities.

/// Parses a salary string.
///
/// Blank input is `None`. Anything that does not parse as a finite decimal
/// (`"abc"`, `"1,000"`, `"NaN"`, `"inf"`) is also `None`; the value is
/// dropped rather than reported as an error.
pub fn parse_salary(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
