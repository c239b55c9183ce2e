//! Number rendering for user-facing reports.
//!
//! Reports use a comma as the decimal separator and a fixed single decimal
//! place for ratios and percentages.

use std::fmt;

/// Rounds to one decimal place, half away from zero.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a value with one decimal place and a comma separator.
///
/// # Example
///
/// ```
/// use hvac_sizing::support::format::decimal_comma;
///
/// assert_eq!(decimal_comma(116.666), "116,7");
/// assert_eq!(decimal_comma(24.0), "24,0");
/// ```
#[must_use]
pub fn decimal_comma(value: f64) -> String {
    DecimalComma(value).to_string()
}

/// [`Display`](fmt::Display) adapter for [`decimal_comma`], usable inside
/// `write!` without an intermediate allocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecimalComma(pub f64);

impl fmt::Display for DecimalComma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = round1(self.0);
        // Avoid printing "-0,0".
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        let text = format!("{rounded:.1}");
        f.write_str(&text.replace('.', ","))
    }
}

/// [`Display`](fmt::Display) adapter rendering a percentage, e.g. `"27,5%"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(pub f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", DecimalComma(self.0))
    }
}
