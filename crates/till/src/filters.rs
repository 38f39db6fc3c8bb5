//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use giri_mart_core::{Money, format_amount};

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Local::now().year())
}

/// Formats an amount in rupees, e.g. `₹47,250.00`.
///
/// Values that are not decimal numbers are passed through unchanged.
///
/// Usage in templates: `{{ invoice.final_total|rupees }}`
#[askama::filter_fn]
pub fn rupees(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_rupees(&value.to_string()))
}

fn format_rupees(raw: &str) -> String {
    raw.parse::<Money>()
        .map_or_else(|_| raw.to_string(), |amount| format!("₹{}", format_amount(amount)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees("47250"), "₹47,250.00");
        assert_eq!(format_rupees("2250.0025"), "₹2,250.00");
        assert_eq!(format_rupees("N/A"), "N/A");
    }
}
