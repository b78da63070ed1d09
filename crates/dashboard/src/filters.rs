//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Format a rupiah amount with `.` thousands separators, e.g. `Rp 1.500.000`.
///
/// Fractions are rounded to two places and shown after a `,`.
#[must_use]
pub fn format_idr(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let digits = rounded.abs().to_string();
    let (whole, fraction) = digits
        .split_once('.')
        .map_or((digits.as_str(), None), |(w, f)| (w, Some(f)));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!("{sign}Rp {grouped},{fraction}"),
        None => format!("{sign}Rp {grouped}"),
    }
}

/// Formats a price as rupiah.
///
/// Values that are not decimal numbers are shown unchanged.
///
/// Usage in templates: `{{ shoe.price_idr|idr }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn idr(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let text = value.to_string();
    Ok(Decimal::from_str(&text).map_or(text, format_idr))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_idr_groups_thousands() {
        assert_eq!(format_idr(Decimal::from(1_500_000)), "Rp 1.500.000");
        assert_eq!(format_idr(Decimal::from(999)), "Rp 999");
        assert_eq!(format_idr(Decimal::from(1000)), "Rp 1.000");
        assert_eq!(format_idr(Decimal::ZERO), "Rp 0");
    }

    #[test]
    fn test_format_idr_fraction_and_sign() {
        assert_eq!(format_idr(Decimal::new(12_345_675, 1)), "Rp 1.234.567,5");
        assert_eq!(format_idr(Decimal::from(-25_000)), "-Rp 25.000");
    }
}
