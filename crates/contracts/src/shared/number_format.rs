//! Number formatting for the dashboards (vi-VN grouping, VND currency)
//!
//! All fixed-decimal output rounds half away from zero so that values match
//! what the backend reports and what the charts print on their axes.

use serde::{Deserialize, Serialize};

const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

/// vi-VN groups thousands with a dot
const GROUP_SEPARATOR: char = '.';

/// Currency suffix, separated from the amount by a no-break space
const CURRENCY_SUFFIX: &str = "\u{a0}₫";

/// Rounds to `decimals` digits, ties away from zero.
///
/// Non-finite input is treated as zero.
pub fn round_half_away(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(decimals as i32);
    // + 0.0 turns a rounded -0.0 into 0.0
    (value * factor).round() / factor + 0.0
}

/// Fixed number of decimals without grouping.
///
/// ```
/// use contracts::shared::number_format::format_fixed;
/// assert_eq!(format_fixed(2.25, 1), "2.3");
/// ```
pub fn format_fixed(value: f64, decimals: u32) -> String {
    format!(
        "{:.prec$}",
        round_half_away(value, decimals),
        prec = decimals as usize
    )
}

fn group_thousands(n: i128) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(c);
    }
    if n < 0 {
        result.push('-');
    }

    result.chars().rev().collect()
}

/// Integer amount with thousands grouping, no currency.
///
/// ```
/// use contracts::shared::number_format::format_grouped;
/// assert_eq!(format_grouped(1234567.0), "1.234.567");
/// ```
pub fn format_grouped(value: f64) -> String {
    group_thousands(round_half_away(value, 0) as i128)
}

/// Full VND amount, zero decimals, never abbreviated.
pub fn format_currency(value: f64) -> String {
    format!("{}{}", format_grouped(value), CURRENCY_SUFFIX)
}

/// Abbreviated VND amount with one decimal: `225.7B`, `12.5M`.
///
/// Amounts under one million fall back to [`format_currency`]. A millions
/// mantissa that rounds up to 1000 is promoted to billions.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= BILLION || round_half_away(abs / MILLION, 1) >= 1000.0 {
        format!("{}B", format_fixed(value / BILLION, 1))
    } else if abs >= MILLION {
        format!("{}M", format_fixed(value / MILLION, 1))
    } else {
        format_currency(value)
    }
}

/// Amount expressed in billions: `format_billions(2_345_000_000.0, 2) == "2.35B"`
pub fn format_billions(value: f64, decimals: u32) -> String {
    format!("{}B", format_fixed(value / BILLION, decimals))
}

/// Signed percentage with one decimal; non-negative values get a leading `+`.
pub fn format_percent(value: f64) -> String {
    let rounded = round_half_away(value, 1);
    let sign = if rounded >= 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, rounded)
}

/// Unsigned percentage: `format_ratio(12.345, 1) == "12.3%"`
pub fn format_ratio(value: f64, decimals: u32) -> String {
    format!("{}%", format_fixed(value, decimals))
}

/// Direction and size of a growth percentage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Growth {
    pub magnitude: f64,
    pub is_positive: bool,
}

impl Growth {
    /// `+12.5%` / `-3.2%`
    pub fn signed_label(&self) -> String {
        let sign = if self.is_positive { '+' } else { '-' };
        format!("{}{}%", sign, format_fixed(self.magnitude, 1))
    }
}

/// Zero counts as positive growth.
pub fn growth(value: f64) -> Growth {
    Growth {
        magnitude: value.abs(),
        is_positive: value >= 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0\u{a0}₫");
        assert_eq!(format_currency(225_700_000_000.0), "225.700.000.000\u{a0}₫");
        assert_eq!(format_currency(1_000_000_000.0), "1.000.000.000\u{a0}₫");
        assert_eq!(format_currency(-1234.0), "-1.234\u{a0}₫");
        assert_eq!(format_currency(999.5), "1.000\u{a0}₫");
    }

    #[test]
    fn test_format_currency_has_no_decimals() {
        assert_eq!(format_currency(1234.4), "1.234\u{a0}₫");
        assert!(!format_currency(12.75).contains(','));
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(225_700_000_000.0), "225.7B");
        assert_eq!(format_compact(12_500_000.0), "12.5M");
        assert_eq!(format_compact(950_000.0), "950.000\u{a0}₫");
        assert_eq!(format_compact(-3_450_000_000.0), "-3.5B");
    }

    #[test]
    fn test_compact_and_full_agree_at_unit_boundaries() {
        assert_eq!(format_compact(1_000_000_000.0), "1.0B");
        assert_eq!(format_currency(1_000_000_000.0), "1.000.000.000\u{a0}₫");
        assert_eq!(format_compact(-1_000_000_000.0), "-1.0B");
        assert!(format_currency(-1_000_000_000.0).starts_with('-'));

        // rounds up into the next unit instead of printing "1000.0M"
        assert_eq!(format_compact(999_960_000.0), "1.0B");
        assert_eq!(format_compact(999_940_000.0), "999.9M");
        assert_eq!(format_compact(1_000_000.0), "1.0M");
    }

    #[test]
    fn test_format_fixed_rounds_ties_away_from_zero() {
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(-2.5, 0), "-3");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(-0.04, 1), "0.0");
    }

    #[test]
    fn test_format_billions() {
        assert_eq!(format_billions(2_345_000_000.0, 2), "2.35B");
        assert_eq!(format_billions(0.0, 1), "0.0B");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.5), "+12.5%");
        assert_eq!(format_percent(-3.2), "-3.2%");
        assert_eq!(format_percent(0.0), "+0.0%");
        assert_eq!(format_percent(-0.01), "+0.0%");
    }

    #[test]
    fn test_growth() {
        assert_eq!(
            growth(12.5),
            Growth {
                magnitude: 12.5,
                is_positive: true
            }
        );
        assert_eq!(
            growth(-3.2),
            Growth {
                magnitude: 3.2,
                is_positive: false
            }
        );
        assert_eq!(
            growth(0.0),
            Growth {
                magnitude: 0.0,
                is_positive: true
            }
        );
        assert_eq!(growth(-3.2).signed_label(), "-3.2%");
        assert_eq!(growth(0.0).signed_label(), "+0.0%");
    }

    #[test]
    fn test_non_finite_values_render_as_zero() {
        assert_eq!(format_grouped(f64::NAN), "0");
        assert_eq!(format_ratio(f64::INFINITY, 0), "0%");
    }
}
