//! Currency text helpers and the running cart totals.
//!
//! Displayed amounts are parsed once at boot to seed the store; after that
//! totals are maintained arithmetically and only ever written back.

use crate::utils::parse_float_prefix;

/// Parse a currency-formatted string such as `"$1,299.00"`.
///
/// Everything except ASCII digits, `.`, `,` and `-` is stripped, then the
/// first comma is read as the decimal separator.  Anything unparseable is 0.
pub fn parse_money(text: &str) -> f64 {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    let normalized = stripped.replacen(',', ".", 1);
    let value = parse_float_prefix(&normalized);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// `$X.XX`
pub fn format_money(value: f64) -> String {
    format!("${:.2}", value)
}

/// Read a `data-subtotal` attribute. Missing or non-numeric values count as 0.
pub fn parse_line_subtotal(raw: Option<&str>) -> f64 {
    let value = parse_float_prefix(raw.unwrap_or("0"));
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// `current - amount`, never below zero.
pub fn subtract_clamped(current: f64, amount: f64) -> f64 {
    (current - amount).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    pub subtotal: f64,
    pub total: f64,
}

impl CartTotals {
    pub fn from_display(subtotal_text: Option<&str>, total_text: Option<&str>) -> Self {
        Self {
            subtotal: subtotal_text.map(parse_money).unwrap_or(0.0),
            total: total_text.map(parse_money).unwrap_or(0.0),
        }
    }

    /// Totals after one line worth `line_subtotal` left the cart.
    pub fn after_removal(self, line_subtotal: f64) -> Self {
        Self {
            subtotal: subtract_clamped(self.subtotal, line_subtotal),
            total: subtract_clamped(self.total, line_subtotal),
        }
    }

    pub fn subtotal_text(&self) -> String {
        format_money(self.subtotal)
    }

    pub fn total_text(&self) -> String {
        format_money(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_displayed_amounts() {
        assert_eq!(parse_money("$17000.00"), 17000.0);
        assert_eq!(parse_money("Total: $ 450.50 MXN"), 450.5);
        assert_eq!(parse_money("760,25"), 760.25);
        assert_eq!(parse_money(""), 0.0);
        assert_eq!(parse_money("gratis"), 0.0);
    }

    #[test]
    fn thousands_separator_is_read_as_decimal() {
        // "1,234.56" -> "1.234.56" -> prefix "1.234"
        assert_eq!(parse_money("$1,234.56"), 1.234);
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1210.5), "$1210.50");
    }

    #[test]
    fn line_subtotal_defaults_to_zero() {
        assert_eq!(parse_line_subtotal(None), 0.0);
        assert_eq!(parse_line_subtotal(Some("abc")), 0.0);
        assert_eq!(parse_line_subtotal(Some("900.5")), 900.5);
    }

    #[test]
    fn removal_clamps_at_zero() {
        let totals = CartTotals { subtotal: 100.0, total: 120.0 };
        let after = totals.after_removal(110.0);
        assert_eq!(after.subtotal, 0.0);
        assert_eq!(after.total, 10.0);
        assert_eq!(after.subtotal_text(), "$0.00");
        assert_eq!(after.total_text(), "$10.00");
    }

    proptest! {
        #[test]
        fn removal_is_max_zero_of_difference(
            sub in 0.0f64..100_000.0,
            tot in 0.0f64..100_000.0,
            line in 0.0f64..100_000.0,
        ) {
            let after = CartTotals { subtotal: sub, total: tot }.after_removal(line);
            prop_assert!(after.subtotal >= 0.0);
            prop_assert!(after.total >= 0.0);
            prop_assert_eq!(after.subtotal, (sub - line).max(0.0));
            prop_assert_eq!(after.total, (tot - line).max(0.0));
        }
    }
}
