//! Display Formatting
//!
//! Currency and date rendering for the dashboard. Amounts use the pt-BR
//! currency layout for BRL (`R$ 1.234,56`, with a no-break space after the
//! symbol) and dates use the pt-BR calendar layout evaluated in UTC.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::models::TransactionType;

/// No-break space placed between the currency symbol and the digits
pub const NBSP: char = '\u{a0}';

/// Prefix marking an outcome amount
pub const OUTCOME_PREFIX: &str = "- ";

/// pt-BR calendar date pattern
pub const DATE_PATTERN: &str = "%d/%m/%Y";

/// Currency layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    /// Currency symbol, e.g. "R$"
    pub symbol: String,
    /// Separator between symbol and digits
    pub spacer: char,
    /// Decimal separator
    pub decimal_separator: char,
    /// Thousands separator
    pub group_separator: char,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::brl()
    }
}

impl CurrencyFormatter {
    /// Brazilian real in the pt-BR layout
    pub fn brl() -> Self {
        Self {
            symbol: "R$".to_string(),
            spacer: NBSP,
            decimal_separator: ',',
            group_separator: '.',
        }
    }

    /// Format an amount with two fraction digits.
    ///
    /// The shortest decimal form of the amount (`1.005`, not its binary
    /// expansion) is rounded half away from zero at the cent. Negative
    /// amounts keep their sign even when they round to zero cents.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return format!("{}{}NaN", self.symbol, self.spacer);
        }

        if value.is_infinite() {
            let sign = if value < 0.0 { "-" } else { "" };
            return format!("{}{}{}∞", sign, self.symbol, self.spacer);
        }

        let cents = to_cents(value.abs());
        let sign = if value.is_sign_negative() { "-" } else { "" };

        format!(
            "{}{}{}{}{}{:02}",
            sign,
            self.symbol,
            self.spacer,
            self.group_digits(cents / 100),
            self.decimal_separator,
            cents % 100
        )
    }

    fn group_digits(&self, units: u128) -> String {
        let digits = units.to_string();
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.group_separator);
            }
            out.push(ch);
        }

        out
    }
}

/// Whole cents of a non-negative finite amount.
///
/// Falls back to binary rounding outside the `Decimal` range; f64 -> u128
/// saturates there, so huge magnitudes cannot wrap.
fn to_cents(amount: f64) -> u128 {
    Decimal::from_str(&amount.to_string())
        .ok()
        .and_then(|d| {
            d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .checked_mul(Decimal::ONE_HUNDRED)
        })
        .and_then(|cents| cents.to_u128())
        .unwrap_or_else(|| (amount * 100.0).round() as u128)
}

/// Format an amount as BRL currency
pub fn format_value(value: f64) -> String {
    CurrencyFormatter::brl().format(value)
}

/// Prefix an already formatted amount with `"- "` for outcomes
pub fn verify_value(value: &str, kind: TransactionType) -> String {
    match kind {
        TransactionType::Outcome => format!("{}{}", OUTCOME_PREFIX, value),
        TransactionType::Income => value.to_string(),
    }
}

/// Format a timestamp as a pt-BR calendar date in UTC
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format(DATE_PATTERN).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn brl(digits: &str) -> String {
        format!("R${}{}", NBSP, digits)
    }

    #[test]
    fn test_format_value_basic() {
        assert_eq!(format_value(100.0), brl("100,00"));
        assert_eq!(format_value(50.0), brl("50,00"));
        assert_eq!(format_value(0.0), brl("0,00"));
        assert_eq!(format_value(3.5), brl("3,50"));
    }

    #[test]
    fn test_format_value_grouping() {
        assert_eq!(format_value(1000.0), brl("1.000,00"));
        assert_eq!(format_value(999.99), brl("999,99"));
        assert_eq!(format_value(1234567.89), brl("1.234.567,89"));
        assert_eq!(format_value(100000.0), brl("100.000,00"));
    }

    #[test]
    fn test_format_value_rounding() {
        assert_eq!(format_value(10.125), brl("10,13"));
        assert_eq!(format_value(10.124), brl("10,12"));
        assert_eq!(format_value(0.999), brl("1,00"));
    }

    #[test]
    fn test_format_value_negative() {
        assert_eq!(format_value(-50.0), format!("-{}", brl("50,00")));
        assert_eq!(format_value(-1500.5), format!("-{}", brl("1.500,50")));
        // Rounds to zero cents but keeps the sign
        assert_eq!(format_value(-0.001), format!("-{}", brl("0,00")));
        assert_eq!(format_value(-0.0), format!("-{}", brl("0,00")));
    }

    #[test]
    fn test_format_value_rounds_typed_decimal() {
        // Binary products land just below the half cent for these
        assert_eq!(format_value(1.005), brl("1,01"));
        assert_eq!(format_value(0.145), brl("0,15"));
        assert_eq!(format_value(1.255), brl("1,26"));
        assert_eq!(format_value(-1.005), format!("-{}", brl("1,01")));
        assert_eq!(format_value(0.1 + 0.2), brl("0,30"));
    }

    #[test]
    fn test_format_value_huge() {
        // Outside the Decimal range; still grouped, no panic
        let text = format_value(1e30);
        assert!(text.starts_with(&brl("1.000.000")));
    }

    #[test]
    fn test_format_value_non_finite() {
        assert_eq!(format_value(f64::NAN), brl("NaN"));
        assert_eq!(format_value(f64::INFINITY), brl("∞"));
        assert_eq!(format_value(f64::NEG_INFINITY), format!("-{}", brl("∞")));
    }

    #[test]
    fn test_custom_formatter() {
        let usd = CurrencyFormatter {
            symbol: "$".to_string(),
            spacer: ' ',
            decimal_separator: '.',
            group_separator: ',',
        };
        assert_eq!(usd.format(1234.5), "$ 1,234.50");
    }

    #[test]
    fn test_verify_value() {
        let formatted = format_value(50.0);
        assert_eq!(
            verify_value(&formatted, TransactionType::Outcome),
            format!("- {}", formatted)
        );
        assert_eq!(verify_value(&formatted, TransactionType::Income), formatted);
    }

    #[test]
    fn test_format_date_utc() {
        let at = Utc.with_ymd_and_hms(2020, 5, 24, 0, 0, 0).unwrap();
        assert_eq!(format_date(at), "24/05/2020");

        let late = Utc.with_ymd_and_hms(2020, 5, 24, 23, 59, 59).unwrap();
        assert_eq!(format_date(late), "24/05/2020");
    }
}
