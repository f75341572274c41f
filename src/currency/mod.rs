//! Amount formatting for ledger displays.

use rust_decimal::{Decimal, RoundingStrategy};

pub const DEFAULT_CURRENCY: &str = "TL";

const GROUPING_SEPARATOR: char = ',';
const PRECISION: u32 = 2;

/// Renders `amount` with two decimals, `,` thousands grouping and a trailing
/// currency label, e.g. `5,000.00 TL`.
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let number = format_number(amount);
    if currency.is_empty() {
        number
    } else {
        format!("{number} {currency}")
    }
}

pub fn format_number(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(PRECISION, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.*}", PRECISION as usize, rounded.abs());
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body.as_str(), ""));
    let mut formatted = String::new();
    if rounded < Decimal::ZERO {
        formatted.push('-');
    }
    formatted.push_str(&group_digits(int_part, GROUPING_SEPARATOR));
    if !frac_part.is_empty() {
        formatted.push('.');
        formatted.push_str(frac_part);
    }
    formatted
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping_and_currency() {
        assert_eq!(format_amount(Decimal::from(5000), "TL"), "5,000.00 TL");
        assert_eq!(format_amount(Decimal::new(123456789, 2), "TL"), "1,234,567.89 TL");
        assert_eq!(format_amount(Decimal::ZERO, "TL"), "0.00 TL");
    }

    #[test]
    fn negative_values_keep_sign_before_digits() {
        assert_eq!(format_number(Decimal::from(-3800)), "-3,800.00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_number(Decimal::new(10005, 3)), "10.01");
    }

    #[test]
    fn omits_empty_currency_label() {
        assert_eq!(format_amount(Decimal::from(12), ""), "12.00");
    }
}
