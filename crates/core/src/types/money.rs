//! Decimal money helpers.
//!
//! The till works in a single currency, so an amount is just a
//! [`Decimal`] in rupees. Rounding and display live here so pricing and
//! rendering agree on both.

use rust_decimal::{Decimal, RoundingStrategy};

/// An amount in rupees.
pub type Money = Decimal;

/// Decimal places kept on every computed amount.
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to paise using banker's rounding (half to even).
#[must_use]
pub fn round_money(amount: Money) -> Money {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Format an amount for display with thousands separators, e.g. `47,250.00`.
#[must_use]
pub fn format_amount(amount: Money) -> String {
    let rounded = round_money(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money_half_to_even() {
        assert_eq!(round_money(Decimal::new(1125, 3)), Decimal::new(112, 2));
        assert_eq!(round_money(Decimal::new(1135, 3)), Decimal::new(114, 2));
        assert_eq!(round_money(Decimal::new(5000, 0)), Decimal::new(5000, 0));
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(Decimal::new(47250, 0)), "47,250.00");
        assert_eq!(format_amount(Decimal::new(105_000, 2)), "1,050.00");
        assert_eq!(format_amount(Decimal::new(80, 0)), "80.00");
        assert_eq!(format_amount(Decimal::new(123_456_789, 2)), "1,234,567.89");
    }

    #[test]
    fn test_format_amount_zero_and_negative() {
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
        assert_eq!(format_amount(Decimal::new(-150_050, 2)), "-1,500.50");
    }
}
