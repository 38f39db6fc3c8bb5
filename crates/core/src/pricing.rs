//! Discount, tax and total computation.
//!
//! Amounts are rounded to paise at two points: the discount is rounded on
//! its own, then the tax is computed from the discounted amount and rounded
//! on its own. The final total is the rounded sum of the two. Rounding once
//! at the end gives different cents on some carts.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::types::{Money, round_money};

/// Fixed pricing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingRates {
    /// Subtotal at or above which the discount applies.
    pub discount_threshold: Money,
    /// Fraction taken off the subtotal, e.g. `0.10`.
    pub discount_rate: Decimal,
    /// Fraction charged on the discounted amount, e.g. `0.05`.
    pub tax_rate: Decimal,
}

impl PricingRates {
    /// The shop's rates: 10% off at 50,000 and above, 5% sales tax.
    pub const STANDARD: Self = Self {
        discount_threshold: Decimal::from_parts(50_000, 0, 0, false, 0),
        discount_rate: Decimal::from_parts(10, 0, 0, false, 2),
        tax_rate: Decimal::from_parts(5, 0, 0, false, 2),
    };

    /// Tax rate as a whole percentage (truncated).
    #[must_use]
    pub fn tax_rate_percent(&self) -> u32 {
        whole_percent(self.tax_rate)
    }

    /// Discount rate as a whole percentage (truncated).
    #[must_use]
    pub fn discount_rate_percent(&self) -> u32 {
        whole_percent(self.discount_rate)
    }

    /// Compute the bill amounts for a subtotal.
    #[must_use]
    pub fn compute(&self, subtotal: Money) -> Totals {
        let discount = if subtotal >= self.discount_threshold {
            round_money(subtotal * self.discount_rate)
        } else {
            Decimal::ZERO
        };
        let taxable = subtotal - discount;
        let tax = round_money(taxable * self.tax_rate);
        let final_total = round_money(taxable + tax);

        Totals {
            subtotal,
            discount,
            taxable,
            tax,
            final_total,
        }
    }
}

impl Default for PricingRates {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn whole_percent(rate: Decimal) -> u32 {
    (rate * Decimal::ONE_HUNDRED).trunc().to_u32().unwrap_or(0)
}

/// Computed bill amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Money,
    pub discount: Money,
    /// Subtotal minus discount.
    pub taxable: Money,
    pub tax: Money,
    pub final_total: Money,
}
