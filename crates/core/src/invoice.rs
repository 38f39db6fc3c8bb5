//! Bills issued from the cart.

use chrono::{DateTime, Local};

use crate::cart::{CartLine, CartStore};
use crate::error::CartError;
use crate::pricing::{PricingRates, Totals};
use crate::types::{CustomerContext, InvoiceId, Money};

/// Display format for the invoice timestamp, e.g. `05-03-2026 02:45 PM`.
pub const DATE_TIME_FORMAT: &str = "%d-%m-%Y %I:%M %p";

/// A bill for the current cart and customer.
///
/// Invoices are computed on demand and never stored or changed after
/// they are issued.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub invoice_id: InvoiceId,
    pub issued_at: DateTime<Local>,
    pub customer: CustomerContext,
    /// Snapshot of the cart lines at issue time.
    pub lines: Vec<CartLine>,
    pub totals: Totals,
    pub rates: PricingRates,
}

impl Invoice {
    /// Issue a bill with a fresh invoice number.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::MissingCustomerOrEmptyCart`] if the customer has
    /// no name or the cart has no lines.
    pub fn issue(
        cart: &CartStore,
        customer: &CustomerContext,
        rates: PricingRates,
        issued_at: DateTime<Local>,
    ) -> Result<Self, CartError> {
        if customer.name().is_none() || cart.is_empty() {
            return Err(CartError::MissingCustomerOrEmptyCart);
        }

        Ok(Self {
            invoice_id: InvoiceId::generate(),
            issued_at,
            customer: customer.clone(),
            lines: cart.lines().to_vec(),
            totals: rates.compute(cart.subtotal()),
            rates,
        })
    }

    #[must_use]
    pub const fn subtotal(&self) -> Money {
        self.totals.subtotal
    }

    #[must_use]
    pub const fn discount(&self) -> Money {
        self.totals.discount
    }

    #[must_use]
    pub const fn tax(&self) -> Money {
        self.totals.tax
    }

    #[must_use]
    pub const fn final_total(&self) -> Money {
        self.totals.final_total
    }

    /// Issue time formatted for the printed bill.
    #[must_use]
    pub fn date_time(&self) -> String {
        self.issued_at.format(DATE_TIME_FORMAT).to_string()
    }
}
