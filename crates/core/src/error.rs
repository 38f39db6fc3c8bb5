//! Cart and billing errors.
//!
//! The display strings are written for the clerk: the web layer shows them
//! verbatim as notifications.

use thiserror::Error;

/// Errors raised by cart mutations and bill generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Quantity was not an integer, or not positive where it must be.
    #[error("Quantity must be a positive number.")]
    InvalidQuantity,

    /// The item name does not exist in the catalog.
    #[error("Item '{name}' not found.")]
    ItemNotFound {
        /// Name that was looked up.
        name: String,
    },

    /// The request would take more units than the catalog holds.
    #[error("Sorry, only {available} of {item} remaining in stock.")]
    InsufficientStock {
        /// Item being added or updated.
        item: String,
        /// Quantity the clerk asked for.
        requested: i64,
        /// Units that can still be put in the cart.
        available: u32,
    },

    /// A bill needs a customer name and at least one cart line.
    #[error(
        "Please enter customer details and add items to the cart before generating a bill."
    )]
    MissingCustomerOrEmptyCart,
}
