//! Giri Mart Core - Cart and invoicing domain.
//!
//! This crate holds everything the till needs to decide what a bill looks
//! like:
//! - [`catalog`] - The static product list with price and stock per item
//! - [`cart`] - The cart store and its stock validation rules
//! - [`pricing`] - Discount, tax and total computation
//! - [`invoice`] - Bills issued from a cart for a customer
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no sessions,
//! no HTTP. The web crate owns the shared state and hands it in by reference.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod error;
pub mod invoice;
pub mod pricing;
pub mod types;

pub use cart::{AddOutcome, CartLine, CartStore, QuantityChange, parse_quantity};
pub use catalog::{Catalog, CatalogItem, Category};
pub use error::CartError;
pub use invoice::Invoice;
pub use pricing::{PricingRates, Totals};
pub use types::*;
