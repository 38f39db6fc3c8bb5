//! Core types for the till.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod customer;
pub mod id;
pub mod money;

pub use customer::CustomerContext;
pub use id::*;
pub use money::{MONEY_SCALE, Money, format_amount, round_money};
