//! HTTP route handlers for the till.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Cart page
//! POST /                   - Save customer details, then cart page
//! POST /add_item           - Add an item (form: item, quantity)
//! POST /update/{item_id}   - Set a line's quantity (form: quantity)
//! GET  /delete/{item_id}   - Remove a line
//! GET  /clear_cart         - Empty the cart and forget the customer
//! GET  /bill               - Printable bill
//! ```
//!
//! Every mutating route redirects to `/` with a flash notification.

pub mod bill;
pub mod cart;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the till.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::index).post(cart::update_customer))
        .route("/add_item", post(cart::add_item))
        .route("/update/{item_id}", post(cart::update_item))
        .route("/delete/{item_id}", get(cart::delete_item))
        .route("/clear_cart", get(cart::clear_cart))
        .route("/bill", get(bill::print_bill))
}
