//! Bill route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Local;
use giri_mart_core::{Invoice, Money};
use tower_sessions::Session;
use tracing::instrument;

use super::cart::CartLineView;
use crate::error::Result;
use crate::filters;
use crate::flash::{self, FlashLevel};
use crate::models::load_customer;
use crate::state::AppState;

/// Printable bill template.
#[derive(Template, WebTemplate)]
#[template(path = "bill.html")]
pub struct BillTemplate {
    pub shop_name: String,
    pub invoice_id: String,
    pub date_time: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub lines: Vec<CartLineView>,
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub final_total: Money,
    pub tax_rate: u32,
    pub discount_rate: u32,
}

impl BillTemplate {
    /// Build the bill view for an issued invoice.
    #[must_use]
    pub fn new(shop_name: String, invoice: &Invoice) -> Self {
        Self {
            shop_name,
            invoice_id: invoice.invoice_id.to_string(),
            date_time: invoice.date_time(),
            customer_id: invoice.customer.display_id().to_string(),
            customer_name: invoice.customer.display_name().to_string(),
            customer_phone: invoice.customer.display_phone().to_string(),
            lines: invoice.lines.iter().map(CartLineView::from).collect(),
            subtotal: invoice.subtotal(),
            discount: invoice.discount(),
            tax: invoice.tax(),
            final_total: invoice.final_total(),
            tax_rate: invoice.rates.tax_rate_percent(),
            discount_rate: invoice.rates.discount_rate_percent(),
        }
    }

    /// Whether the discount line should be printed.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }
}

/// Issue a bill for the current cart and customer.
///
/// Redirects back to the cart with an error notification when there is no
/// customer name or the cart is empty.
#[instrument(skip(state, session))]
pub async fn print_bill(State(state): State<AppState>, session: Session) -> Result<Response> {
    let customer = load_customer(&session).await?;

    let issued = {
        let cart = state.cart().lock().await;
        Invoice::issue(&cart, &customer, state.rates(), Local::now())
    };

    match issued {
        Ok(invoice) => {
            tracing::info!(
                invoice_id = %invoice.invoice_id,
                final_total = %invoice.final_total(),
                "Bill issued"
            );
            Ok(BillTemplate::new(state.config().shop_name.clone(), &invoice).into_response())
        }
        Err(err) => {
            tracing::info!(error = %err, "Bill refused");
            flash::push(&session, FlashLevel::Error, err.to_string()).await?;
            Ok(Redirect::to("/").into_response())
        }
    }
}
