//! Cart route handlers.
//!
//! Every mutation redirects back to the cart page with a flash
//! notification. Cart errors are never returned as error responses; the
//! clerk sees the message and resubmits.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use giri_mart_core::{
    AddOutcome, CartError, CartLine, Category, CustomerContext, LineId, Money, QuantityChange,
    parse_quantity,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::flash::{self, Flash, FlashLevel};
use crate::models::{clear_customer, load_customer, save_customer};
use crate::state::AppState;

/// Shown when the add form is missing a field or the quantity is not a number.
const INVALID_SELECTION: &str = "Invalid item selection or quantity.";

/// Shown when the update form quantity is not a number.
const INVALID_QUANTITY: &str = "Invalid quantity entered.";

/// Shown when the customer form is missing a field.
const INVALID_CUSTOMER: &str = "Invalid customer details.";

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub id: LineId,
    pub name: String,
    pub category: String,
    pub price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            category: line.category.clone(),
            price: line.price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// Customer form data.
#[derive(Debug, Deserialize)]
pub struct CustomerForm {
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
}

/// Add item form data.
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    pub item: Option<String>,
    pub quantity: Option<String>,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateItemForm {
    pub quantity: Option<String>,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub shop_name: String,
    pub lines: Vec<CartLineView>,
    pub subtotal: Money,
    pub item_count: u32,
    pub categories: Vec<Category>,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub flashes: Vec<Flash>,
}

/// Display the cart page.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<IndexTemplate> {
    render_index(&state, &session).await
}

/// Save the customer details and display the cart page.
///
/// All three fields must be posted, though any may be blank. A partial
/// form leaves the saved customer untouched and redirects with an error.
#[instrument(skip(state, session))]
pub async fn update_customer(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CustomerForm>,
) -> Result<Response> {
    let (Some(id), Some(name), Some(phone)) =
        (form.customer_id, form.customer_name, form.customer_phone)
    else {
        flash::push(&session, FlashLevel::Error, INVALID_CUSTOMER).await?;
        return Ok(back_to_cart().into_response());
    };

    let customer = CustomerContext::new(id, name, phone);
    save_customer(&session, &customer).await?;
    tracing::info!(customer = customer.display_name(), "Customer details updated");

    flash::push(
        &session,
        FlashLevel::Success,
        "Customer details updated successfully!",
    )
    .await?;

    Ok(render_index(&state, &session).await?.into_response())
}

/// Add an item to the cart.
#[instrument(skip(state, session))]
pub async fn add_item(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddItemForm>,
) -> Result<Redirect> {
    let (Some(item), Some(raw_quantity)) = (form.item, form.quantity) else {
        flash::push(&session, FlashLevel::Error, INVALID_SELECTION).await?;
        return Ok(back_to_cart());
    };
    let Ok(quantity) = parse_quantity(&raw_quantity) else {
        flash::push(&session, FlashLevel::Error, INVALID_SELECTION).await?;
        return Ok(back_to_cart());
    };

    let result = state
        .cart()
        .lock()
        .await
        .add(state.catalog(), &item, quantity);

    match result {
        Ok(AddOutcome::Added { id, quantity }) => {
            tracing::info!(%id, item = %item, quantity, "Added line to cart");
            flash::push(
                &session,
                FlashLevel::Success,
                format!("Added {quantity} x {item} to cart."),
            )
            .await?;
        }
        Ok(AddOutcome::Merged { id, quantity }) => {
            tracing::info!(%id, item = %item, quantity, "Topped up cart line");
            flash::push(&session, FlashLevel::Info, format!("Updated {item} quantity.")).await?;
        }
        Err(err) => {
            tracing::info!(error = %err, item = %item, "Add to cart refused");
            flash::push(&session, FlashLevel::Error, err.to_string()).await?;
        }
    }

    Ok(back_to_cart())
}

/// Set the quantity on a cart line. Zero or less removes the line.
#[instrument(skip(state, session))]
pub async fn update_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<LineId>,
    Form(form): Form<UpdateItemForm>,
) -> Result<Redirect> {
    let Some(Ok(quantity)) = form.quantity.as_deref().map(parse_quantity) else {
        flash::push(&session, FlashLevel::Error, INVALID_QUANTITY).await?;
        return Ok(back_to_cart());
    };

    let result = state
        .cart()
        .lock()
        .await
        .set_quantity(state.catalog(), id, quantity);

    match result {
        Ok(QuantityChange::Updated { name, quantity }) => {
            tracing::info!(%id, item = %name, quantity, "Updated cart line");
            flash::push(
                &session,
                FlashLevel::Info,
                format!("Updated {name} quantity to {quantity}."),
            )
            .await?;
        }
        Ok(QuantityChange::Removed(line)) => {
            tracing::info!(%id, item = %line.name, "Removed cart line");
            flash::push(
                &session,
                FlashLevel::Warning,
                format!("Removed {} from cart.", line.name),
            )
            .await?;
        }
        Ok(QuantityChange::Unchanged) => {
            tracing::debug!(%id, "Update for unknown cart line ignored");
        }
        Err(CartError::InsufficientStock {
            item,
            requested,
            available,
        }) => {
            tracing::info!(%id, item = %item, requested, available, "Quantity update refused");
            flash::push(
                &session,
                FlashLevel::Error,
                format!(
                    "Cannot set quantity for {item} to {requested}. Only {available} available."
                ),
            )
            .await?;
        }
        Err(err) => {
            tracing::info!(%id, error = %err, "Quantity update refused");
            flash::push(&session, FlashLevel::Error, err.to_string()).await?;
        }
    }

    Ok(back_to_cart())
}

/// Remove a cart line.
#[instrument(skip(state, session))]
pub async fn delete_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<LineId>,
) -> Result<Redirect> {
    let removed = state.cart().lock().await.remove(id);

    if let Some(line) = removed {
        tracing::info!(%id, item = %line.name, "Removed cart line");
        flash::push(
            &session,
            FlashLevel::Warning,
            format!("Removed {} from cart.", line.name),
        )
        .await?;
    }

    Ok(back_to_cart())
}

/// Empty the cart and forget the customer.
#[instrument(skip(state, session))]
pub async fn clear_cart(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    {
        let mut cart = state.cart().lock().await;
        cart.clear();
        clear_customer(&session).await?;
    }
    tracing::info!("Cart and customer cleared");

    flash::push(
        &session,
        FlashLevel::Warning,
        "Cart and customer details cleared successfully!",
    )
    .await?;

    Ok(back_to_cart())
}

async fn render_index(state: &AppState, session: &Session) -> Result<IndexTemplate> {
    let customer = load_customer(session).await?;
    let flashes = flash::take(session).await?;

    let (lines, subtotal, item_count) = {
        let cart = state.cart().lock().await;
        (
            cart.lines().iter().map(CartLineView::from).collect(),
            cart.subtotal(),
            cart.item_count(),
        )
    };

    Ok(IndexTemplate {
        shop_name: state.config().shop_name.clone(),
        lines,
        subtotal,
        item_count,
        categories: state.catalog().categories().to_vec(),
        customer_id: customer.customer_id.unwrap_or_default(),
        customer_name: customer.customer_name.unwrap_or_default(),
        customer_phone: customer.customer_phone.unwrap_or_default(),
        flashes,
    })
}

fn back_to_cart() -> Redirect {
    Redirect::to("/")
}
