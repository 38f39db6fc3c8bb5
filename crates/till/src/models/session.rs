//! Customer details kept in the browser session.
//!
//! The customer is per session while the cart is shared by the whole till.
//! Each field is stored under its own key so a partially filled form
//! round-trips as entered.

use giri_mart_core::CustomerContext;
use tower_sessions::Session;

/// Session keys used by the till.
pub mod keys {
    /// Key for the customer id entered by the clerk.
    pub const CUSTOMER_ID: &str = "customer_id";

    /// Key for the customer name entered by the clerk.
    pub const CUSTOMER_NAME: &str = "customer_name";

    /// Key for the customer phone number entered by the clerk.
    pub const CUSTOMER_PHONE: &str = "customer_phone";

    /// Key for queued flash notifications.
    pub const FLASH: &str = "_flash";
}

/// Read the customer fields from the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_customer(
    session: &Session,
) -> Result<CustomerContext, tower_sessions::session::Error> {
    Ok(CustomerContext {
        customer_id: session.get::<String>(keys::CUSTOMER_ID).await?,
        customer_name: session.get::<String>(keys::CUSTOMER_NAME).await?,
        customer_phone: session.get::<String>(keys::CUSTOMER_PHONE).await?,
    })
}

/// Write the customer fields to the session. Absent fields are removed.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn save_customer(
    session: &Session,
    customer: &CustomerContext,
) -> Result<(), tower_sessions::session::Error> {
    for (key, value) in [
        (keys::CUSTOMER_ID, &customer.customer_id),
        (keys::CUSTOMER_NAME, &customer.customer_name),
        (keys::CUSTOMER_PHONE, &customer.customer_phone),
    ] {
        match value {
            Some(value) => session.insert(key, value).await?,
            None => {
                session.remove_value(key).await?;
            }
        }
    }
    Ok(())
}

/// Remove every customer field from the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn clear_customer(session: &Session) -> Result<(), tower_sessions::session::Error> {
    save_customer(session, &CustomerContext::default()).await
}
