//! Application state shared across handlers.

use std::sync::Arc;

use giri_mart_core::{Catalog, CartStore, PricingRates};
use tokio::sync::Mutex;

use crate::config::TillConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. There is one cart for the
/// whole till, shared by every browser session; handlers hold its lock for
/// the length of a mutation so requests touching the cart run one at a time.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: TillConfig,
    catalog: Catalog,
    rates: PricingRates,
    cart: Mutex<CartStore>,
}

impl AppState {
    /// Create state with the built-in catalog, standard rates and an empty
    /// cart.
    #[must_use]
    pub fn new(config: TillConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::builtin(),
                rates: PricingRates::STANDARD,
                cart: Mutex::new(CartStore::new()),
            }),
        }
    }

    /// Get a reference to the till configuration.
    #[must_use]
    pub fn config(&self) -> &TillConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get the pricing rates used for bills.
    #[must_use]
    pub fn rates(&self) -> PricingRates {
        self.inner.rates
    }

    /// Get the shared cart.
    #[must_use]
    pub fn cart(&self) -> &Mutex<CartStore> {
        &self.inner.cart
    }
}
