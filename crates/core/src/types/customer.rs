//! Customer details attached to a bill.

/// Placeholder rendered for customer fields that were never entered.
pub const NOT_AVAILABLE: &str = "N/A";

/// Customer identification entered by the clerk.
///
/// Every field is optional: the session may hold none, some or all of
/// them. Only the name is required before a bill can be issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerContext {
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
}

impl CustomerContext {
    /// Create a context from submitted form values.
    #[must_use]
    pub fn new(
        customer_id: impl Into<String>,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            customer_name: Some(customer_name.into()),
            customer_phone: Some(customer_phone.into()),
        }
    }

    /// Returns the customer name if one was entered and it is not blank.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.customer_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// True when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.customer_id.is_none() && self.customer_name.is_none() && self.customer_phone.is_none()
    }

    /// Customer id for display, `N/A` when absent.
    #[must_use]
    pub fn display_id(&self) -> &str {
        self.customer_id.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Customer name for display, `N/A` when absent.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.customer_name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Customer phone for display, `N/A` when absent.
    #[must_use]
    pub fn display_phone(&self) -> &str {
        self.customer_phone.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}
