//! One-shot notifications shown on the next rendered page.
//!
//! Messages are queued in the session and drained when the cart page
//! renders, so each one is shown exactly once.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::models::session_keys;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl FlashLevel {
    /// Lowercase name, used as the CSS class in templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A queued notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

/// Queue a notification for the next render.
///
/// # Errors
///
/// Returns an error if the session store cannot be read or written.
pub async fn push(
    session: &Session,
    level: FlashLevel,
    message: impl Into<String>,
) -> Result<(), tower_sessions::session::Error> {
    let mut queued = session
        .get::<Vec<Flash>>(session_keys::FLASH)
        .await?
        .unwrap_or_default();
    queued.push(Flash {
        level,
        message: message.into(),
    });
    session.insert(session_keys::FLASH, queued).await
}

/// Remove and return every queued notification, oldest first.
///
/// # Errors
///
/// Returns an error if the session store cannot be read or written.
pub async fn take(session: &Session) -> Result<Vec<Flash>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<Flash>>(session_keys::FLASH)
        .await?
        .unwrap_or_default())
}
