//! Till configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `TILL_HOST` - Bind address (default: 0.0.0.0)
//! - `TILL_PORT` - Listen port (default: 5000)
//! - `TILL_BASE_URL` - Public URL of the till (default: <http://localhost:5000>)
//! - `TILL_SHOP_NAME` - Name printed on bills (default: Giri Shopping Mart)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Trace sample rate, 0.0 to 1.0 (default: 0.0)
//!
//! Discount and tax rates are fixed in `giri_mart_core::PricingRates` and
//! cannot be set here.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Default shop name printed on the bill header.
pub const DEFAULT_SHOP_NAME: &str = "Giri Shopping Mart";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Till application configuration.
#[derive(Debug, Clone)]
pub struct TillConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL of the till
    pub base_url: String,
    /// Shop name shown on the cart page and bills
    pub shop_name: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced in Sentry
    pub sentry_traces_sample_rate: f32,
}

impl Default for TillConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            base_url: "http://localhost:5000".to_string(),
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl TillConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("TILL_HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TILL_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("TILL_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("TILL_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("TILL_BASE_URL", "http://localhost:5000");
        let shop_name = get_env_or_default("TILL_SHOP_NAME", DEFAULT_SHOP_NAME);

        Ok(Self {
            host,
            port,
            base_url,
            shop_name,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: get_rate("SENTRY_SAMPLE_RATE", 1.0)?,
            sentry_traces_sample_rate: get_rate("SENTRY_TRACES_SAMPLE_RATE", 0.0)?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` flag.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Get a sampling rate between 0.0 and 1.0.
fn get_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |raw| parse_rate(key, &raw))
}

fn parse_rate(key: &str, raw: &str) -> Result<f32, ConfigError> {
    let rate = raw
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TillConfig::default();
        assert_eq!(config.shop_name, "Giri Shopping Mart");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
        assert!(!config.is_secure());
    }

    #[test]
    fn test_is_secure() {
        let config = TillConfig {
            base_url: "https://till.girimart.in".to_string(),
            ..TillConfig::default()
        };
        assert!(config.is_secure());
    }

    #[test]
    fn test_parse_rate() {
        assert!((parse_rate("X", "0.25").unwrap() - 0.25).abs() < f32::EPSILON);
        assert!(parse_rate("X", "1.5").is_err());
        assert!(parse_rate("X", "-0.1").is_err());
        let err = parse_rate("X", "half").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "X"));
    }
}
