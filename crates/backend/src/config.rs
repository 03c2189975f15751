//! Backend configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOP_NAME` - Shopify store name or domain (e.g., your-store or your-store.myshopify.com)
//!
//! ## Optional
//! - `SHOPIFY_ADMIN_ACCESS_TOKEN` - Admin API access token (checked per request, not at startup)
//! - `SHOPIFY_API_KEY` - Shopify app API key
//! - `SHOPIFY_API_SECRET` - Shopify app API secret
//! - `SHOPIFY_API_VERSION` - Admin API version (default: 2026-01)
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 3000)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated frontend origins allowed to call the API
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (default: 1.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const DEFAULT_API_VERSION: &str = "2026-01";

/// Admin tokens with this prefix are treated as not configured.
pub const REJECTED_TOKEN_PREFIX: &str = "shpat_";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Backend application configuration.
///
/// Built once in `main` and handed to [`AppState`](crate::state::AppState).
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Shopify Admin API configuration
    pub shopify: ShopifyAdminConfig,
    /// Origins allowed by CORS (empty disables the CORS layer)
    pub cors_allowed_origins: Vec<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Shopify Admin API configuration.
///
/// Implements `Debug` manually to redact the credentials.
#[derive(Clone)]
pub struct ShopifyAdminConfig {
    /// Store name or domain as configured
    pub shop: String,
    /// Admin API version (e.g., 2026-01)
    pub api_version: String,
    /// App API key
    pub api_key: Option<String>,
    /// App API secret
    pub api_secret: Option<SecretString>,
    /// Admin API access token (may be empty; see [`Self::has_usable_access_token`])
    pub admin_access_token: SecretString,
}

impl std::fmt::Debug for ShopifyAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyAdminConfig")
            .field("shop", &self.shop)
            .field("api_version", &self.api_version)
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "[REDACTED]"))
            .field("admin_access_token", &"[REDACTED]")
            .finish()
    }
}

impl BackendConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get_or_default(&var, "HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_or_default(&var, "PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;

        let shopify = ShopifyAdminConfig::from_vars(&var)?;

        let cors_allowed_origins = get_optional(&var, "CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let sentry_dsn = get_optional(&var, "SENTRY_DSN");
        let sentry_environment = get_optional(&var, "SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional(&var, "SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional(&var, "SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            shopify,
            cors_allowed_origins,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ShopifyAdminConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            shop: get_required(var, "SHOP_NAME")?,
            api_version: get_or_default(var, "SHOPIFY_API_VERSION", DEFAULT_API_VERSION),
            api_key: get_optional(var, "SHOPIFY_API_KEY"),
            api_secret: get_optional(var, "SHOPIFY_API_SECRET").map(SecretString::from),
            admin_access_token: SecretString::from(
                get_optional(var, "SHOPIFY_ADMIN_ACCESS_TOKEN").unwrap_or_default(),
            ),
        })
    }

    /// Whether the admin access token may be used for API calls.
    ///
    /// An empty token, or one starting with [`REJECTED_TOKEN_PREFIX`], counts
    /// as not configured.
    #[must_use]
    pub fn has_usable_access_token(&self) -> bool {
        let token = self.admin_access_token.expose_secret();
        !token.is_empty() && !token.starts_with(REJECTED_TOKEN_PREFIX)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required variable. Empty values count as missing.
fn get_required(var: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String, ConfigError> {
    get_optional(var, key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional variable. Empty values count as unset.
fn get_optional(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    var(key).filter(|v| !v.is_empty())
}

/// Get a variable with a default value.
fn get_or_default(var: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional(var, key).unwrap_or_else(|| default.to_string())
}
