//! Shopify Admin API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! The Admin API token grants privileged access to store data. It is only
//! ever sent to the store's own Admin API endpoint and never logged.
//!
//! # Architecture
//!
//! - A [`Session`] bundles the shop domain and access token
//! - [`AdminClient`] executes `graphql_client` queries over `reqwest`
//! - Direct API calls to Shopify, no caching, no retries
//!
//! # Example
//!
//! ```rust,ignore
//! use profile_proxy_backend::shopify::{AdminClient, Session};
//!
//! let session = Session::offline(&config.shopify)?;
//! let client = AdminClient::new(reqwest::Client::new(), &session, &config.shopify.api_version);
//!
//! let customer = client.get_customer(&gid).await?;
//! ```

mod admin;
mod session;

pub use admin::AdminClient;
pub use session::Session;

use thiserror::Error;

/// Errors that can occur when interacting with Shopify Admin API.
#[derive(Debug, Error)]
pub enum AdminShopifyError {
    /// Session could not be built from configuration.
    #[error("Invalid session: {0}")]
    InvalidSession(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

impl GraphQLError {
    /// An error carrying only a message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: vec![],
        }
    }
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

/// Joins error messages, each followed by its response path when present.
fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "none reported".to_string();
    }

    errors
        .iter()
        .map(|e| {
            if e.path.is_empty() {
                return e.message.clone();
            }
            let path = e
                .path
                .iter()
                .map(|p| p.as_str().map_or_else(|| p.to_string(), String::from))
                .collect::<Vec<_>>()
                .join(".");
            format!("{} (at {path})", e.message)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_error_formatting() {
        let errors = vec![
            GraphQLError::message("Field not found"),
            GraphQLError::message("Invalid ID"),
        ];
        let err = AdminShopifyError::GraphQL(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Field not found; Invalid ID"
        );
    }

    #[test]
    fn test_graphql_error_path() {
        let errors = vec![GraphQLError {
            message: "Invalid global id".to_string(),
            locations: vec![GraphQLErrorLocation { line: 2, column: 3 }],
            path: vec![serde_json::json!("customer"), serde_json::json!(0)],
        }];
        let err = AdminShopifyError::GraphQL(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Invalid global id (at customer.0)"
        );
    }

    #[test]
    fn test_graphql_error_empty_vec() {
        let err = AdminShopifyError::GraphQL(vec![]);
        assert_eq!(err.to_string(), "GraphQL errors: none reported");
    }

    #[test]
    fn test_rate_limited_error() {
        let err = AdminShopifyError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_invalid_session_error() {
        let err = AdminShopifyError::InvalidSession("shop is empty".to_string());
        assert_eq!(err.to_string(), "Invalid session: shop is empty");
    }
}
