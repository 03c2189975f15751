//! Unified error handling with Sentry integration.
//!
//! Handlers return `Result<T, ApiError>`. Every error becomes a JSON body of
//! the form `{"error": "<message>"}`. Upstream failures are captured to Sentry
//! and logged here, once, before responding; their cause is never sent to the
//! client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::shopify::AdminShopifyError;

/// Application-level error type for the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `user_id` query parameter is missing or empty.
    #[error("user_id is required")]
    MissingUserId,

    /// The Admin API access token is absent or unusable.
    #[error("Shopify Admin API access token is not configured.")]
    AccessTokenNotConfigured,

    /// Shopify has no matching customer.
    #[error("Customer not found")]
    CustomerNotFound,

    /// Building the session or client, or calling Shopify, failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] AdminShopifyError),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingUserId => StatusCode::BAD_REQUEST,
            Self::CustomerNotFound => StatusCode::NOT_FOUND,
            Self::AccessTokenNotConfigured | Self::Shopify(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Shopify(err) = &self {
            let event_id = sentry::capture_error(err);
            tracing::error!(
                error = %err,
                sentry_event_id = %event_id,
                "Error fetching data from Shopify"
            );
        }

        // Don't expose upstream error details to clients
        let message = match &self {
            Self::Shopify(_) => "Failed to fetch data from Shopify".to_string(),
            _ => self.to_string(),
        };

        (self.status(), Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
