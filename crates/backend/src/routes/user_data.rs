//! Customer profile route handler.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::instrument;

use profile_proxy_core::{CustomerGid, UserData};

use crate::directory::CustomerDirectory;
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Query parameters for `GET /user-data`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserDataQuery {
    pub user_id: Option<String>,
}

/// Return a customer's name, profile image, and assigned product.
///
/// Checks run in order, and Shopify is only called once all pass:
/// 1. `user_id` present and non-empty, else 400
/// 2. Admin access token usable, else 500
///
/// A query string that doesn't parse (e.g. a repeated `user_id`) is treated
/// as a missing `user_id`. A missing customer is a 404. Any Shopify failure
/// is a generic 500.
#[instrument(skip_all)]
pub async fn user_data<D: CustomerDirectory>(
    State(state): State<AppState<D>>,
    query: std::result::Result<Query<UserDataQuery>, QueryRejection>,
) -> Result<Json<UserData>> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected query string");
        ApiError::MissingUserId
    })?;

    let user_id = query.user_id.unwrap_or_default();
    let gid = CustomerGid::from_customer_id(&user_id).map_err(|_| ApiError::MissingUserId)?;

    if !state.config().shopify.has_usable_access_token() {
        return Err(ApiError::AccessTokenNotConfigured);
    }

    let customer = state
        .directory()
        .find_customer(&gid)
        .await?
        .ok_or(ApiError::CustomerNotFound)?;

    tracing::debug!(customer_id = %gid.customer_id(), "Fetched customer profile");

    Ok(Json(customer))
}
