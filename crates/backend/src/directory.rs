//! Customer lookup seam between the HTTP layer and Shopify.
//!
//! Route handlers only see [`CustomerDirectory`]. Production uses
//! [`ShopifyCustomerDirectory`]; tests substitute in-memory fakes.

use std::future::Future;

use profile_proxy_core::{CustomerGid, UserData};
use tracing::instrument;

use crate::config::ShopifyAdminConfig;
use crate::shopify::{AdminClient, AdminShopifyError, Session};

/// Looks up customer profiles by global ID.
pub trait CustomerDirectory: Send + Sync + 'static {
    /// Find a customer's profile.
    ///
    /// Returns `Ok(None)` when no customer matches.
    fn find_customer(
        &self,
        id: &CustomerGid,
    ) -> impl Future<Output = Result<Option<UserData>, AdminShopifyError>> + Send;
}

/// Customer directory backed by the Shopify Admin API.
///
/// Builds a fresh offline [`Session`] and [`AdminClient`] for every lookup;
/// only the HTTP connection pool is shared between requests.
#[derive(Clone)]
pub struct ShopifyCustomerDirectory {
    http: reqwest::Client,
    config: ShopifyAdminConfig,
    endpoint: Option<String>,
}

impl ShopifyCustomerDirectory {
    /// Create a directory for the configured store.
    #[must_use]
    pub fn new(config: ShopifyAdminConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            endpoint: None,
        }
    }

    /// Send Admin API requests to a different GraphQL endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    fn client(&self) -> Result<AdminClient, AdminShopifyError> {
        let session = Session::offline(&self.config)?;
        let client = AdminClient::new(self.http.clone(), &session, &self.config.api_version);

        Ok(match &self.endpoint {
            Some(endpoint) => client.with_endpoint(endpoint.clone()),
            None => client,
        })
    }
}

impl CustomerDirectory for ShopifyCustomerDirectory {
    #[instrument(skip(self), fields(customer_id = %id.customer_id()))]
    async fn find_customer(
        &self,
        id: &CustomerGid,
    ) -> Result<Option<UserData>, AdminShopifyError> {
        self.client()?.get_customer(id).await
    }
}
