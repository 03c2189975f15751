//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::BackendConfig;
use crate::directory::{CustomerDirectory, ShopifyCustomerDirectory};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It is generic over the
/// customer directory so handlers can run against a fake in tests.
pub struct AppState<D = ShopifyCustomerDirectory> {
    inner: Arc<AppStateInner<D>>,
}

struct AppStateInner<D> {
    config: BackendConfig,
    directory: D,
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl AppState {
    /// Create the production state, backed by the Shopify Admin API.
    #[must_use]
    pub fn from_config(config: BackendConfig) -> Self {
        let directory = ShopifyCustomerDirectory::new(config.shopify.clone());
        Self::new(config, directory)
    }
}

impl<D: CustomerDirectory> AppState<D> {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Backend configuration
    /// * `directory` - Customer lookup implementation
    #[must_use]
    pub fn new(config: BackendConfig, directory: D) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, directory }),
        }
    }

    /// Get a reference to the backend configuration.
    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.inner.config
    }

    /// Get a reference to the customer directory.
    #[must_use]
    pub fn directory(&self) -> &D {
        &self.inner.directory
    }
}
