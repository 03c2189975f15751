//! Integration tests for the customer profile proxy.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p profile-proxy-integration-tests
//! ```
//!
//! Each test starts the backend on an ephemeral local port, with the Shopify
//! Admin API replaced by a `wiremock` server. No credentials or network
//! access are needed.

use std::collections::HashMap;

use profile_proxy_backend::config::BackendConfig;
use profile_proxy_backend::directory::ShopifyCustomerDirectory;
use profile_proxy_backend::routes;
use profile_proxy_backend::state::AppState;
use tokio::net::TcpListener;
use wiremock::MockServer;

/// Admin token accepted by the backend in tests.
pub const TEST_ADMIN_TOKEN: &str = "atkn_integration_test_token";

/// A running backend wired to a mock Admin API.
pub struct TestContext {
    /// HTTP client for calling the backend.
    pub client: reqwest::Client,
    /// Base URL of the running backend.
    pub base_url: String,
    /// Mock Shopify Admin API.
    pub shopify: MockServer,
}

impl TestContext {
    /// Start a backend using [`TEST_ADMIN_TOKEN`].
    pub async fn new() -> Self {
        Self::with_token(TEST_ADMIN_TOKEN).await
    }

    /// Start a backend with a specific Admin access token.
    ///
    /// # Panics
    ///
    /// Panics if the backend cannot be configured or bound.
    pub async fn with_token(token: &str) -> Self {
        let shopify = MockServer::start().await;

        let vars: HashMap<&str, &str> = HashMap::from([
            ("SHOP_NAME", "integration-store"),
            ("HOST", "127.0.0.1"),
            ("PORT", "0"),
            ("SHOPIFY_ADMIN_ACCESS_TOKEN", token),
        ]);
        let config = BackendConfig::from_vars(|key| vars.get(key).map(|v| (*v).to_string()))
            .expect("Failed to build test configuration");

        let directory = ShopifyCustomerDirectory::new(config.shopify.clone())
            .with_endpoint(format!("{}{}", shopify.uri(), admin_graphql_path()));
        let app = routes::router(AppState::new(config, directory));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
            shopify,
        }
    }

    /// Absolute URL for a backend path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Path the mock Admin API serves GraphQL on.
#[must_use]
pub const fn admin_graphql_path() -> &'static str {
    "/admin/api/2026-01/graphql.json"
}
