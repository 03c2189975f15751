//! Shopify Admin API GraphQL client.
//!
//! Uses `graphql_client` request/response envelopes with `reqwest` 0.13 for
//! HTTP. Authenticates with the session's offline access token.

mod conversions;
pub mod queries;

use graphql_client::{GraphQLQuery, Response};
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use profile_proxy_core::{CustomerGid, UserData};

use super::{AdminShopifyError, GraphQLError, GraphQLErrorLocation, Session};

use conversions::convert_customer;
use queries::{GetCustomer, get_customer};

/// Shopify Admin API GraphQL client.
///
/// Cheap to build: the underlying `reqwest::Client` is shared, so one can be
/// created per request from a fresh [`Session`].
#[derive(Clone)]
pub struct AdminClient {
    client: reqwest::Client,
    endpoint: String,
    access_token: SecretString,
}

impl AdminClient {
    /// Create an Admin API client for a session.
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `session` - Offline session for the store
    /// * `api_version` - Admin API version (e.g., `2026-01`)
    #[must_use]
    pub fn new(client: reqwest::Client, session: &Session, api_version: &str) -> Self {
        let endpoint = format!(
            "https://{}/admin/api/{}/graphql.json",
            session.shop(),
            api_version
        );

        Self {
            client,
            endpoint,
            access_token: SecretString::from(session.access_token()),
        }
    }

    /// Send requests to a different GraphQL endpoint (e.g., a local mock).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The GraphQL endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    // =========================================================================
    // GraphQL Execution
    // =========================================================================

    /// Execute a GraphQL query.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, AdminShopifyError> {
        let body = Q::build_query(variables);

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Shopify-Access-Token", self.access_token.expose_secret())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        // Rate limits are reported, never retried
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(AdminShopifyError::RateLimited(retry_after));
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AdminShopifyError::Unauthorized(
                "Invalid or expired access token".to_string(),
            ));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify Admin API returned non-success status"
            );
            return Err(AdminShopifyError::GraphQL(vec![GraphQLError::message(
                format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
            )]));
        }

        let response: Response<Q::ResponseData> = serde_json::from_str(&response_text)?;

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            tracing::debug!(errors = ?errors, "GraphQL errors in response");

            return Err(AdminShopifyError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| GraphQLError {
                        message: e.message,
                        locations: e.locations.map_or_else(Vec::new, |locs| {
                            locs.into_iter()
                                .map(|l| GraphQLErrorLocation {
                                    line: i64::from(l.line),
                                    column: i64::from(l.column),
                                })
                                .collect()
                        }),
                        path: e.path.map_or_else(Vec::new, |p| {
                            p.into_iter()
                                .map(|fragment| match fragment {
                                    graphql_client::PathFragment::Key(s) => {
                                        serde_json::Value::String(s)
                                    }
                                    graphql_client::PathFragment::Index(i) => {
                                        serde_json::Value::Number(i.into())
                                    }
                                })
                                .collect()
                        }),
                    })
                    .collect(),
            ));
        }

        response.data.ok_or_else(|| {
            AdminShopifyError::GraphQL(vec![GraphQLError::message("No data in response")])
        })
    }

    // =========================================================================
    // Customer methods
    // =========================================================================

    /// Get a customer's profile by global ID.
    ///
    /// Returns `Ok(None)` when Shopify has no customer with that ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self), fields(customer_id = %id.customer_id()))]
    pub async fn get_customer(
        &self,
        id: &CustomerGid,
    ) -> Result<Option<UserData>, AdminShopifyError> {
        let variables = get_customer::Variables {
            id: id.as_str().to_string(),
        };

        let response = self.execute::<GetCustomer>(variables).await?;

        Ok(response.customer.map(convert_customer))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ShopifyAdminConfig;

    fn session() -> Session {
        Session::offline(&ShopifyAdminConfig {
            shop: "test-store".to_string(),
            api_version: "2026-01".to_string(),
            api_key: None,
            api_secret: None,
            admin_access_token: SecretString::from("test-admin-token"),
        })
        .unwrap()
    }

    fn client_for(server: &MockServer) -> AdminClient {
        AdminClient::new(reqwest::Client::new(), &session(), "2026-01")
            .with_endpoint(format!("{}/admin/api/2026-01/graphql.json", server.uri()))
    }

    fn gid(id: &str) -> CustomerGid {
        CustomerGid::from_customer_id(id).unwrap()
    }

    #[test]
    fn test_endpoint_from_session() {
        let client = AdminClient::new(reqwest::Client::new(), &session(), "2026-01");
        assert_eq!(
            client.endpoint(),
            "https://test-store.myshopify.com/admin/api/2026-01/graphql.json"
        );
    }

    #[tokio::test]
    async fn test_get_customer_sends_token_and_variables() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/admin/api/2026-01/graphql.json"))
            .and(header("X-Shopify-Access-Token", "test-admin-token"))
            .and(body_partial_json(json!({
                "operationName": "GetCustomer",
                "variables": { "id": "gid://shopify/Customer/123" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "customer": {
                        "firstName": "Ada",
                        "metafield": { "value": "https://cdn.shopify.com/ada.png" },
                        "assignedProduct": null
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let customer = client_for(&server)
            .get_customer(&gid("123"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(customer.first_name.as_deref(), Some("Ada"));
        assert_eq!(
            customer.profile_image.as_deref(),
            Some("https://cdn.shopify.com/ada.png")
        );
        assert!(customer.assigned_product.is_none());
    }

    #[tokio::test]
    async fn test_get_customer_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "customer": null } })),
            )
            .mount(&server)
            .await;

        let customer = client_for(&server).get_customer(&gid("404")).await.unwrap();
        assert!(customer.is_none());
    }

    #[tokio::test]
    async fn test_graphql_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{
                    "message": "Invalid global id 'gid://shopify/Customer/abc'",
                    "locations": [{ "line": 2, "column": 3 }],
                    "path": ["customer"]
                }]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_customer(&gid("abc"))
            .await
            .unwrap_err();

        match err {
            AdminShopifyError::GraphQL(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].message.starts_with("Invalid global id"));
                assert_eq!(errors[0].locations[0].line, 2);
                assert_eq!(errors[0].path, vec![json!("customer")]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_missing_data() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = client_for(&server).get_customer(&gid("1")).await.unwrap_err();
        assert_eq!(err.to_string(), "GraphQL errors: No data in response");
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server).get_customer(&gid("1")).await.unwrap_err();
        assert!(matches!(err, AdminShopifyError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_rate_limited_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "2"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).get_customer(&gid("1")).await.unwrap_err();
        assert!(matches!(err, AdminShopifyError::RateLimited(2)));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_customer(&gid("1")).await.unwrap_err();
        assert_eq!(err.to_string(), "GraphQL errors: HTTP 502 Bad Gateway: Bad Gateway");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_customer(&gid("1")).await.unwrap_err();
        assert!(matches!(err, AdminShopifyError::Parse(_)));
    }
}
