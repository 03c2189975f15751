//! HTTP route handlers for the backend.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /user-data?user_id=<id> - Customer profile and assigned product
//! ```

pub mod user_data;

use axum::{
    Router,
    http::{HeaderValue, Method},
    middleware,
    routing::get,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, OnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::directory::CustomerDirectory;
use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Create the API routes router.
pub fn routes<D: CustomerDirectory>() -> Router<AppState<D>> {
    Router::new()
        .route("/health", get(health))
        .route("/user-data", get(user_data::user_data::<D>))
}

/// Build the application router with its middleware stack.
///
/// Sentry layers are added by the binary on top of this.
pub fn router<D: CustomerDirectory>(state: AppState<D>) -> Router {
    let cors = cors_layer(&state.config().cors_allowed_origins);

    let app = routes::<D>()
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                )
                // Upstream failures are already logged by `ApiError`
                .on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
        )
        .with_state(state);

    match cors {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check Shopify.
async fn health() -> &'static str {
    "ok"
}

/// CORS for the configured frontend origins, or `None` if there are none.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET]),
    )
}
