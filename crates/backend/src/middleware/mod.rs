//! HTTP middleware stack for the backend.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions; added in `main`)
//! 2. CORS (only when origins are configured)
//! 3. `TraceLayer` (request span with status and latency)
//! 4. Request ID (add unique ID to each request)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
