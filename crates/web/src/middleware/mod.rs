//! HTTP middleware stack for the order form.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions with an in-memory store swept for expired records)
//! 5. Security headers (CSP, frame denial, no-store)

pub mod request_id;
pub mod security_headers;
pub mod session;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::{
    EXPIRED_SWEEP_INTERVAL, FormSessionStore, create_session_layer, delete_expired_sessions,
};
