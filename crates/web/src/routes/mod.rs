//! HTTP route handlers for the order form.
//!
//! # Route Structure
//!
//! ```text
//! GET  /              - Order billing form
//! POST /              - Submit the form (acknowledgment or 422 with errors)
//! POST /fields        - Apply one field edit, returns derived fields (JSON)
//! POST /theme         - Toggle light/dark theme, redirects to /
//! GET  /health        - Health check
//! ```

pub mod order_form;
pub mod theme;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the order form.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(order_form::show).post(order_form::submit))
        .route("/fields", post(order_form::update_field))
        .route("/theme", post(theme::toggle))
}
