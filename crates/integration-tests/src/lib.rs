//! Integration tests for Order Billing.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p order-billing-integration-tests
//! ```
//!
//! The web router runs in-process; no server or database is needed.
//! [`TestClient`] carries the session cookie between requests the way a
//! browser would.

use std::path::PathBuf;

use axum::{
    Router,
    body::{self, Body},
    http::{HeaderValue, Request, Response, StatusCode, header},
};
use order_billing_web::{
    app, config::WebConfig, middleware::FormSessionStore, state::AppState,
};
use tower::ServiceExt;

/// A single browser session against an in-process router.
pub struct TestClient {
    app: Router,
    state: AppState,
    cookie: Option<String>,
}

/// Status, headers and body of a completed request.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body should be JSON")
    }
}

impl TestClient {
    /// Fresh router and empty cookie jar.
    #[must_use]
    pub fn new() -> Self {
        let mut config = WebConfig::local();
        config.static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../web/static");
        let state = AppState::new(config);
        Self {
            app: app(state.clone()),
            state,
            cookie: None,
        }
    }

    /// Another browser against the same server (shared session store, no cookie).
    #[must_use]
    pub fn new_browser(&self) -> Self {
        Self {
            app: self.app.clone(),
            state: self.state.clone(),
            cookie: None,
        }
    }

    /// The server's session store, shared by every browser from [`new_browser`](Self::new_browser).
    #[must_use]
    pub fn sessions(&self) -> &FormSessionStore {
        self.state.sessions()
    }

    /// GET `path`.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = Request::get(path)
            .body(Body::empty())
            .expect("request should build");
        self.send(request).await
    }

    /// POST `pairs` as `application/x-www-form-urlencoded` to `path`.
    pub async fn post_form(&mut self, path: &str, pairs: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        let request = Request::post(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("request should build");
        self.send(request).await
    }

    /// Send `request`, attaching and then updating the session cookie.
    pub async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            let value = HeaderValue::from_str(cookie).expect("cookie should be a header value");
            request.headers_mut().insert(header::COOKIE, value);
        }

        let response: Response<Body> = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
        {
            // Keep only `name=value`, drop the attributes
            self.cookie = set_cookie.split(';').next().map(str::to_string);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// The example order that passes every rule.
pub const VALID_ORDER: [(&str, &str); 8] = [
    ("email", "a@b.co"),
    ("firstName", "Jane"),
    ("lastName", "Doe"),
    ("address", "1 Rd"),
    ("city", "Metropolis"),
    ("state", "NY"),
    ("zip", "123456"),
    ("county", "Kings"),
];

/// [`VALID_ORDER`] with one field replaced.
#[must_use]
pub fn order_with<'a>(name: &str, value: &'a str) -> Vec<(&'a str, &'a str)> {
    VALID_ORDER
        .iter()
        .map(|&(n, v)| if n == name { (n, value) } else { (n, v) })
        .collect()
}

/// Extract the `value` attribute of the input named `name` from rendered HTML.
#[must_use]
pub fn input_value(html: &str, name: &str) -> Option<String> {
    let marker = format!("name=\"{name}\"");
    let after_name = html.split_once(&marker)?.1;
    let after_value = after_name.split_once("value=\"")?.1;
    after_value.split_once('"').map(|(value, _)| value.to_string())
}
