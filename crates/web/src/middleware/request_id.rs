//! Request ID middleware.
//!
//! Every form page, field edit and submit gets an `x-request-id` that ties
//! its log lines and Sentry events together. An ID forwarded by a proxy is
//! reused only when it is short printable ASCII; anything else is replaced.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest forwarded ID that is kept.
const MAX_FORWARDED_ID_LEN: usize = 64;

fn forwarded_id(request: &Request) -> Option<String> {
    let id = request.headers().get(REQUEST_ID_HEADER)?.to_str().ok()?;
    let acceptable = !id.is_empty()
        && id.len() <= MAX_FORWARDED_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'));
    acceptable.then(|| id.to_owned())
}

/// Tag the request with an ID, then echo it on the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = forwarded_id(&request).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", &request_id);
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_preserves_upstream_request_id() {
        let request = Request::get("/")
            .header(REQUEST_ID_HEADER, "upstream-123")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).unwrap(),
            "upstream-123"
        );
    }

    #[tokio::test]
    async fn test_replaces_unsafe_upstream_request_id() {
        let too_long = "a".repeat(MAX_FORWARDED_ID_LEN + 1);
        for forwarded in ["has space", "semi;colon", too_long.as_str()] {
            let request = Request::get("/")
                .header(REQUEST_ID_HEADER, forwarded)
                .body(Body::empty())
                .unwrap();
            let response = app().oneshot(request).await.unwrap();

            let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
            assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok(), "kept {forwarded}");
        }
    }
}
