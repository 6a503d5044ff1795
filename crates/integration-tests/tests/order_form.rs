//! Integration tests for the order billing form.
//!
//! Run with: cargo test -p order-billing-integration-tests

use axum::http::StatusCode;
use order_billing_integration_tests::{TestClient, VALID_ORDER, input_value, order_with};

// ============================================================================
// Rendering
// ============================================================================

#[tokio::test]
async fn form_renders_with_defaults() {
    let mut client = TestClient::new();
    let response = client.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Order Billing"));
    assert_eq!(input_value(&response.body, "status").as_deref(), Some("Pending"));

    let tracking = input_value(&response.body, "tracking").unwrap_or_default();
    assert!(tracking.starts_with("TRACK-"), "got {tracking}");
    assert_eq!(input_value(&response.body, "fullName").as_deref(), Some(""));
}

#[tokio::test]
async fn zip_input_carries_length_cap() {
    let mut client = TestClient::new();
    let response = client.get("/").await;

    assert!(response.body.contains("maxlength=\"6\""));
    assert!(response.body.contains("pattern=\"[0-9]*\""));
}

#[tokio::test]
async fn tracking_is_stable_across_requests_and_edits() {
    let mut client = TestClient::new();
    let first = client.get("/").await;
    let tracking = input_value(&first.body, "tracking");

    client
        .post_form("/fields", &[("name", "firstName"), ("value", "Jane")])
        .await;
    client
        .post_form("/fields", &[("name", "city"), ("value", "Metropolis")])
        .await;

    let second = client.get("/").await;
    assert_eq!(input_value(&second.body, "tracking"), tracking);
}

#[tokio::test]
async fn each_browser_gets_its_own_form() {
    let mut alice = TestClient::new();
    let mut bob = alice.new_browser();

    alice
        .post_form("/fields", &[("name", "firstName"), ("value", "Alice")])
        .await;
    let alice_page = alice.get("/").await;
    let bob_page = bob.get("/").await;

    assert_eq!(input_value(&alice_page.body, "firstName").as_deref(), Some("Alice"));
    assert_eq!(input_value(&bob_page.body, "firstName").as_deref(), Some(""));
    assert_ne!(
        input_value(&alice_page.body, "tracking"),
        input_value(&bob_page.body, "tracking")
    );
}

// ============================================================================
// Field updates
// ============================================================================

#[tokio::test]
async fn field_update_returns_derived_full_name() {
    let mut client = TestClient::new();

    let response = client
        .post_form("/fields", &[("name", "firstName"), ("value", "Jane")])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["fullName"], "Jane ");

    let response = client
        .post_form("/fields", &[("name", "lastName"), ("value", "Doe")])
        .await;
    assert_eq!(response.json()["fullName"], "Jane Doe");

    let page = client.get("/").await;
    assert_eq!(input_value(&page.body, "fullName").as_deref(), Some("Jane Doe"));
}

#[tokio::test]
async fn field_update_does_not_show_errors() {
    let mut client = TestClient::new();
    client
        .post_form("/fields", &[("name", "email"), ("value", "not-an-email")])
        .await;

    let page = client.get("/").await;
    assert!(!page.body.contains("Please enter a valid email address"));
}

#[tokio::test]
async fn unknown_field_is_rejected() {
    let mut client = TestClient::new();
    let response = client
        .post_form("/fields", &[("name", "phone"), ("value", "555")])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("unknown field"));
}

#[tokio::test]
async fn read_only_fields_are_rejected() {
    let mut client = TestClient::new();
    let before = client.get("/").await;

    for name in ["fullName", "status", "tracking"] {
        let response = client
            .post_form("/fields", &[("name", name), ("value", "x")])
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{name}");
    }

    let after = client.get("/").await;
    assert_eq!(
        input_value(&after.body, "tracking"),
        input_value(&before.body, "tracking")
    );
    assert_eq!(input_value(&after.body, "status").as_deref(), Some("Pending"));
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test]
async fn valid_order_is_acknowledged() {
    let mut client = TestClient::new();
    let page = client.get("/").await;
    let tracking = input_value(&page.body, "tracking").unwrap_or_default();

    let response = client.post_form("/", &VALID_ORDER).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Form submitted successfully!"));
    assert!(response.body.contains(&tracking));
    assert!(response.body.contains("Jane Doe"));
}

#[tokio::test]
async fn submitted_form_is_discarded() {
    let mut client = TestClient::new();
    let page = client.get("/").await;
    let tracking = input_value(&page.body, "tracking");

    client.post_form("/", &VALID_ORDER).await;

    let fresh = client.get("/").await;
    assert_ne!(input_value(&fresh.body, "tracking"), tracking);
    assert_eq!(input_value(&fresh.body, "email").as_deref(), Some(""));
}

#[tokio::test]
async fn short_zip_is_the_only_error() {
    let mut client = TestClient::new();
    let response = client.post_form("/", &order_with("zip", "123")).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Zip Code must be 6 digits"));
    assert_eq!(response.body.matches("class=\"field__error\"").count(), 1);
}

#[tokio::test]
async fn bad_email_is_the_only_error() {
    let mut client = TestClient::new();
    let response = client
        .post_form("/", &order_with("email", "not-an-email"))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Please enter a valid email address"));
    assert_eq!(response.body.matches("class=\"field__error\"").count(), 1);
}

#[tokio::test]
async fn empty_submit_lists_every_required_field() {
    let mut client = TestClient::new();
    let response = client.post_form("/", &[]).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    for message in [
        "Please enter a valid email address",
        "First Name is required",
        "Last Name is required",
        "Address is required",
        "City is required",
        "State is required",
        "Zip Code must be 6 digits",
        "County is required",
    ] {
        assert!(response.body.contains(message), "missing: {message}");
    }
    assert_eq!(response.body.matches("class=\"field__error\"").count(), 8);
}

#[tokio::test]
async fn rejected_submit_keeps_values_and_allows_resubmit() {
    let mut client = TestClient::new();

    let rejected = client.post_form("/", &order_with("city", "")).await;
    assert_eq!(rejected.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(rejected.body.contains("City is required"));
    assert_eq!(input_value(&rejected.body, "email").as_deref(), Some("a@b.co"));
    assert_eq!(input_value(&rejected.body, "fullName").as_deref(), Some("Jane Doe"));

    // Errors stay visible on reload until the next submit
    let reloaded = client.get("/").await;
    assert!(reloaded.body.contains("City is required"));

    let accepted = client.post_form("/", &VALID_ORDER).await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert!(accepted.body.contains("Form submitted successfully!"));
}

#[tokio::test]
async fn posted_read_only_values_are_ignored() {
    let mut client = TestClient::new();
    let page = client.get("/").await;
    let tracking = input_value(&page.body, "tracking").unwrap_or_default();

    // Short zip keeps the form on screen so the read-only values can be checked
    let mut order = order_with("zip", "1");
    order.push(("tracking", "TRACK-0"));
    order.push(("fullName", "Someone Else"));

    let response = client.post_form("/", &order).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(input_value(&response.body, "tracking"), Some(tracking));
    assert_eq!(input_value(&response.body, "fullName").as_deref(), Some("Jane Doe"));
}
