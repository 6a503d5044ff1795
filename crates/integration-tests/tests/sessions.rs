//! Integration tests for the in-memory session store.
//!
//! Run with: cargo test -p order-billing-integration-tests

use order_billing_integration_tests::{TestClient, VALID_ORDER, input_value};

#[tokio::test]
async fn each_browser_holds_one_session_record() {
    let mut alice = TestClient::new();
    let mut bob = alice.new_browser();
    assert!(alice.sessions().is_empty().await);

    alice.get("/").await;
    alice.get("/").await;
    bob.get("/").await;

    assert_eq!(alice.sessions().len().await, 2);
}

#[tokio::test]
async fn sweep_keeps_live_sessions() {
    let mut client = TestClient::new();
    let page = client.get("/").await;
    let tracking = input_value(&page.body, "tracking");

    assert_eq!(client.sessions().purge_expired().await, 0);

    let again = client.get("/").await;
    assert_eq!(input_value(&again.body, "tracking"), tracking);
}

#[tokio::test]
async fn submitted_form_leaves_no_session_behind() {
    let mut client = TestClient::new();
    client.get("/").await;
    assert_eq!(client.sessions().len().await, 1);

    client.post_form("/", &VALID_ORDER).await;
    assert!(client.sessions().is_empty().await);

    client.get("/").await;
    assert_eq!(client.sessions().len().await, 1);
}

#[tokio::test]
async fn submitted_form_keeps_theme_session() {
    let mut client = TestClient::new();
    client.post_form("/theme", &[]).await;
    client.post_form("/", &VALID_ORDER).await;

    assert_eq!(client.sessions().len().await, 1);
    let page = client.get("/").await;
    assert!(page.body.contains("<body class=\"dark\">"));
}
