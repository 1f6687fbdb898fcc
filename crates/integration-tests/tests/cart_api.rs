//! Integration tests for the cart and checkout flows over HTTP.
//!
//! Each test drives the shared router repeatedly; the application state is
//! cloned into every `oneshot` call, so the cart carries across requests
//! exactly as it does for a running server.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use bazaar_integration_tests::test_app;

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    (status, serde_json::from_slice(&bytes).expect("body is JSON"))
}

async fn post(app: &Router, uri: &str, payload: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    (status, serde_json::from_slice(&bytes).expect("body is JSON"))
}

#[tokio::test]
async fn test_fresh_cart_is_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    let (status, cart) = get(&app, "/cart").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["items"], json!([]));
    assert_eq!(cart["subtotal"].as_f64(), Some(0.0));
    assert_eq!(cart["item_count"], 0);
}

#[tokio::test]
async fn test_add_twice_merges_into_one_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    post(&app, "/cart/add", &json!({"product_id": "1"})).await;
    let (status, cart) = post(&app, "/cart/add", &json!({"product_id": "1"})).await;

    assert_eq!(status, StatusCode::OK);
    let items = cart["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "1");
    assert_eq!(items[0]["name"], "Laptop");
    assert_eq!(items[0]["quantity"], 2);
    assert_eq!(cart["subtotal"].as_f64(), Some(2400.0));
}

#[tokio::test]
async fn test_add_with_explicit_quantity() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    let (_, cart) = post(&app, "/cart/add", &json!({"product_id": "3", "quantity": 4})).await;

    let items = cart["items"].as_array().expect("items array");
    assert_eq!(items[0]["quantity"], 4);
    assert_eq!(cart["subtotal"].as_f64(), Some(600.0));
}

#[tokio::test]
async fn test_add_unknown_product_is_404_and_does_not_mutate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    post(&app, "/cart/add", &json!({"product_id": "2"})).await;
    let (status, body) = post(&app, "/cart/add", &json!({"product_id": "99"})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product not found"}));

    let (_, cart) = get(&app, "/cart").await;
    assert_eq!(cart["item_count"], 1);
}

#[tokio::test]
async fn test_update_below_one_is_noop() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    post(&app, "/cart/add", &json!({"product_id": "1", "quantity": 3})).await;
    let (status, cart) = post(&app, "/cart/update", &json!({"product_id": "1", "quantity": 0})).await;

    assert_eq!(status, StatusCode::OK);
    let items = cart["items"].as_array().expect("items array");
    assert_eq!(items[0]["quantity"], 3);
}

#[tokio::test]
async fn test_update_replaces_quantity() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    post(&app, "/cart/add", &json!({"product_id": "1"})).await;
    let (_, cart) = post(&app, "/cart/update", &json!({"product_id": "1", "quantity": 5})).await;

    let items = cart["items"].as_array().expect("items array");
    assert_eq!(items[0]["quantity"], 5);
    assert_eq!(cart["subtotal"].as_f64(), Some(6000.0));
}

#[tokio::test]
async fn test_remove_keeps_other_lines_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    post(&app, "/cart/add", &json!({"product_id": "1"})).await;
    post(&app, "/cart/add", &json!({"product_id": "2"})).await;
    post(&app, "/cart/add", &json!({"product_id": "3"})).await;

    let (_, cart) = post(&app, "/cart/remove", &json!({"product_id": "2"})).await;

    let ids: Vec<&str> = cart["items"]
        .as_array()
        .expect("items array")
        .iter()
        .filter_map(|item| item["id"].as_str())
        .collect();
    assert_eq!(ids, ["1", "3"]);
}

#[tokio::test]
async fn test_remove_absent_is_noop() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    post(&app, "/cart/add", &json!({"product_id": "1"})).await;
    let (status, cart) = post(&app, "/cart/remove", &json!({"product_id": "99"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["item_count"], 1);
}

#[tokio::test]
async fn test_clear_empties_the_cart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    post(&app, "/cart/add", &json!({"product_id": "1"})).await;
    post(&app, "/cart/add", &json!({"product_id": "2"})).await;

    let (_, cart) = post(&app, "/cart/clear", &json!({})).await;
    assert_eq!(cart["items"], json!([]));
    assert_eq!(cart["item_count"], 0);
}

#[tokio::test]
async fn test_count_badge() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    post(&app, "/cart/add", &json!({"product_id": "1", "quantity": 2})).await;
    post(&app, "/cart/add", &json!({"product_id": "3", "quantity": 3})).await;

    let (_, count) = get(&app, "/cart/count").await;
    assert_eq!(count, json!({"count": 5}));
}

#[tokio::test]
async fn test_checkout_reports_total_then_clears() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cart_path = dir.path().join("cart.json");
    let app = test_app(&cart_path);

    post(&app, "/cart/add", &json!({"product_id": "1"})).await;
    post(&app, "/cart/add", &json!({"product_id": "1"})).await;

    let (status, receipt) = post(&app, "/checkout", &json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["total"].as_f64(), Some(2400.0));

    let (_, cart) = get(&app, "/cart").await;
    assert_eq!(cart["items"], json!([]));

    // The persisted slot holds the empty collection too.
    let raw = std::fs::read_to_string(&cart_path).expect("slot written");
    assert_eq!(raw, "[]");
}
