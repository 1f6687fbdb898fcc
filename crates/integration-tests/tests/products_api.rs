//! Integration tests for the product catalog endpoint.
//!
//! Exercises the listing, the id lookup, the not-found payload, and the
//! unsupported-method response.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use bazaar_integration_tests::test_app;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn test_list_all_products() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let products = json.as_array().expect("array body");
    assert_eq!(products.len(), 3);
    assert_eq!(products[0]["name"], "Laptop");
    assert_eq!(products[0]["price"].as_f64(), Some(1200.0));
}

#[tokio::test]
async fn test_lookup_by_id() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products?id=2")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], "2");
    assert_eq!(json["name"], "Phone");
    assert_eq!(json["price"].as_f64(), Some(800.0));
    assert_eq!(json["description"], "Smartphone with excellent features");
}

#[tokio::test]
async fn test_lookup_unknown_id_is_404_with_error_payload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products?id=99")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"error": "Product not found"}));
}

#[tokio::test]
async fn test_unsupported_method_gets_204_with_allow_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/products")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response
            .headers()
            .get(header::ALLOW)
            .and_then(|v| v.to_str().ok()),
        Some("GET")
    );
}

#[tokio::test]
async fn test_health() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(&dir.path().join("cart.json"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}
