//! In-process scenario tests for the orders HTTP endpoints.
//!
//! These tests build the Axum router **without** binding a TCP socket and
//! drive it via `tower::ServiceExt::oneshot` — no network I/O required.

use std::sync::Arc;

use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use order_api::{handler::AppRouter, state::AppState};
use serde_json::{Value, json};
use tower::ServiceExt; // oneshot

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a fresh in-process router backed by a clean AppState.
fn make_router() -> axum::Router {
    AppRouter::build(Arc::new(AppState::new()))
}

/// Drive the router with a single request and return (status, body_bytes).
async fn call(router: axum::Router, req: Request<axum::body::Body>) -> (StatusCode, bytes::Bytes) {
    let resp = router.oneshot(req).await.expect("oneshot failed");
    let status = resp.status();
    let body = resp
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    (status, body)
}

fn parse_json(b: bytes::Bytes) -> Value {
    serde_json::from_slice(&b).expect("body is not valid JSON")
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<axum::body::Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<axum::body::Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap()
}

fn alice_payload() -> Value {
    json!({
        "customer": "Alice",
        "items": [{"name": "Mouse", "quantity": 1, "price": 19.99}]
    })
}

// ---------------------------------------------------------------------------
// POST /orders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_order_returns_201_with_assigned_id() {
    let router = make_router();

    let (status, body) = call(
        router,
        json_request("POST", "/orders", alice_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let order = parse_json(body);
    assert_eq!(order["id"], 1);
    assert_eq!(order["customer"], "Alice");
    assert_eq!(order["items"][0]["name"], "Mouse");
    assert_eq!(order["items"][0]["quantity"], 1);
    assert_eq!(order["items"][0]["price"], 19.99);
}

#[tokio::test]
async fn create_order_rejects_invalid_payloads_with_422() {
    let cases = [
        json!({"customer": "", "items": [{"name": "Mouse", "quantity": 1, "price": 19.99}]}),
        json!({"customer": "Alice", "items": []}),
        json!({"customer": "Alice", "items": [{"name": "", "quantity": 1, "price": 19.99}]}),
        json!({"customer": "Alice", "items": [{"name": "Mouse", "quantity": 0, "price": 19.99}]}),
        json!({"customer": "Alice", "items": [{"name": "Mouse", "quantity": 1, "price": 0}]}),
        // required fields missing entirely
        json!({"items": [{"name": "Mouse", "quantity": 1, "price": 19.99}]}),
        json!({"customer": "Alice"}),
    ];

    for payload in cases {
        let (status, body) = call(
            make_router(),
            json_request("POST", "/orders", payload.clone()),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "payload: {payload}");
        let err = parse_json(body);
        assert!(err["error"].is_string(), "payload: {payload}");
    }
}

// ---------------------------------------------------------------------------
// GET /orders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_orders_filters_by_customer_substring() {
    let router = make_router();

    for customer in ["Alice", "Bob", "ALICIA", "Charlie"] {
        let payload = json!({
            "customer": customer,
            "items": [{"name": "Widget", "quantity": 1, "price": 1.0}]
        });
        let (status, _) = call(router.clone(), json_request("POST", "/orders", payload)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = call(
        router.clone(),
        empty_request("GET", "/orders?skip=0&limit=10&customer=ali"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let orders = parse_json(body);
    let customers: Vec<&str> = orders
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["customer"].as_str().unwrap())
        .collect();
    assert_eq!(customers, vec!["Alice", "ALICIA"]);

    let (status, body) = call(router, empty_request("GET", "/orders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(body).as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn list_orders_defaults_limit_to_ten_and_honors_skip() {
    let router = make_router();

    for n in 0..12 {
        let payload = json!({
            "customer": format!("customer-{n}"),
            "items": [{"name": "Widget", "quantity": 1, "price": 1.0}]
        });
        let (status, _) = call(router.clone(), json_request("POST", "/orders", payload)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = call(router.clone(), empty_request("GET", "/orders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(body).as_array().unwrap().len(), 10);

    let (status, body) = call(router.clone(), empty_request("GET", "/orders?skip=10")).await;
    assert_eq!(status, StatusCode::OK);
    let orders = parse_json(body);
    assert_eq!(orders.as_array().unwrap().len(), 2);
    assert_eq!(orders[0]["id"], 11);

    let (status, body) = call(router, empty_request("GET", "/orders?skip=100")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(body).as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_orders_rejects_zero_limit() {
    let (status, body) = call(make_router(), empty_request("GET", "/orders?limit=0")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(parse_json(body)["error"].is_string());
}

// ---------------------------------------------------------------------------
// GET /orders/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_order_returns_404_for_unknown_id() {
    let (status, body) = call(make_router(), empty_request("GET", "/orders/99")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse_json(body)["error"], "Order not found");
}

// ---------------------------------------------------------------------------
// PUT /orders/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_order_merges_partial_payloads() {
    let router = make_router();

    let (status, _) = call(
        router.clone(),
        json_request("POST", "/orders", alice_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Only the customer changes; items are preserved.
    let (status, body) = call(
        router.clone(),
        json_request("PUT", "/orders/1", json!({"customer": "Bob Jones"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let order = parse_json(body);
    assert_eq!(order["customer"], "Bob Jones");
    assert_eq!(order["items"][0]["name"], "Mouse");

    // Only the items change; the customer is preserved.
    let (status, body) = call(
        router.clone(),
        json_request(
            "PUT",
            "/orders/1",
            json!({"items": [{"name": "Monitor", "quantity": 2, "price": 149.0}]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let order = parse_json(body);
    assert_eq!(order["customer"], "Bob Jones");
    assert_eq!(order["items"][0]["name"], "Monitor");
}

#[tokio::test]
async fn update_order_returns_404_for_unknown_id() {
    let (status, body) = call(
        make_router(),
        json_request("PUT", "/orders/7", json!({"customer": "Bob"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse_json(body)["error"], "Order not found");
}

// ---------------------------------------------------------------------------
// Full lifecycle (spec scenario)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn crud_lifecycle_end_to_end() {
    let router = make_router();

    // Create two orders; IDs are 1 and 2.
    let (status, body) = call(
        router.clone(),
        json_request("POST", "/orders", alice_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(parse_json(body)["id"], 1);

    let second = json!({
        "customer": "Bob",
        "items": [{"name": "Keyboard", "quantity": 2, "price": 49.50}]
    });
    let (status, body) = call(router.clone(), json_request("POST", "/orders", second)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(parse_json(body)["id"], 2);

    // The first order reads back intact.
    let (status, body) = call(router.clone(), empty_request("GET", "/orders/1")).await;
    assert_eq!(status, StatusCode::OK);
    let order = parse_json(body);
    assert_eq!(order["customer"], "Alice");
    assert_eq!(order["items"][0]["name"], "Mouse");

    // Emptying the items list is rejected and order 1 is left unchanged.
    let (status, body) = call(
        router.clone(),
        json_request("PUT", "/orders/1", json!({"items": []})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(parse_json(body)["error"].is_string());

    let (status, body) = call(router.clone(), empty_request("GET", "/orders/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(body)["items"][0]["name"], "Mouse");

    // Delete the second order; it is gone afterwards.
    let (status, body) = call(router.clone(), empty_request("DELETE", "/orders/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(body)["message"], "Order deleted");

    let (status, body) = call(router.clone(), empty_request("GET", "/orders/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse_json(body)["error"], "Order not found");

    let (status, body) = call(router, empty_request("DELETE", "/orders/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse_json(body)["error"], "Order not found");
}
