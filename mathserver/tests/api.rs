//! HTTP API integration tests
//!
//! Starts the real router on an ephemeral port and exercises the endpoints
//! with a plain HTTP client.

use std::net::SocketAddr;

use mathserver::{MathServer, RealResultStore};
use serde_json::{Value, json};

/// Bind the router on an ephemeral port and serve it in the background
async fn spawn_server() -> SocketAddr {
    let bind_address: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let server = MathServer::new(bind_address, RealResultStore::new());
    let router = server.build_router();

    let listener = tokio::net::TcpListener::bind(bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

async fn post_math(addr: SocketAddr, body: Value) -> (u16, Value) {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{}/math/", addr))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body: Value = response.json().await.unwrap();
    (status, body)
}

async fn get_math(addr: SocketAddr, operation: &str) -> (u16, Value) {
    let response = reqwest::get(format!("http://{}/math/{}", addr, operation))
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body: Value = response.json().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn test_post_computes_and_returns_result() {
    let addr = spawn_server().await;

    let (status, body) = post_math(
        addr,
        json!({ "operation": "mean", "values": [1.0, 2.0, 3.0, 4.0] }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["operation"], "mean");
    assert_eq!(body["result"], 2.5);
}

#[tokio::test]
async fn test_get_after_post_returns_identical_result() {
    let addr = spawn_server().await;

    let (status, posted) = post_math(
        addr,
        json!({ "operation": "median", "values": [5.0, 1.0, 3.0, 2.0] }),
    )
    .await;
    assert_eq!(status, 200);

    let (status, fetched) = get_math(addr, "median").await;
    assert_eq!(status, 200);
    assert_eq!(fetched, posted);
}

#[tokio::test]
async fn test_mode_tie_breaks_to_smallest() {
    let addr = spawn_server().await;

    let (status, body) = post_math(
        addr,
        json!({ "operation": "mode", "values": [3.0, 3.0, 1.0, 1.0, 2.0] }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["result"], 1.0);
}

#[tokio::test]
async fn test_get_never_computed_returns_404() {
    let addr = spawn_server().await;

    let (status, body) = get_math(addr, "mean").await;

    assert_eq!(status, 404);
    assert_eq!(body["detail"], "Result not found");
}

#[tokio::test]
async fn test_get_does_not_validate_operation_names() {
    let addr = spawn_server().await;

    // Lookup only: an unknown name is just a missing key
    let (status, _) = get_math(addr, "variance").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_post_invalid_operation_returns_400() {
    let addr = spawn_server().await;

    let (status, body) = post_math(
        addr,
        json!({ "operation": "variance", "values": [1.0, 2.0] }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["detail"], "Invalid operation");
}

#[tokio::test]
async fn test_post_empty_values_returns_500() {
    let addr = spawn_server().await;

    let (status, body) = post_math(addr, json!({ "operation": "mean", "values": [] })).await;

    assert_eq!(status, 500);
    assert!(
        body["detail"].as_str().unwrap().contains("empty"),
        "unexpected detail: {}",
        body["detail"]
    );
}

#[tokio::test]
async fn test_failed_post_does_not_store_a_result() {
    let addr = spawn_server().await;

    let (status, _) = post_math(addr, json!({ "operation": "mode", "values": [] })).await;
    assert_eq!(status, 500);

    let (status, _) = get_math(addr, "mode").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_repeated_post_overwrites_stored_result() {
    let addr = spawn_server().await;

    post_math(addr, json!({ "operation": "mean", "values": [1.0, 2.0] })).await;
    post_math(addr, json!({ "operation": "mean", "values": [10.0, 20.0] })).await;

    let (status, body) = get_math(addr, "mean").await;
    assert_eq!(status, 200);
    assert_eq!(body["result"], 15.0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{}/health", addr)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
