//! HTTP API tests.
//!
//! Exercise the full axum stack (routing, JSON extraction, error mapping)
//! against the in-memory store, so they run without a database.

#![allow(clippy::expect_used, clippy::unwrap_used)] // Test code uses expect for clear failure messages

use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use ticket_service::server::{build_router, AppState};
use ticket_service::store::InMemoryTicketStore;

fn test_server() -> TestServer {
    let state = AppState::new(Arc::new(InMemoryTicketStore::new()));
    TestServer::new(build_router(state)).expect("Failed to build test server")
}

#[tokio::test]
async fn health_check_returns_ok() {
    let server = test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn readiness_reports_database_up() {
    let server = test_server();

    let response = server.get("/ready").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["database"], true);
}

#[tokio::test]
async fn list_tickets_on_empty_store_returns_empty_array() {
    let server = test_server();

    let response = server.get("/tickets").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["tickets"], json!([]));
}

#[tokio::test]
async fn list_tickets_returns_created_tickets_in_order() {
    let server = test_server();
    for price in [100, 200, 150] {
        let response = server.post("/tickets").json(&json!({ "price": price })).await;
        assert_eq!(response.status_code(), 201);
    }

    let response = server.get("/tickets").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    let tickets = body["tickets"].as_array().expect("tickets array");
    assert_eq!(tickets.len(), 3);
    let prices: Vec<i64> = tickets.iter().map(|t| t["price"].as_i64().unwrap()).collect();
    assert_eq!(prices, vec![100, 200, 150]);
}

#[tokio::test]
async fn create_ticket_returns_full_record() {
    let server = test_server();

    let response = server.post("/tickets").json(&json!({ "price": 100 })).await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "id": 1,
            "price": 100,
            "is_sold": false,
            "sold_to": null,
        })
    );
}

#[tokio::test]
async fn create_ticket_accepts_presold_fields() {
    let server = test_server();

    let response = server
        .post("/tickets")
        .json(&json!({ "price": 200, "is_sold": true, "sold_to": "Buyer1" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["is_sold"], true);
    assert_eq!(body["sold_to"], "Buyer1");
}

#[tokio::test]
async fn buy_ticket_success_then_conflict() {
    let server = test_server();
    let created: Value = server
        .post("/tickets")
        .json(&json!({ "price": 100 }))
        .await
        .json();
    let ticket_id = created["id"].as_i64().unwrap();

    // First buyer wins.
    let response = server
        .post("/tickets/buy")
        .json(&json!({ "ticket_id": ticket_id, "user": "A" }))
        .await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["is_sold"], true);
    assert_eq!(body["sold_to"], "A");

    // Second buyer conflicts.
    let response = server
        .post("/tickets/buy")
        .json(&json!({ "ticket_id": ticket_id, "user": "B" }))
        .await;
    assert_eq!(response.status_code(), 409);
    let body: Value = response.json();
    assert_eq!(body["message"], "Ticket has already been sold");

    // The stored buyer is unchanged.
    let listed: Value = server.get("/tickets").await.json();
    assert_eq!(listed["tickets"][0]["sold_to"], "A");
}

#[tokio::test]
async fn buy_unknown_ticket_returns_not_found() {
    let server = test_server();

    let response = server
        .post("/tickets/buy")
        .json(&json!({ "ticket_id": 999, "user": "A" }))
        .await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["message"], "Ticket was not found");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn buy_presold_ticket_returns_conflict() {
    let server = test_server();
    let created: Value = server
        .post("/tickets")
        .json(&json!({ "price": 100, "is_sold": true, "sold_to": "test user" }))
        .await
        .json();

    let response = server
        .post("/tickets/buy")
        .json(&json!({ "ticket_id": created["id"], "user": "other user" }))
        .await;

    assert_eq!(response.status_code(), 409);
    let body: Value = response.json();
    assert_eq!(body["message"], "Ticket has already been sold");
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn malformed_buy_body_is_rejected() {
    let server = test_server();

    let response = server
        .post("/tickets/buy")
        .json(&json!({ "ticket_id": "not a number" }))
        .await;

    assert_eq!(response.status_code(), 422);
}
