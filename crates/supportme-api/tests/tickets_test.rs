//! Ticket listing endpoint tests.
//!
//! Verifies the `/tickets/{id}` projection, the empty-listing success
//! case, and the uniform error surface on store failures.

use std::sync::Arc;

use axum::{body::Body, http::{Request, StatusCode}};
use chrono::Utc;
use serde_json::Value;
use supportme_api::{create_router, store::mock::MockSupportStore, SupportStore};
use supportme_core::Ticket;
use tower::ServiceExt;

fn ticket(ticket_number: i64) -> Ticket {
    Ticket {
        ticket_number,
        name: format!("Reporter {ticket_number}"),
        issue_category: "billing".to_string(),
        priority: "high".to_string(),
        status: "open".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.expect("failed to make request");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = serde_json::from_slice(&bytes).expect("response should be valid JSON");

    (status, body)
}

/// A tenant with no tickets gets an empty listing, not an error.
#[tokio::test]
async fn tenant_without_tickets_gets_empty_listing() {
    let store: Arc<dyn SupportStore> = Arc::new(MockSupportStore::new());
    let app = create_router(store);

    let (status, body) = get_json(app, "/tickets/t-empty").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tickets"], serde_json::json!([]));
}

/// Every matching row appears in the listing with the full projected
/// field set.
#[tokio::test]
async fn listing_returns_all_rows_with_projected_fields() {
    let store = MockSupportStore::new();
    for n in 1..=3 {
        store.add_ticket("t1", ticket(n)).await;
    }
    store.add_ticket("other-tenant", ticket(99)).await;

    let store: Arc<dyn SupportStore> = Arc::new(store);
    let app = create_router(store);

    let (status, body) = get_json(app, "/tickets/t1").await;

    assert_eq!(status, StatusCode::OK);

    let tickets = body["tickets"].as_array().expect("tickets should be an array");
    assert_eq!(tickets.len(), 3);

    for entry in tickets {
        for field in
            ["ticket_number", "name", "issue_category", "priority", "status", "created_at", "updated_at"]
        {
            assert!(entry.get(field).is_some(), "listing entry should carry {field}");
        }
    }
}

/// Rows come back in store order; the endpoint imposes no sort.
#[tokio::test]
async fn listing_preserves_store_order() {
    let store = MockSupportStore::new();
    for n in [7, 3, 5] {
        store.add_ticket("t1", ticket(n)).await;
    }

    let store: Arc<dyn SupportStore> = Arc::new(store);
    let app = create_router(store);

    let (_, body) = get_json(app, "/tickets/t1").await;

    let numbers: Vec<i64> = body["tickets"]
        .as_array()
        .expect("tickets should be an array")
        .iter()
        .map(|t| t["ticket_number"].as_i64().expect("ticket_number should be a number"))
        .collect();
    assert_eq!(numbers, vec![7, 3, 5]);
}

/// A store failure answers 500 with the generic body; the underlying
/// message never reaches the caller.
#[tokio::test]
async fn store_failure_yields_generic_error() {
    let store = MockSupportStore::new();
    store.inject_error("connection to db.internal:5432 refused").await;

    let store: Arc<dyn SupportStore> = Arc::new(store);
    let app = create_router(store);

    let (status, body) = get_json(app, "/tickets/t1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Internal Server Error" }));
}
