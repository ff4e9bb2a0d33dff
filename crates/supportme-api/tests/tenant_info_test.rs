//! Tenant metadata endpoint tests.
//!
//! Covers both projections of the shared resolution path
//! (`/customer-info/{id}` and `/tenant-info/{tenant_id}`), the badge and
//! masking derivation as seen through the HTTP surface, and the
//! single-row fetch contract.

use std::sync::Arc;

use axum::{body::Body, http::{Request, StatusCode}};
use serde_json::Value;
use supportme_api::{create_router, store::mock::MockSupportStore, SupportStore};
use supportme_core::Tenant;
use tower::ServiceExt;

fn tenant(plan: &str, wix_site_id: Option<&str>) -> Tenant {
    Tenant {
        customer_number: 1042,
        plan: plan.to_string(),
        wix_site_id: wix_site_id.map(str::to_string),
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

/// The tenant-info projection returns the composed record: original
/// fields plus mask and badge.
#[tokio::test]
async fn tenant_info_returns_composed_record() {
    let store = MockSupportStore::new();
    store.add_tenant("t1", tenant("pro", Some("wixsite-0000000012345"))).await;

    let store: Arc<dyn SupportStore> = Arc::new(store);
    let app = create_router(store);

    let (status, body) = get_json(app, "/tenant-info/t1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenant_number"], 1042);
    assert_eq!(body["wix_site_id"], "wixsite-0000000012345");
    assert_eq!(body["masked_id"], "000000012345");
    assert_eq!(body["plan"], "pro");
    assert_eq!(body["badge_url"], "https://static.supportme.app/badges/pro.png");
}

/// The customer-info projection carries only number, plan, and badge.
#[tokio::test]
async fn customer_info_returns_reduced_projection() {
    let store = MockSupportStore::new();
    store.add_tenant("c9", tenant("ultimate", Some("wixsite-0000000012345"))).await;

    let store: Arc<dyn SupportStore> = Arc::new(store);
    let app = create_router(store);

    let (status, body) = get_json(app, "/customer-info/c9").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customer_number"], 1042);
    assert_eq!(body["plan"], "ultimate");
    assert_eq!(body["badge_url"], "https://static.supportme.app/badges/ultimate.png");
    assert!(body.get("wix_site_id").is_none());
    assert!(body.get("masked_id").is_none());
}

/// A plan outside the known enumeration flows through unchanged with a
/// null badge.
#[tokio::test]
async fn unknown_plan_yields_null_badge() {
    let store = MockSupportStore::new();
    store.add_tenant("t1", tenant("legacy-free", Some("wixsite-42"))).await;

    let store: Arc<dyn SupportStore> = Arc::new(store);
    let app = create_router(store);

    let (status, body) = get_json(app, "/tenant-info/t1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"], "legacy-free");
    assert_eq!(body["badge_url"], Value::Null);
}

/// An absent site identifier produces a null mask, not an error.
#[tokio::test]
async fn absent_site_id_yields_null_mask() {
    let store = MockSupportStore::new();
    store.add_tenant("t1", tenant("starter", None)).await;

    let store: Arc<dyn SupportStore> = Arc::new(store);
    let app = create_router(store);

    let (status, body) = get_json(app, "/tenant-info/t1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wix_site_id"], Value::Null);
    assert_eq!(body["masked_id"], Value::Null);
    assert_eq!(body["badge_url"], "https://static.supportme.app/badges/starter.png");
}

/// An empty site identifier is treated as absent.
#[tokio::test]
async fn empty_site_id_yields_null_mask() {
    let store = MockSupportStore::new();
    store.add_tenant("t1", tenant("starter", Some(""))).await;

    let store: Arc<dyn SupportStore> = Arc::new(store);
    let app = create_router(store);

    let (_, body) = get_json(app, "/tenant-info/t1").await;

    assert_eq!(body["masked_id"], Value::Null);
}

/// A site identifier shorter than the mask length comes back whole.
#[tokio::test]
async fn short_site_id_is_returned_whole() {
    let store = MockSupportStore::new();
    store.add_tenant("t1", tenant("premier", Some("short"))).await;

    let store: Arc<dyn SupportStore> = Arc::new(store);
    let app = create_router(store);

    let (_, body) = get_json(app, "/tenant-info/t1").await;

    assert_eq!(body["masked_id"], "short");
}

/// A missing tenant row is a store failure: 500 with the generic body.
#[tokio::test]
async fn missing_tenant_yields_generic_error() {
    let store: Arc<dyn SupportStore> = Arc::new(MockSupportStore::new());
    let app = create_router(store);

    let (status, body) = get_json(app, "/tenant-info/no-such-tenant").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Internal Server Error" }));
}

/// Multiple rows for one identifier violate the single-row contract and
/// never produce a silently-wrong record.
#[tokio::test]
async fn duplicate_tenant_rows_yield_generic_error() {
    let store = MockSupportStore::new();
    store.add_tenant("t1", tenant("pro", Some("wixsite-0000000012345"))).await;
    store.add_tenant("t1", tenant("starter", None)).await;

    let store: Arc<dyn SupportStore> = Arc::new(store);
    let app = create_router(store);

    let (status, body) = get_json(app, "/tenant-info/t1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Internal Server Error" }));
}

/// The underlying store message never reaches the caller on either info
/// projection.
#[tokio::test]
async fn store_failure_does_not_leak_the_message() {
    let store = MockSupportStore::new();
    store.inject_error("password authentication failed for role supportme").await;

    let store: Arc<dyn SupportStore> = Arc::new(store);
    let app = create_router(store);

    let (status, body) = get_json(app, "/customer-info/c1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Internal Server Error" }));
}
