//! Integration tests for the root endpoints and general HTTP behaviour.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, empty_app, get, StubMaps};
use sidewalk_core::geo::GeoPoint;
use sidewalk_db::models::hazard_report::{CreateHazardReport, HazardReport};
use sidewalk_db::store::HazardStore;
use tower::ServiceExt;

/// A store whose backing storage is never reachable.
struct UnreachableStore;

#[async_trait]
impl HazardStore for UnreachableStore {
    async fn insert(&self, _report: &CreateHazardReport) -> Result<HazardReport, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find(&self, _id: &str) -> Result<Option<HazardReport>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn list(&self) -> Result<Vec<HazardReport>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn hazard_points(&self) -> Result<Vec<GeoPoint>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

// ---------------------------------------------------------------------------
// Test: GET / returns the welcome message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_welcome_message() {
    let response = get(empty_app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Welcome to the Sidewalk Condition API");
}

// ---------------------------------------------------------------------------
// Test: GET /health reports store health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let response = get(empty_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["store_healthy"], true);
}

#[tokio::test]
async fn health_check_is_degraded_when_store_unreachable() {
    let app = common::build_test_app(Arc::new(UnreachableStore), Arc::new(StubMaps::default()));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_healthy"], false);
}

// ---------------------------------------------------------------------------
// Test: store failures surface as a sanitized 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failure_returns_internal_error() {
    let app = common::build_test_app(Arc::new(UnreachableStore), Arc::new(StubMaps::default()));
    let response = get(app, "/api/v1/conditions").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(empty_app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(empty_app(), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // UUID string: 36 chars with hyphens.
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/annotated-route")
        .header("Origin", common::CORS_ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = empty_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, common::CORS_ORIGIN);

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}
