//! Shared helpers for API integration tests.
//!
//! Tests run the real router over [`MemoryHazardStore`] and a [`StubMaps`]
//! provider, so they need neither a database nor network access.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sidewalk_core::geo::GeoPoint;
use sidewalk_db::store::{HazardStore, MemoryHazardStore};
use sidewalk_maps::wire::DirectionsResponse;
use sidewalk_maps::{MapsConfig, MapsError, MapsProvider};
use tower::ServiceExt;

use sidewalk_api::config::ServerConfig;
use sidewalk_api::router::build_app_router;
use sidewalk_api::state::AppState;

pub const CORS_ORIGIN: &str = "http://localhost:5173";

/// Build a test `ServerConfig` with the development defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static(CORS_ORIGIN)],
        request_timeout_secs: 30,
        hazard_tolerance_deg: 0.001,
        maps: MapsConfig::new("test-key"),
    }
}

/// Build the full application router over the given collaborators.
pub fn build_test_app(store: Arc<dyn HazardStore>, maps: Arc<StubMaps>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        maps,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A fresh app with an empty in-memory store and a stub that knows nothing.
pub fn empty_app() -> Router {
    build_test_app(Arc::new(MemoryHazardStore::new()), Arc::new(StubMaps::default()))
}

// ---------------------------------------------------------------------------
// Stub provider
// ---------------------------------------------------------------------------

/// Canned [`MapsProvider`].
///
/// `directions` is returned for every directions request (an error when
/// unset). `addresses` maps address text to coordinates; anything else
/// geocodes to no results. Every directions request is recorded.
#[derive(Default)]
pub struct StubMaps {
    pub directions: Option<Value>,
    pub addresses: HashMap<String, GeoPoint>,
    pub calls: Mutex<Vec<(GeoPoint, GeoPoint)>>,
}

impl StubMaps {
    pub fn with_directions(directions: Value) -> Self {
        Self {
            directions: Some(directions),
            ..Self::default()
        }
    }

    pub fn address(mut self, address: &str, point: GeoPoint) -> Self {
        self.addresses.insert(address.to_string(), point);
        self
    }

    pub fn recorded_calls(&self) -> Vec<(GeoPoint, GeoPoint)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MapsProvider for StubMaps {
    async fn walking_directions(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<DirectionsResponse, MapsError> {
        self.calls.lock().unwrap().push((origin, destination));
        match &self.directions {
            Some(body) => Ok(serde_json::from_value(body.clone())?),
            None => Err(MapsError::Http {
                status: 500,
                body: "stub has no directions".to_string(),
            }),
        }
    }

    async fn geocode(&self, address: &str) -> Result<GeoPoint, MapsError> {
        self.addresses
            .get(address)
            .copied()
            .ok_or_else(|| MapsError::NoResults {
                query: address.to_string(),
            })
    }
}

/// A directions response whose single leg ends its steps at `points`.
pub fn directions_through(points: &[(f64, f64)]) -> Value {
    let steps: Vec<Value> = points
        .iter()
        .map(|(lat, lng)| {
            serde_json::json!({
                "end_location": { "lat": lat, "lng": lng },
                "html_instructions": "Walk",
                "travel_mode": "WALKING"
            })
        })
        .collect();

    serde_json::json!({
        "status": "OK",
        "geocoded_waypoints": [],
        "routes": [{ "summary": "Main St", "legs": [{ "steps": steps }] }]
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
