//! Handlers for walking directions.
//!
//! `get-route` and `get-route-addresses` relay the provider's directions
//! response as-is. `annotated-route` takes leg 0 of route 0, checks each
//! step's end point against every stored hazard, and returns the steps with
//! a comment attached.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use sidewalk_core::annotate::{validate_tolerance, AnnotatedRoute};
use sidewalk_core::error::CoreError;
use sidewalk_core::geo::GeoPoint;
use sidewalk_core::hazard::validate_address;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Route endpoints given as coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct PathRequest {
    pub start_lat: f64,
    pub start_lon: f64,
    pub goal_lat: f64,
    pub goal_lon: f64,
}

impl PathRequest {
    fn endpoints(&self) -> Result<(GeoPoint, GeoPoint), CoreError> {
        Ok((
            GeoPoint::validated(self.start_lat, self.start_lon)?,
            GeoPoint::validated(self.goal_lat, self.goal_lon)?,
        ))
    }
}

/// Route endpoints given as free-text addresses.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteAddresses {
    pub start_address: String,
    pub end_address: String,
}

/// Either form of route endpoints, distinguished by field names.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RouteEndpoints {
    Coordinates(PathRequest),
    Addresses(RouteAddresses),
}

/// Body of `POST /annotated-route`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotatedRouteRequest {
    #[serde(flatten)]
    pub endpoints: RouteEndpoints,
    /// Overrides the configured hazard tolerance (degrees) for this request.
    #[serde(default)]
    pub tolerance: Option<f64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/get-route
///
/// Walking directions between two coordinates, relayed from the provider.
pub async fn get_route(
    State(state): State<AppState>,
    Json(input): Json<PathRequest>,
) -> AppResult<impl IntoResponse> {
    let (origin, destination) = input.endpoints()?;
    let directions = state.maps.walking_directions(origin, destination).await?;
    Ok(Json(DataResponse { data: directions }))
}

/// POST /api/v1/get-route-addresses
///
/// Geocode both addresses, then relay walking directions between them.
/// If either address has no match the request fails with 400.
pub async fn get_route_addresses(
    State(state): State<AppState>,
    Json(input): Json<RouteAddresses>,
) -> AppResult<impl IntoResponse> {
    let (origin, destination) = geocode_pair(&state, &input).await?;
    let directions = state.maps.walking_directions(origin, destination).await?;
    Ok(Json(DataResponse { data: directions }))
}

/// POST /api/v1/annotated-route
///
/// Returns `{ "data": null }` when the provider found no route, otherwise
/// the annotated steps of the first leg of the first route.
pub async fn annotated_route(
    State(state): State<AppState>,
    Json(input): Json<AnnotatedRouteRequest>,
) -> AppResult<impl IntoResponse> {
    let tolerance = match input.tolerance {
        Some(tolerance) => {
            validate_tolerance(tolerance)?;
            tolerance
        }
        None => state.config.hazard_tolerance_deg,
    };

    let (origin, destination) = match &input.endpoints {
        RouteEndpoints::Coordinates(path) => path.endpoints()?,
        RouteEndpoints::Addresses(addresses) => geocode_pair(&state, addresses).await?,
    };

    let directions = state.maps.walking_directions(origin, destination).await?;
    let Some(steps) = directions.into_first_leg_steps() else {
        tracing::info!(%origin, %destination, "No walking route found");
        return Ok(Json(DataResponse::<Option<AnnotatedRoute>> { data: None }));
    };

    let hazards = state.store.hazard_points().await?;
    let route = AnnotatedRoute::new(steps, &hazards, tolerance);

    tracing::info!(
        %origin,
        %destination,
        steps = route.steps.len(),
        hazards = hazards.len(),
        caution_count = route.caution_count,
        "Route annotated",
    );

    Ok(Json(DataResponse { data: Some(route) }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Geocode start and end addresses concurrently.
async fn geocode_pair(state: &AppState, input: &RouteAddresses) -> AppResult<(GeoPoint, GeoPoint)> {
    validate_address(&input.start_address)?;
    validate_address(&input.end_address)?;

    let (origin, destination) = tokio::try_join!(
        state.maps.geocode(input.start_address.trim()),
        state.maps.geocode(input.end_address.trim()),
    )?;
    Ok((origin, destination))
}
