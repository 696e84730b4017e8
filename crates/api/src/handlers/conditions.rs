//! Handlers for hazard condition reports.
//!
//! Reports arrive either with coordinates or with a free-text address that
//! is geocoded first. Both paths validate once here and hand a fully
//! populated [`CreateHazardReport`] to the store.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use sidewalk_core::error::CoreError;
use sidewalk_core::geo::GeoPoint;
use sidewalk_core::hazard::{validate_address, validate_condition};
use sidewalk_db::models::hazard_report::CreateHazardReport;

use crate::error::AppResult;
use crate::response::{DataResponse, ReportCreated};
use crate::state::AppState;

const REPORTED_MESSAGE: &str = "Condition reported successfully";

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Body of `POST /report-condition`. A client-sent `id` is ignored.
#[derive(Debug, Deserialize)]
pub struct ReportCondition {
    pub lat: f64,
    pub lng: f64,
    pub condition: String,
}

/// Body of `POST /report-condition-address`. A client-sent `id` is ignored.
#[derive(Debug, Deserialize)]
pub struct ReportConditionAddress {
    pub address: String,
    pub condition: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/report-condition
///
/// Store a hazard reported at explicit coordinates.
pub async fn report_condition(
    State(state): State<AppState>,
    Json(input): Json<ReportCondition>,
) -> AppResult<impl IntoResponse> {
    let location = GeoPoint::validated(input.lat, input.lng)?;
    validate_condition(&input.condition)?;

    store_report(&state, location, &input.condition).await
}

/// POST /api/v1/report-condition-address
///
/// Geocode the address, then store the hazard at the resolved point.
/// An address with no geocoding match is a 400.
pub async fn report_condition_address(
    State(state): State<AppState>,
    Json(input): Json<ReportConditionAddress>,
) -> AppResult<impl IntoResponse> {
    validate_address(&input.address)?;
    validate_condition(&input.condition)?;

    let location = state.maps.geocode(input.address.trim()).await?;

    store_report(&state, location, &input.condition).await
}

/// GET /api/v1/conditions
///
/// List every stored report in insertion order.
pub async fn list_conditions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let reports = state.store.list().await?;
    Ok(Json(DataResponse { data: reports }))
}

/// GET /api/v1/conditions/{id}
pub async fn get_condition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let found = state.store.find(&id).await?;
    let report = found.ok_or(CoreError::NotFound {
        entity: "HazardReport",
        id,
    })?;
    Ok(Json(DataResponse { data: report }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn store_report(
    state: &AppState,
    location: GeoPoint,
    condition: &str,
) -> AppResult<(StatusCode, Json<DataResponse<ReportCreated>>)> {
    let dto = CreateHazardReport {
        location,
        condition: condition.trim().to_string(),
    };
    let report = state.store.insert(&dto).await?;

    tracing::info!(
        id = %report.id,
        lat = report.lat,
        lng = report.lng,
        "Hazard condition reported",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ReportCreated {
                message: REPORTED_MESSAGE,
                id: report.id,
            },
        }),
    ))
}
