//! Shared response envelope types for API handlers.
//!
//! All `/api/v1` responses use a `{ "data": ... }` envelope.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: reports }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload returned after a hazard report is stored.
#[derive(Debug, Serialize)]
pub struct ReportCreated {
    pub message: &'static str,
    pub id: String,
}
