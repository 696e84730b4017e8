//! Hazard report model and DTOs.

use serde::Serialize;
use sidewalk_core::geo::GeoPoint;
use sidewalk_core::types::Timestamp;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `hazard_reports` table.
///
/// `id` is exposed as an opaque string; callers must not rely on it being
/// numeric.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct HazardReport {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub condition: String,
    pub created_at: Timestamp,
}

impl HazardReport {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// A validated report ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateHazardReport {
    pub location: GeoPoint,
    pub condition: String,
}
