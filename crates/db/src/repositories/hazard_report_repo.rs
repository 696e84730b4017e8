//! Repository for the `hazard_reports` table.

use sidewalk_core::geo::GeoPoint;
use sidewalk_core::types::DbId;
use sqlx::PgPool;

use crate::models::hazard_report::{CreateHazardReport, HazardReport};

/// Column list for `hazard_reports` queries. The id is cast to text so the
/// model stays independent of the key type.
const COLUMNS: &str = "id::text AS id, lat, lng, condition, created_at";

/// Provides data access for hazard reports.
pub struct HazardReportRepo;

impl HazardReportRepo {
    /// Insert a new report, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateHazardReport,
    ) -> Result<HazardReport, sqlx::Error> {
        let query = format!(
            "INSERT INTO hazard_reports (lat, lng, condition) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HazardReport>(&query)
            .bind(dto.location.lat)
            .bind(dto.location.lng)
            .bind(&dto.condition)
            .fetch_one(pool)
            .await
    }

    /// Find a report by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HazardReport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hazard_reports WHERE id = $1");
        sqlx::query_as::<_, HazardReport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every report in insertion order. No pagination.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<HazardReport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hazard_reports ORDER BY id");
        sqlx::query_as::<_, HazardReport>(&query)
            .fetch_all(pool)
            .await
    }

    /// Locations of every stored report, for route annotation.
    pub async fn list_locations(pool: &PgPool) -> Result<Vec<GeoPoint>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (f64, f64)>("SELECT lat, lng FROM hazard_reports ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(lat, lng)| GeoPoint::new(lat, lng))
            .collect())
    }
}
