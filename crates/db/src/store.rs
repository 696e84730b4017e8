//! The hazard report store the HTTP layer is written against.
//!
//! [`PgHazardStore`] is the production implementation backed by
//! [`HazardReportRepo`]. [`MemoryHazardStore`] keeps reports in process
//! memory and is used by tests and local runs without a database.

use async_trait::async_trait;
use sidewalk_core::geo::GeoPoint;
use sidewalk_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::hazard_report::{CreateHazardReport, HazardReport};
use crate::repositories::HazardReportRepo;
use crate::DbPool;

/// Insert-and-query access to hazard reports.
///
/// Reports are never updated or deleted through this interface.
#[async_trait]
pub trait HazardStore: Send + Sync {
    /// Persist a report and return it with its assigned id.
    async fn insert(&self, report: &CreateHazardReport) -> Result<HazardReport, sqlx::Error>;

    /// Look up a report by its opaque id.
    async fn find(&self, id: &str) -> Result<Option<HazardReport>, sqlx::Error>;

    /// All reports in insertion order.
    async fn list(&self) -> Result<Vec<HazardReport>, sqlx::Error>;

    /// Snapshot of every report location, for route annotation.
    async fn hazard_points(&self) -> Result<Vec<GeoPoint>, sqlx::Error>;

    /// Check that the backing storage is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// [`HazardStore`] backed by the `hazard_reports` table.
#[derive(Clone)]
pub struct PgHazardStore {
    pool: DbPool,
}

impl PgHazardStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HazardStore for PgHazardStore {
    async fn insert(&self, report: &CreateHazardReport) -> Result<HazardReport, sqlx::Error> {
        HazardReportRepo::create(&self.pool, report).await
    }

    async fn find(&self, id: &str) -> Result<Option<HazardReport>, sqlx::Error> {
        // Ids are opaque to clients; anything that is not one of ours simply
        // does not exist.
        let Ok(id) = id.parse::<DbId>() else {
            return Ok(None);
        };
        HazardReportRepo::find_by_id(&self.pool, id).await
    }

    async fn list(&self) -> Result<Vec<HazardReport>, sqlx::Error> {
        HazardReportRepo::list_all(&self.pool).await
    }

    async fn hazard_points(&self) -> Result<Vec<GeoPoint>, sqlx::Error> {
        HazardReportRepo::list_locations(&self.pool).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// [`HazardStore`] holding reports in a `Vec`. Ids are sequential from 1.
#[derive(Default)]
pub struct MemoryHazardStore {
    reports: RwLock<Vec<HazardReport>>,
}

impl MemoryHazardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HazardStore for MemoryHazardStore {
    async fn insert(&self, report: &CreateHazardReport) -> Result<HazardReport, sqlx::Error> {
        let mut reports = self.reports.write().await;
        let stored = HazardReport {
            id: (reports.len() + 1).to_string(),
            lat: report.location.lat,
            lng: report.location.lng,
            condition: report.condition.clone(),
            created_at: chrono::Utc::now(),
        };
        reports.push(stored.clone());
        tracing::debug!(id = %stored.id, "Stored hazard report in memory");
        Ok(stored)
    }

    async fn find(&self, id: &str) -> Result<Option<HazardReport>, sqlx::Error> {
        let reports = self.reports.read().await;
        Ok(reports.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<HazardReport>, sqlx::Error> {
        Ok(self.reports.read().await.clone())
    }

    async fn hazard_points(&self) -> Result<Vec<GeoPoint>, sqlx::Error> {
        let reports = self.reports.read().await;
        Ok(reports.iter().map(HazardReport::location).collect())
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn report(lat: f64, lng: f64, condition: &str) -> CreateHazardReport {
        CreateHazardReport {
            location: GeoPoint::new(lat, lng),
            condition: condition.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = MemoryHazardStore::new();

        let first = store.insert(&report(1.0, 2.0, "pothole")).await.unwrap();
        let second = store.insert(&report(3.0, 4.0, "ice")).await.unwrap();

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(second.condition, "ice");
    }

    #[tokio::test]
    async fn list_returns_reports_in_insertion_order() {
        let store = MemoryHazardStore::new();
        store.insert(&report(1.0, 1.0, "a")).await.unwrap();
        store.insert(&report(2.0, 2.0, "b")).await.unwrap();

        let all = store.list().await.unwrap();

        let conditions: Vec<_> = all.iter().map(|r| r.condition.as_str()).collect();
        assert_eq!(conditions, ["a", "b"]);
    }

    #[tokio::test]
    async fn hazard_points_mirror_report_locations() {
        let store = MemoryHazardStore::new();
        store.insert(&report(37.7750, -122.4195, "crack")).await.unwrap();

        let points = store.hazard_points().await.unwrap();

        assert_eq!(points, vec![GeoPoint::new(37.7750, -122.4195)]);
    }

    #[tokio::test]
    async fn find_unknown_id_returns_none() {
        let store = MemoryHazardStore::new();
        store.insert(&report(0.0, 0.0, "x")).await.unwrap();

        assert_matches!(store.find("1").await, Ok(Some(r)) if r.condition == "x");
        assert_matches!(store.find("99").await, Ok(None));
        assert_matches!(store.find("not-an-id").await, Ok(None));
    }

    #[tokio::test]
    async fn empty_store_is_healthy_and_empty() {
        let store = MemoryHazardStore::new();

        assert!(store.health_check().await.is_ok());
        assert!(store.list().await.unwrap().is_empty());
        assert!(store.hazard_points().await.unwrap().is_empty());
    }
}
