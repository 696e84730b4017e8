use async_trait::async_trait;
use sidewalk_core::geo::GeoPoint;

use crate::error::MapsError;
use crate::wire::DirectionsResponse;

/// Walking directions and forward geocoding.
#[async_trait]
pub trait MapsProvider: Send + Sync {
    /// Fetch walking directions between two points.
    ///
    /// A response with no routes is `Ok`; callers decide how to report
    /// absence (see [`DirectionsResponse::into_first_leg_steps`]).
    async fn walking_directions(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<DirectionsResponse, MapsError>;

    /// Resolve a free-text address to the coordinates of its first match.
    async fn geocode(&self, address: &str) -> Result<GeoPoint, MapsError>;
}
