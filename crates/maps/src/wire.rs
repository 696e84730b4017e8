//! Provider response shapes.
//!
//! Only the fields the service interprets are typed. Directions responses
//! keep every other field in a flattened `extra` map so they can be relayed
//! to clients without loss.

use serde::{Deserialize, Serialize};
use sidewalk_core::annotate::RouteStep;
use sidewalk_core::geo::GeoPoint;

type Extra = serde_json::Map<String, serde_json::Value>;

/// Provider status for a successful request.
pub const STATUS_OK: &str = "OK";

/// Provider status for a well-formed request that matched nothing.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// Top-level directions response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One candidate route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One leg of a route (origin to destination when there are no waypoints).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub steps: Vec<RouteStep>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl DirectionsResponse {
    /// Steps of leg 0 of route 0.
    ///
    /// Returns `None` when the provider found no route: no routes, a route
    /// without legs, or a leg without steps. Later routes and legs are
    /// discarded.
    pub fn into_first_leg_steps(self) -> Option<Vec<RouteStep>> {
        let route = self.routes.into_iter().next()?;
        let leg = route.legs.into_iter().next()?;
        Some(leg.steps).filter(|steps| !steps.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Geocoding
// ---------------------------------------------------------------------------

/// Top-level geocoding response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: GeoPoint,
}
