use std::sync::Arc;

use sidewalk_db::store::HazardStore;
use sidewalk_maps::MapsProvider;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: every field is behind an `Arc`. Collaborators are held as
/// trait objects so tests can inject in-memory and stub implementations.
#[derive(Clone)]
pub struct AppState {
    /// Hazard report persistence.
    pub store: Arc<dyn HazardStore>,
    /// Directions and geocoding provider.
    pub maps: Arc<dyn MapsProvider>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
