use axum::routing::post;
use axum::Router;

use crate::handlers::directions;
use crate::state::AppState;

/// Directions routes, merged into `/api/v1`.
///
/// ```text
/// POST /get-route            -> get_route
/// POST /get-route-addresses  -> get_route_addresses
/// POST /annotated-route      -> annotated_route
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get-route", post(directions::get_route))
        .route("/get-route-addresses", post(directions::get_route_addresses))
        .route("/annotated-route", post(directions::annotated_route))
}
