pub mod conditions;
pub mod directions;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /report-condition                 report a hazard at coordinates (POST)
/// /report-condition-address         report a hazard at an address (POST)
/// /conditions                       list all reports
/// /conditions/{id}                  get a single report
///
/// /get-route                        walking directions between coordinates (POST)
/// /get-route-addresses              walking directions between addresses (POST)
/// /annotated-route                  directions with hazard comments per step (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(conditions::router())
        .merge(directions::router())
}
