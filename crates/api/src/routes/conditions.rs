//! Route definitions for hazard condition reports.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::conditions;
use crate::state::AppState;

/// Condition routes, merged into `/api/v1`.
///
/// ```text
/// POST /report-condition          -> report_condition
/// POST /report-condition-address  -> report_condition_address
/// GET  /conditions                -> list_conditions
/// GET  /conditions/{id}           -> get_condition
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/report-condition", post(conditions::report_condition))
        .route(
            "/report-condition-address",
            post(conditions::report_condition_address),
        )
        .route("/conditions", get(conditions::list_conditions))
        .route("/conditions/{id}", get(conditions::get_condition))
}
