use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the Sidewalk Condition API";

/// Root response payload.
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the hazard store is reachable.
    pub store_healthy: bool,
}

/// GET / -- welcome message.
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

/// GET /health -- returns service and hazard store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = match state.store.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Hazard store health check failed");
            false
        }
    };

    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
    })
}

/// Mount root-level routes (NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
}
