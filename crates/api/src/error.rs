use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sidewalk_core::error::CoreError;
use sidewalk_maps::MapsError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`MapsError`] for the directions
/// provider, and database failures. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sidewalk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure talking to the directions/geocoding provider.
    #[error(transparent)]
    Maps(#[from] MapsError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }

            // --- Provider errors ---
            AppError::Maps(err) => classify_maps_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a provider error into an HTTP status, error code, and message.
///
/// - An address that geocodes to nothing is the client's problem (400).
/// - Everything else is an upstream failure (502) with a sanitized message;
///   the details are logged.
fn classify_maps_error(err: &MapsError) -> (StatusCode, &'static str, String) {
    match err {
        MapsError::NoResults { query } => (
            StatusCode::BAD_REQUEST,
            "INVALID_ADDRESS",
            format!("Could not find address: {query}"),
        ),
        other => {
            tracing::error!(error = %other, "Maps provider error");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "The directions provider could not complete the request".to_string(),
            )
        }
    }
}
