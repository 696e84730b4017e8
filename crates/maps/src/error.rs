/// Errors from the maps provider layer.
#[derive(Debug, thiserror::Error)]
pub enum MapsError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Maps API error ({status}): {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered 200 but with a non-OK `status` field
    /// (`REQUEST_DENIED`, `OVER_QUERY_LIMIT`, `INVALID_REQUEST`, ...).
    #[error("Maps API returned {status}: {message}")]
    Provider { status: String, message: String },

    /// Geocoding found nothing for the given address.
    #[error("No geocoding results for '{query}'")]
    NoResults { query: String },

    /// The response body did not match the expected shape.
    #[error("Malformed maps API response: {0}")]
    Decode(#[from] serde_json::Error),
}

// Request URLs carry the API key; strip them before the error is displayed
// or logged.
impl From<reqwest::Error> for MapsError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.without_url())
    }
}
