//! HTTP client for the Google Maps Directions and Geocoding APIs.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use sidewalk_core::geo::GeoPoint;

use crate::error::MapsError;
use crate::provider::MapsProvider;
use crate::wire::{DirectionsResponse, GeocodeResponse, STATUS_OK, STATUS_ZERO_RESULTS};

/// Public Google Maps Web Services endpoint.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Default HTTP timeout for a single provider request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Connection settings for [`GoogleMapsClient`].
#[derive(Clone)]
pub struct MapsConfig {
    pub api_key: String,
    /// Scheme and host, without a trailing slash.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl MapsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for MapsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapsConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// HTTP client for the directions and geocoding endpoints.
pub struct GoogleMapsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleMapsClient {
    /// Build a client with its own connection pool and request timeout.
    pub fn new(config: &MapsConfig) -> Result<Self, MapsError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(
            client,
            config.base_url.clone(),
            config.api_key.clone(),
        ))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    // ---- private helpers ----

    /// GET `path` with the API key appended and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, MapsError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Return the response unchanged on a 2xx status, otherwise a
    /// [`MapsError::Http`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, MapsError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MapsError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    fn provider_error(status: String, message: Option<String>) -> MapsError {
        MapsError::Provider {
            status,
            message: message.unwrap_or_else(|| "No error message available.".to_string()),
        }
    }
}

/// Whether the provider processed the request, with or without matches.
fn is_answered(status: &str) -> bool {
    status == STATUS_OK || status == STATUS_ZERO_RESULTS
}

#[async_trait]
impl MapsProvider for GoogleMapsClient {
    async fn walking_directions(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<DirectionsResponse, MapsError> {
        let origin = origin.to_string();
        let destination = destination.to_string();

        let body: DirectionsResponse = self
            .get_json(
                "/maps/api/directions/json",
                &[
                    ("origin", origin.as_str()),
                    ("destination", destination.as_str()),
                    ("mode", "walking"),
                ],
            )
            .await?;

        if !is_answered(&body.status) {
            return Err(Self::provider_error(body.status, body.error_message));
        }

        tracing::debug!(
            %origin,
            %destination,
            routes = body.routes.len(),
            "Fetched walking directions"
        );
        Ok(body)
    }

    async fn geocode(&self, address: &str) -> Result<GeoPoint, MapsError> {
        let body: GeocodeResponse = self
            .get_json("/maps/api/geocode/json", &[("address", address)])
            .await?;

        if !is_answered(&body.status) {
            return Err(Self::provider_error(body.status, body.error_message));
        }

        let location = body
            .results
            .into_iter()
            .next()
            .map(|result| result.geometry.location)
            .ok_or_else(|| MapsError::NoResults {
                query: address.to_string(),
            })?;

        tracing::debug!(address, %location, "Geocoded address");
        Ok(location)
    }
}
