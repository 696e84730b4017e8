use std::str::FromStr;

use axum::http::HeaderValue;
use sidewalk_core::annotate::{validate_tolerance, DEFAULT_TOLERANCE_DEG};
use sidewalk_maps::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use sidewalk_maps::MapsConfig;

/// Errors raised while loading [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} must be {expected} (got '{value}')")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the maps API key has a default suitable for local
/// development. `DATABASE_URL` is read separately at startup so the
/// connection string never ends up in logged configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Default half-width of the hazard box used to annotate routes.
    pub hazard_tolerance_deg: f64,
    /// Directions/geocoding provider settings.
    pub maps: MapsConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                       |
    /// |------------------------|-------------------------------|
    /// | `HOST`                 | `0.0.0.0`                     |
    /// | `PORT`                 | `3000`                        |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                          |
    /// | `HAZARD_TOLERANCE_DEG` | `0.001`                       |
    /// | `GOOGLE_MAPS_API_KEY`  | **required**                  |
    /// | `GOOGLE_MAPS_BASE_URL` | `https://maps.googleapis.com` |
    /// | `MAPS_TIMEOUT_SECS`    | `15`                          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000_u16, "a valid port number")?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    expected: "a comma-separated list of origins",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30_u64, "a whole number of seconds")?;

        let hazard_tolerance_deg = parse_or(
            &lookup,
            "HAZARD_TOLERANCE_DEG",
            DEFAULT_TOLERANCE_DEG,
            "a finite number of degrees",
        )?;
        validate_tolerance(hazard_tolerance_deg).map_err(|_| ConfigError::Invalid {
            var: "HAZARD_TOLERANCE_DEG",
            expected: "a finite number of degrees",
            value: hazard_tolerance_deg.to_string(),
        })?;

        let api_key = lookup("GOOGLE_MAPS_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("GOOGLE_MAPS_API_KEY"))?;

        let maps = MapsConfig {
            api_key,
            base_url: lookup("GOOGLE_MAPS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            timeout_secs: parse_or(&lookup, "MAPS_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS, "a whole number of seconds")?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            hazard_tolerance_deg,
            maps,
        })
    }
}

/// Parse `var` if set, otherwise fall back to `default`.
fn parse_or<F, T>(
    lookup: &F,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value: raw,
        }),
    }
}
