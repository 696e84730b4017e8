//! Latitude/longitude points and their boundary validation.
//!
//! Coordinates are plain degrees. No normalization or antimeridian
//! wraparound is performed anywhere in the service.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// A latitude/longitude pair in degrees.
///
/// Field names match the directions provider's `{ "lat", "lng" }` shape so
/// route steps deserialize straight into this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90"))]
    pub lat: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "lng must be between -180 and 180"
    ))]
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build a point from untrusted input, rejecting out-of-range or
    /// non-finite coordinates.
    pub fn validated(lat: f64, lng: f64) -> Result<Self, CoreError> {
        let point = Self::new(lat, lng);
        validate_point(&point)?;
        Ok(point)
    }
}

/// Formats as `lat,lng`, the form the directions provider expects for
/// `origin` and `destination`.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Validate a point's coordinate ranges.
pub fn validate_point(point: &GeoPoint) -> Result<(), CoreError> {
    // NaN compares false against both bounds and would slip through `range`.
    if !point.lat.is_finite() || !point.lng.is_finite() {
        return Err(CoreError::Validation(
            "Coordinates must be finite numbers".to_string(),
        ));
    }
    point
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))
}

/// Flatten `validator` field errors into one message, ordered by field name.
fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_point_accepted() {
        assert!(GeoPoint::validated(37.7749, -122.4194).is_ok());
        assert!(GeoPoint::validated(90.0, 180.0).is_ok());
        assert!(GeoPoint::validated(-90.0, -180.0).is_ok());
    }

    #[test]
    fn latitude_out_of_range_rejected() {
        let err = GeoPoint::validated(90.5, 0.0).unwrap_err();
        assert!(err.to_string().contains("lat must be between -90 and 90"));
    }

    #[test]
    fn longitude_out_of_range_rejected() {
        let err = GeoPoint::validated(0.0, -180.01).unwrap_err();
        assert!(err.to_string().contains("lng must be between -180 and 180"));
    }

    #[test]
    fn both_axes_reported_in_field_order() {
        let msg = GeoPoint::validated(-91.0, 181.0).unwrap_err().to_string();
        let lat_pos = msg.find("lat must").expect("lat error present");
        let lng_pos = msg.find("lng must").expect("lng error present");
        assert!(lat_pos < lng_pos);
    }

    #[test]
    fn nan_rejected() {
        let err = GeoPoint::validated(f64::NAN, 0.0).unwrap_err();
        assert!(err.to_string().contains("finite"));
        assert!(GeoPoint::validated(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn display_is_comma_separated() {
        assert_eq!(GeoPoint::new(37.5, -122.25).to_string(), "37.5,-122.25");
    }

    #[test]
    fn deserializes_provider_shape() {
        let point: GeoPoint =
            serde_json::from_str(r#"{"lat": 40.7128, "lng": -74.006}"#).unwrap();
        assert_eq!(point, GeoPoint::new(40.7128, -74.006));
    }
}
