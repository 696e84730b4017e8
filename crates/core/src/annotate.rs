//! Hazard-aware route annotation.
//!
//! Pure logic, no I/O. The caller fetches the route from the directions
//! provider and the hazard snapshot from the store, picks leg 0 of route 0,
//! and passes the steps in. An absent route is the caller's to report; this
//! module never sees one.
//!
//! A step is *blocked* when its end point falls inside the axis-aligned box
//! of half-width `tolerance` degrees around any reported hazard. The box is
//! measured in raw degrees, so it is narrower on the ground in longitude
//! than in latitude away from the equator.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;
use crate::geo::GeoPoint;

/// Default half-width of the hazard box (~111 m of latitude).
pub const DEFAULT_TOLERANCE_DEG: f64 = 0.001;

/// Comment attached to a step whose end point is near a reported hazard.
pub const CAUTION_COMMENT: &str = "Caution: a sidewalk hazard has been reported near this step.";

/// Comment attached to every other step.
pub const NO_ISSUES_COMMENT: &str = "No known issues reported along this step.";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The comment assigned to a step. Serializes as one of the two fixed
/// strings above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepComment {
    Caution,
    NoKnownIssues,
}

impl StepComment {
    /// Choose the comment for a step ending at `point`.
    pub fn for_point(point: GeoPoint, hazards: &[GeoPoint], tolerance: f64) -> Self {
        if is_blocked(point, hazards, tolerance) {
            Self::Caution
        } else {
            Self::NoKnownIssues
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Caution => CAUTION_COMMENT,
            Self::NoKnownIssues => NO_ISSUES_COMMENT,
        }
    }

    pub fn is_caution(self) -> bool {
        self == Self::Caution
    }
}

impl Serialize for StepComment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StepComment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            CAUTION_COMMENT => Ok(Self::Caution),
            NO_ISSUES_COMMENT => Ok(Self::NoKnownIssues),
            other => Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(other),
                &"a step comment",
            )),
        }
    }
}

/// One step of a provider route leg.
///
/// Only `end_location` is interpreted. Every other provider field
/// (instructions, distance, polyline, ...) is kept verbatim in `extra` so
/// the step round-trips back to the client unchanged apart from `comment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub end_location: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<StepComment>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RouteStep {
    /// A step with no provider fields besides its end point.
    pub fn ending_at(end_location: GeoPoint) -> Self {
        Self {
            end_location,
            comment: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// An annotated leg as returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedRoute {
    pub steps: Vec<RouteStep>,
    /// Number of steps carrying [`StepComment::Caution`].
    pub caution_count: usize,
    /// Tolerance (degrees) the steps were checked with.
    pub tolerance: f64,
}

impl AnnotatedRoute {
    pub fn new(steps: Vec<RouteStep>, hazards: &[GeoPoint], tolerance: f64) -> Self {
        let steps = annotate(steps, hazards, tolerance);
        let caution_count = steps
            .iter()
            .filter(|s| s.comment.is_some_and(StepComment::is_caution))
            .count();
        Self {
            steps,
            caution_count,
            tolerance,
        }
    }
}

// ---------------------------------------------------------------------------
// Annotation
// ---------------------------------------------------------------------------

/// Whether `point` lies strictly inside the tolerance box of any hazard.
///
/// A difference of exactly `tolerance` on either axis is not blocked. A
/// tolerance of zero, a negative one, or NaN blocks nothing.
pub fn is_blocked(point: GeoPoint, hazards: &[GeoPoint], tolerance: f64) -> bool {
    hazards.iter().any(|hazard| {
        (point.lat - hazard.lat).abs() < tolerance && (point.lng - hazard.lng).abs() < tolerance
    })
}

/// Assign a comment to every step based on its end point.
///
/// Output has the same length and order as `steps`. Any comment already
/// present on a step is overwritten.
pub fn annotate(mut steps: Vec<RouteStep>, hazards: &[GeoPoint], tolerance: f64) -> Vec<RouteStep> {
    for step in &mut steps {
        step.comment = Some(StepComment::for_point(step.end_location, hazards, tolerance));
    }
    steps
}

/// Validate a caller-supplied tolerance override.
///
/// Zero and negative values are accepted (they simply never block); only
/// non-finite values are rejected.
pub fn validate_tolerance(tolerance: f64) -> Result<(), CoreError> {
    if !tolerance.is_finite() {
        return Err(CoreError::Validation(
            "tolerance must be a finite number of degrees".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
