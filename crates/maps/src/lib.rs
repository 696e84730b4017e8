//! Client for the walking directions and geocoding provider.
//!
//! Speaks the Google Maps Web Services JSON API. Handlers depend on the
//! [`MapsProvider`] trait rather than the concrete client so tests can
//! substitute a stub.

pub mod client;
pub mod error;
pub mod provider;
pub mod wire;

pub use client::{GoogleMapsClient, MapsConfig};
pub use error::MapsError;
pub use provider::MapsProvider;
