//! Domain types and pure logic for the sidewalk hazard service.
//!
//! Nothing in this crate performs I/O. Persistence lives in `sidewalk-db`,
//! the directions/geocoding provider in `sidewalk-maps`.

pub mod annotate;
pub mod error;
pub mod geo;
pub mod hazard;
pub mod types;
