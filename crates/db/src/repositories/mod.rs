//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod hazard_report_repo;

pub use hazard_report_repo::HazardReportRepo;
