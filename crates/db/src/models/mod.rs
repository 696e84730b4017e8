//! Row models and DTOs.

pub mod hazard_report;
