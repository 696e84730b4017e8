pub mod conditions;
pub mod directions;
