//! Validation for hazard report submissions.
//!
//! The caller is responsible for persisting the report; these functions
//! only check the user-supplied text fields.

use crate::error::CoreError;

/// Maximum length (in characters) of a condition description.
pub const MAX_CONDITION_LEN: usize = 500;

/// Maximum length (in characters) of a free-text address.
pub const MAX_ADDRESS_LEN: usize = 300;

/// Validate a condition description: non-blank and within length.
pub fn validate_condition(condition: &str) -> Result<(), CoreError> {
    validate_text("condition", condition, MAX_CONDITION_LEN)
}

/// Validate an address before it is sent to the geocoder.
pub fn validate_address(address: &str) -> Result<(), CoreError> {
    validate_text("address", address, MAX_ADDRESS_LEN)
}

fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters (got {len})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_condition_accepted() {
        assert!(validate_condition("Broken pavement near the bus stop").is_ok());
    }

    #[test]
    fn blank_condition_rejected() {
        let err = validate_condition("   ").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: condition must not be empty");
    }

    #[test]
    fn overlong_condition_rejected() {
        let text = "x".repeat(MAX_CONDITION_LEN + 1);
        let msg = validate_condition(&text).unwrap_err().to_string();
        assert!(msg.contains("at most 500 characters"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_CONDITION_LEN);
        assert!(validate_condition(&text).is_ok());
    }

    #[test]
    fn empty_address_rejected() {
        assert!(validate_address("").is_err());
        assert!(validate_address("1600 Amphitheatre Pkwy, Mountain View").is_ok());
    }
}
