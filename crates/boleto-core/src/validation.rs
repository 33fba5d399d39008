//! # Validation Module
//!
//! Fixed-width digit-field validation shared by the engine and the bank
//! modules.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate_digits("free_field", value, 25)                               │
//! │       │                                                                 │
//! │       ├── empty?            → MissingRequiredField                     │
//! │       │                                                                 │
//! │       ├── len != 25?        → InvalidFieldLength                       │
//! │       │                                                                 │
//! │       ├── non-digit char?   → InvalidCharacter (0-based position)      │
//! │       │                                                                 │
//! │       └── OK                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boleto_core::validation::{validate_digits, zero_fill};
//!
//! validate_digits("bank_code", "090", 3).unwrap();
//! assert_eq!(zero_fill("agency", "123", 4).unwrap(), "0123");
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates that `value` is exactly `width` ASCII digits.
///
/// ## Example
/// ```rust
/// use boleto_core::validation::validate_digits;
///
/// assert!(validate_digits("bank_code", "001", 3).is_ok());
/// assert!(validate_digits("bank_code", "", 3).is_err());
/// assert!(validate_digits("bank_code", "01", 3).is_err());
/// assert!(validate_digits("bank_code", "0a1", 3).is_err());
/// ```
pub fn validate_digits(field: &str, value: &str, width: usize) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::MissingRequiredField {
            field: field.to_string(),
        });
    }

    let actual = value.chars().count();
    if actual != width {
        return Err(ValidationError::InvalidFieldLength {
            field: field.to_string(),
            expected: width,
            actual,
        });
    }

    validate_digit_chars(field, value)
}

/// Validates that every character of `value` is an ASCII digit.
///
/// Unlike [`validate_digits`], any length is accepted, including empty.
pub fn validate_digit_chars(field: &str, value: &str) -> ValidationResult<()> {
    match value.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, character)) => Err(ValidationError::InvalidCharacter {
            field: field.to_string(),
            position,
            character,
        }),
        None => Ok(()),
    }
}

/// Left-pads a digit string with zeros up to `width`.
///
/// Bank modules use this to lay agency, account and "our number" values
/// into their free-field slots. A value already wider than `width` is an
/// error, never truncated.
///
/// ## Example
/// ```rust
/// use boleto_core::validation::zero_fill;
///
/// assert_eq!(zero_fill("account", "123456", 10).unwrap(), "0000123456");
/// assert!(zero_fill("account", "12345678901", 10).is_err());
/// ```
pub fn zero_fill(field: &str, value: &str, width: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::MissingRequiredField {
            field: field.to_string(),
        });
    }

    validate_digit_chars(field, value)?;

    if value.len() > width {
        return Err(ValidationError::InvalidFieldLength {
            field: field.to_string(),
            expected: width,
            actual: value.len(),
        });
    }

    Ok(format!("{:0>width$}", value, width = width))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_digits() {
        assert!(validate_digits("bank_code", "090", 3).is_ok());
        assert!(validate_digits("free_field", &"0".repeat(25), 25).is_ok());

        assert_eq!(
            validate_digits("bank_code", "", 3),
            Err(ValidationError::MissingRequiredField {
                field: "bank_code".to_string()
            })
        );
        assert_eq!(
            validate_digits("bank_code", "0901", 3),
            Err(ValidationError::InvalidFieldLength {
                field: "bank_code".to_string(),
                expected: 3,
                actual: 4,
            })
        );
        assert_eq!(
            validate_digits("bank_code", "0-1", 3),
            Err(ValidationError::InvalidCharacter {
                field: "bank_code".to_string(),
                position: 1,
                character: '-',
            })
        );
    }

    #[test]
    fn test_length_checked_before_characters() {
        let err = validate_digits("value_field", "1,00", 10).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFieldLength { .. }));
    }

    #[test]
    fn test_validate_digits_counts_chars_not_bytes() {
        let err = validate_digits("bank_code", "0é", 3).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFieldLength { actual: 2, .. }));
    }

    #[test]
    fn test_zero_fill() {
        assert_eq!(zero_fill("agency", "1", 4).unwrap(), "0001");
        assert_eq!(zero_fill("agency", "1234", 4).unwrap(), "1234");
        assert_eq!(zero_fill("agency", " 12 ", 4).unwrap(), "0012");

        assert!(matches!(
            zero_fill("agency", "12345", 4),
            Err(ValidationError::InvalidFieldLength { expected: 4, actual: 5, .. })
        ));
        assert!(matches!(
            zero_fill("agency", "12-3", 4),
            Err(ValidationError::InvalidCharacter { position: 2, .. })
        ));
        assert!(matches!(
            zero_fill("agency", "", 4),
            Err(ValidationError::MissingRequiredField { .. })
        ));
    }
}
