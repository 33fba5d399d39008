//! # Error Types
//!
//! Domain-specific error types for boleto-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  boleto-core errors (this file)                                        │
//! │  ├── BoletoError      - Code engine failures                           │
//! │  └── ValidationError  - Fixed-width field failures                     │
//! │                                                                         │
//! │  boleto-banks errors (separate crate)                                  │
//! │  └── BankError        - Wallet / bank lookup failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → BoletoError → BankError → CliError            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is raised synchronously by the operation that received the
//! bad input. Nothing here is retried: the engine is deterministic, so a
//! failure always points at caller-supplied data.

use thiserror::Error;

// =============================================================================
// Boleto Error
// =============================================================================

/// Errors produced by the FEBRABAN code engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoletoError {
    /// The due date lies outside what a 4-digit factor can express.
    ///
    /// ## When This Occurs
    /// - Due date before the 1997-10-07 epoch (negative day count)
    /// - Due date more than 9999 days after the epoch (after 2025-02-21)
    ///
    /// No wraparound is applied: the bank-mandated epoch reset is not
    /// guessed here.
    #[error("Due date factor {days} does not fit the 4-digit field (0..=9999)")]
    DueDateFactorOverflow { days: i64 },

    /// An embedded check digit does not match a fresh recomputation.
    ///
    /// ## When This Occurs
    /// - Parsing a 44-digit code typed or scanned with an error
    /// - Parsing a digitable line with a mistyped block
    #[error("Check digit mismatch in {block}: expected {expected}, found {found}")]
    CheckDigitMismatch {
        block: String,
        expected: u8,
        found: u8,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for fixed-width digit fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    MissingRequiredField { field: String },

    /// A fixed-width field has the wrong number of characters.
    #[error("{field} must have {expected} digits, got {actual}")]
    InvalidFieldLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// A field contains something other than ASCII digits.
    #[error("{field} has non-digit character {character:?} at position {position}")]
    InvalidCharacter {
        field: String,
        position: usize,
        character: char,
    },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BoletoError.
pub type BoletoResult<T> = Result<T, BoletoError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BoletoError::DueDateFactorOverflow { days: 10000 };
        assert_eq!(
            err.to_string(),
            "Due date factor 10000 does not fit the 4-digit field (0..=9999)"
        );

        let err = BoletoError::CheckDigitMismatch {
            block: "block 2".to_string(),
            expected: 4,
            found: 5,
        };
        assert_eq!(
            err.to_string(),
            "Check digit mismatch in block 2: expected 4, found 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MissingRequiredField {
            field: "bank_code".to_string(),
        };
        assert_eq!(err.to_string(), "bank_code is required");

        let err = ValidationError::InvalidFieldLength {
            field: "free_field".to_string(),
            expected: 25,
            actual: 24,
        };
        assert_eq!(err.to_string(), "free_field must have 25 digits, got 24");

        let err = ValidationError::InvalidCharacter {
            field: "value_field".to_string(),
            position: 3,
            character: '.',
        };
        assert_eq!(
            err.to_string(),
            "value_field has non-digit character '.' at position 3"
        );
    }

    #[test]
    fn test_validation_converts_to_boleto_error() {
        let validation_err = ValidationError::MissingRequiredField {
            field: "bank_code".to_string(),
        };
        let err: BoletoError = validation_err.into();
        assert!(matches!(err, BoletoError::Validation(_)));
    }
}
