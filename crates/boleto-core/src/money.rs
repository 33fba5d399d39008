//! # Money Module
//!
//! Provides the `Money` type for boleto amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Stripping the separator from a float:                                  │
//! │    100.1 → "100.1" → "1001"  ❌ means R$ 10,01                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    10010 centavos → "0000010010"  (value field, 10 digits)             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boleto_core::money::Money;
//!
//! let value = Money::from_cents(10000); // R$ 100,00
//! assert_eq!(value.value_field().unwrap().as_str(), "0000010000");
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::ValueField;
use crate::validation::ValidationResult;

/// Largest amount the 10-digit value field can carry.
pub const MAX_VALUE_CENTS: i64 = 9_999_999_999;

/// A monetary value in centavos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Converts to the 10-digit FEBRABAN value field.
    ///
    /// ## Errors
    /// `OutOfRange` for negative amounts or amounts above
    /// [`MAX_VALUE_CENTS`].
    pub fn value_field(&self) -> ValidationResult<ValueField> {
        if !(0..=MAX_VALUE_CENTS).contains(&self.0) {
            return Err(ValidationError::OutOfRange {
                field: "value".to_string(),
                min: 0,
                max: MAX_VALUE_CENTS,
            });
        }

        ValueField::new(&format!("{:010}", self.0))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
