//! # Field Types
//!
//! Fixed-width value objects that make up a FEBRABAN code.
//!
//! ## Code Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    44-digit FEBRABAN code                               │
//! │                                                                         │
//! │  pos  1-3   4   5    6-9        10-19               20-44              │
//! │     ┌─────┬───┬───┬───────┬──────────────┬───────────────────────────┐ │
//! │     │ 090 │ 9 │ 9 │ 0001  │  0000010000  │ 0000000000000000000000010 │ │
//! │     └─────┴───┴───┴───────┴──────────────┴───────────────────────────┘ │
//! │      bank  cur  DV  factor   value field     free field (per bank)     │
//! │      BankCode   │   DueDate  ValueField      FreeField                 │
//! │      CurrencyCode   Factor                                              │
//! │                 └── computed by the assembler                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every type here validates on construction, so a [`BoletoFields`] value
//! can always be assembled.

use serde::Serialize;
use std::fmt;

use crate::due_date::DueDateFactor;
use crate::error::ValidationError;
use crate::validation::{validate_digits, ValidationResult};

/// Width of the bank code field.
pub const BANK_CODE_LEN: usize = 3;
/// Width of the value field.
pub const VALUE_FIELD_LEN: usize = 10;
/// Width of the bank-specific free field.
pub const FREE_FIELD_LEN: usize = 25;

macro_rules! digit_field {
    ($(#[$meta:meta])* $name:ident, $field:literal, $len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(String);

        impl $name {
            /// Validates and wraps a fixed-width digit string.
            pub fn new(value: &str) -> ValidationResult<Self> {
                validate_digits($field, value, $len)?;
                Ok($name(value.to_string()))
            }

            /// Returns the digits.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::new(s)
            }
        }
    };
}

digit_field!(
    /// The 3-digit FEBRABAN bank code ("001", "090", ...).
    BankCode,
    "bank_code",
    BANK_CODE_LEN
);

digit_field!(
    /// The 10-digit value field: amount in centavos, or all zeros when
    /// the slip has no fixed value.
    ValueField,
    "value_field",
    VALUE_FIELD_LEN
);

digit_field!(
    /// The 25-digit bank-specific free field (FEBRABAN positions 20-44).
    FreeField,
    "free_field",
    FREE_FIELD_LEN
);

impl ValueField {
    /// The all-zero value field used by slips without a fixed value.
    pub fn zero() -> Self {
        ValueField("0".repeat(VALUE_FIELD_LEN))
    }
}

// =============================================================================
// Currency Code
// =============================================================================

/// Species names per currency code. Read-only for the whole process.
const SPECIES: &[(u8, &str)] = &[(CurrencyCode::REAL.0, "REAL")];

/// The single-digit currency code (position 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CurrencyCode(u8);

impl CurrencyCode {
    /// Brazilian real, the only currency in circulation on boletos.
    pub const REAL: CurrencyCode = CurrencyCode(9);

    /// Validates a currency code: it must fit a single digit.
    pub fn new(code: u8) -> ValidationResult<Self> {
        if code > 9 {
            return Err(ValidationError::InvalidFieldLength {
                field: "currency_code".to_string(),
                expected: 1,
                actual: code.to_string().len(),
            });
        }
        Ok(CurrencyCode(code))
    }

    /// Returns the digit.
    #[inline]
    pub const fn code(&self) -> u8 {
        self.0
    }

    /// Returns the species name printed on the slip ("REAL").
    pub fn species(&self) -> Option<&'static str> {
        SPECIES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        CurrencyCode::REAL
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Boleto Fields
// =============================================================================

/// Everything the assembler needs except the computed check digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoletoFields {
    pub bank_code: BankCode,
    pub currency_code: CurrencyCode,
    pub due_date_factor: DueDateFactor,
    pub value_field: ValueField,
    pub free_field: FreeField,
}

impl BoletoFields {
    /// The 43 digits the overall check digit is computed over, in code
    /// order with the check digit left out.
    pub fn digits_without_check_digit(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.bank_code, self.currency_code, self.due_date_factor, self.value_field, self.free_field
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
