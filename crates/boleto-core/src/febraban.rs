//! # FEBRABAN Code Assembly
//!
//! Builds the canonical 44-digit code from its fields.
//!
//! ## Assembly
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  bank(3) + currency(1) + factor(4) + value(10) + free(25)   = 43 digits │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  modulo11(43 digits).remainder ──► febraban_check_digit ──► DV         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bank + currency + DV + factor + value + free               = 44 digits │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The resulting [`FebrabanCode`] is immutable and feeds both the digitable
//! line and the barcode.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::check_digit::{febraban_check_digit, modulo11};
use crate::due_date::DueDateFactor;
use crate::error::{BoletoError, BoletoResult};
use crate::types::{BankCode, BoletoFields, CurrencyCode, FreeField, ValueField};
use crate::validation::validate_digits;

/// Length of a FEBRABAN code.
pub const FEBRABAN_CODE_LEN: usize = 44;

/// Zero-based position of the overall check digit.
const CHECK_DIGIT_POS: usize = 4;

// =============================================================================
// FEBRABAN Code
// =============================================================================

/// An assembled, self-consistent 44-digit code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct FebrabanCode(String);

impl FebrabanCode {
    /// Assembles a code from validated fields. Cannot fail.
    pub fn assemble(fields: &BoletoFields) -> Self {
        let body = fields.digits_without_check_digit();
        let check_digit = overall_check_digit(&body);

        let mut code = String::with_capacity(FEBRABAN_CODE_LEN);
        code.push_str(&body[..CHECK_DIGIT_POS]);
        code.push(char::from(b'0' + check_digit));
        code.push_str(&body[CHECK_DIGIT_POS..]);

        FebrabanCode(code)
    }

    /// Returns the 44 digits.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Positions 1-3.
    pub fn bank_code(&self) -> &str {
        &self.0[0..3]
    }

    /// Position 4.
    pub fn currency_code(&self) -> u8 {
        self.0.as_bytes()[3] - b'0'
    }

    /// Position 5, the overall check digit.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[CHECK_DIGIT_POS] - b'0'
    }

    /// Positions 6-9.
    pub fn due_date_factor(&self) -> &str {
        &self.0[5..9]
    }

    /// Positions 10-19.
    pub fn value_field(&self) -> &str {
        &self.0[9..19]
    }

    /// Positions 20-44.
    pub fn free_field(&self) -> &str {
        &self.0[19..44]
    }

    /// The 43 digits the overall check digit covers.
    pub fn digits_without_check_digit(&self) -> String {
        let mut digits = String::with_capacity(FEBRABAN_CODE_LEN - 1);
        digits.push_str(&self.0[..CHECK_DIGIT_POS]);
        digits.push_str(&self.0[CHECK_DIGIT_POS + 1..]);
        digits
    }
}

impl fmt::Display for FebrabanCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FebrabanCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parses a code read back from a scanner or a database.
///
/// The overall check digit is verified; a mismatch is reported as
/// [`BoletoError::CheckDigitMismatch`].
impl FromStr for FebrabanCode {
    type Err = BoletoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_digits("febraban_code", s, FEBRABAN_CODE_LEN)?;

        let code = FebrabanCode(s.to_string());
        let expected = overall_check_digit(&code.digits_without_check_digit());
        let found = code.check_digit();
        if expected != found {
            return Err(BoletoError::CheckDigitMismatch {
                block: "febraban code".to_string(),
                expected,
                found,
            });
        }

        Ok(code)
    }
}

/// Overall check digit of the 43 digits that surround it.
pub(crate) fn overall_check_digit(digits: &str) -> u8 {
    febraban_check_digit(modulo11(digits).remainder)
}

// =============================================================================
// Assembly Operations
// =============================================================================

/// Assembles a code from raw fixed-width strings.
///
/// ## Errors
/// - `MissingRequiredField` for an empty field
/// - `InvalidFieldLength` when a field is not 3/1/4/10/25 digits wide
/// - `InvalidCharacter` when a field contains a non-digit
///
/// ## Example
/// ```rust
/// use boleto_core::febraban::assemble_febraban_code;
///
/// let code = assemble_febraban_code(
///     "090",
///     9,
///     "0001",
///     "0000010000",
///     "0000000000000000000000010",
/// )
/// .unwrap();
/// assert_eq!(code.as_str(), "09099000100000100000000000000000000000000010");
/// ```
pub fn assemble_febraban_code(
    bank_code: &str,
    currency_code: u8,
    due_date_factor: &str,
    value_field: &str,
    free_field: &str,
) -> BoletoResult<FebrabanCode> {
    let fields = BoletoFields {
        bank_code: BankCode::new(bank_code)?,
        currency_code: CurrencyCode::new(currency_code)?,
        due_date_factor: DueDateFactor::from_field(due_date_factor)?,
        value_field: ValueField::new(value_field)?,
        free_field: FreeField::new(free_field)?,
    };

    Ok(FebrabanCode::assemble(&fields))
}

/// Renders the bank code with its modulo-11 check digit, e.g. `"001-9"`.
///
/// Display only; the 44-digit code does not carry this digit.
///
/// ## Example
/// ```rust
/// use boleto_core::febraban::bank_code_with_check_digit;
/// use boleto_core::types::BankCode;
///
/// let bank = BankCode::new("237").unwrap();
/// assert_eq!(bank_code_with_check_digit(&bank), "237-2");
/// ```
pub fn bank_code_with_check_digit(bank_code: &BankCode) -> String {
    format!("{}-{}", bank_code, modulo11(bank_code.as_str()).check_digit)
}

// =============================================================================
// Unit Tests
// =============================================================================
