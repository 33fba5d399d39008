//! # Digitable Line
//!
//! The human-typed form of a FEBRABAN code ("linha digitável").
//!
//! ## Block Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  code:  BBB C D FFFF VVVVVVVVVV LLLLL LLLLLLLLLL LLLLLLLLLL             │
//! │                                  └─┬─┘ └────┬───┘ └────┬───┘            │
//! │                                    │        │          │                │
//! │  line:  BBBCL.LLLLx  LLLLL.LLLLLy  LLLLL.LLLLLz  D  FFFFVVVVVVVVVV      │
//! │         └─ block 1 ┘ └─ block 2 ─┘ └─ block 3 ─┘ 4  └── block 5 ──┘     │
//! │                                                                         │
//! │  x = modulo10(BBB C LLLLL)                                             │
//! │  y = modulo10(next 10 free-field digits)                               │
//! │  z = modulo10(last 10 free-field digits)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dots and spaces are presentation only: a line can be parsed back with or
//! without them.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::check_digit::modulo10;
use crate::error::{BoletoError, BoletoResult};
use crate::febraban::FebrabanCode;
use crate::validation::validate_digits;

/// Number of digits in a line once dots and spaces are removed.
pub const DIGITABLE_LINE_DIGITS: usize = 47;

/// A formatted digitable line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct DigitableLine(String);

impl DigitableLine {
    /// Returns the formatted line.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 47 digits without separators.
    pub fn digits(&self) -> String {
        strip_separators(&self.0)
    }

    /// Re-checks the three block check digits.
    pub fn verify(&self) -> BoletoResult<()> {
        verify_blocks(&self.digits())
    }

    /// Rebuilds the 44-digit code this line was formatted from.
    ///
    /// ## Errors
    /// `CheckDigitMismatch` if a block or the overall check digit is wrong.
    pub fn to_febraban_code(&self) -> BoletoResult<FebrabanCode> {
        let digits = self.digits();
        verify_blocks(&digits)?;

        let code = [
            &digits[0..4],
            &digits[32..33],
            &digits[33..47],
            &digits[4..9],
            &digits[10..20],
            &digits[21..31],
        ]
        .concat();

        code.parse()
    }
}

impl fmt::Display for DigitableLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses a typed line. Dots and whitespace are ignored; the result is
/// re-rendered in canonical form.
impl FromStr for DigitableLine {
    type Err = BoletoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_separators(s);
        validate_digits("digitable_line", &digits, DIGITABLE_LINE_DIGITS)?;

        let code = DigitableLine(digits).to_febraban_code()?;
        Ok(format_digitable_line(&code))
    }
}

fn strip_separators(line: &str) -> String {
    line.chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .collect()
}

fn verify_blocks(digits: &str) -> BoletoResult<()> {
    validate_digits("digitable_line", digits, DIGITABLE_LINE_DIGITS)?;

    let blocks = [("block 1", 0..9, 9), ("block 2", 10..20, 20), ("block 3", 21..31, 31)];
    for (block, range, check_pos) in blocks {
        let expected = modulo10(&digits[range]);
        let found = digits.as_bytes()[check_pos] - b'0';
        if expected != found {
            return Err(BoletoError::CheckDigitMismatch {
                block: block.to_string(),
                expected,
                found,
            });
        }
    }

    Ok(())
}

/// Formats a code as a digitable line.
///
/// ## Example
/// ```rust
/// use boleto_core::digitable_line::format_digitable_line;
///
/// let code = "09099000100000100000000000000000000000000010".parse().unwrap();
/// assert_eq!(
///     format_digitable_line(&code).as_str(),
///     "09090.00002 00000.000000 00000.000109 9 00010000010000"
/// );
/// ```
pub fn format_digitable_line(code: &FebrabanCode) -> DigitableLine {
    let free = code.free_field();
    let head = &code.as_str()[0..4];

    let block1 = format!("{}{}", head, &free[0..5]);
    let block2 = &free[5..15];
    let block3 = &free[15..25];

    let line = format!(
        "{}{}.{}{} {}.{}{} {}.{}{} {} {}{}",
        head,
        &free[0..1],
        &free[1..5],
        modulo10(&block1),
        &block2[0..5],
        &block2[5..10],
        modulo10(block2),
        &block3[0..5],
        &block3[5..10],
        modulo10(block3),
        code.check_digit(),
        code.due_date_factor(),
        code.value_field(),
    );

    DigitableLine(line)
}

// =============================================================================
// Unit Tests
// =============================================================================
