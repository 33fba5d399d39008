//! # Check Digit Module
//!
//! The two weighted checksums FEBRABAN uses on boleto codes.
//!
//! ## Where Each One Is Used
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  modulo10  ──► the three free-field blocks of the digitable line        │
//! │                                                                         │
//! │  modulo11  ──┬► check_digit: bank code display ("001-9")                │
//! │              └► remainder:   overall check digit at code position 5     │
//! │                              (via febraban_check_digit)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both functions walk the digits right to left. Inputs must be ASCII
//! digits; callers validate before calling (the typed fields in
//! [`crate::types`] guarantee it).

use serde::Serialize;

/// Default upper weight for [`modulo11`]: weights cycle 2, 3, ... 9, 2, ...
pub const MODULO11_DEFAULT_BASE: u32 = 9;

/// Result of a modulo-11 computation.
///
/// Both values are kept because callers need different ones: the bank
/// code display uses `check_digit`, the overall FEBRABAN digit is derived
/// from `remainder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Modulo11 {
    /// `(sum * 10) mod 11`, with 10 mapped to 0.
    pub check_digit: u8,
    /// `sum mod 11`.
    pub remainder: u8,
}

#[inline]
fn digit_value(byte: u8) -> u32 {
    debug_assert!(byte.is_ascii_digit(), "non-digit byte {byte:#04x}");
    u32::from(byte.wrapping_sub(b'0'))
}

/// Modulo-10 check digit.
///
/// Weights alternate 2, 1, 2, 1, ... starting with 2 on the rightmost
/// digit. Two-digit products are reduced to the sum of their digits
/// (16 → 7) before being added.
///
/// ## Example
/// ```rust
/// use boleto_core::check_digit::modulo10;
///
/// assert_eq!(modulo10("0019373700"), 4);
/// assert_eq!(modulo10("0000000000"), 0);
/// ```
pub fn modulo10(digits: &str) -> u8 {
    let total: u32 = digits
        .bytes()
        .rev()
        .zip([2u32, 1].into_iter().cycle())
        .map(|(byte, weight)| {
            let product = digit_value(byte) * weight;
            product / 10 + product % 10
        })
        .sum();

    ((10 - total % 10) % 10) as u8
}

/// Modulo-11 with the default base of 9.
///
/// ## Example
/// ```rust
/// use boleto_core::check_digit::modulo11;
///
/// let result = modulo11("001");
/// assert_eq!(result.check_digit, 9);
/// assert_eq!(result.remainder, 2);
/// ```
pub fn modulo11(digits: &str) -> Modulo11 {
    modulo11_with_base(digits, MODULO11_DEFAULT_BASE)
}

/// Modulo-11 with a custom upper weight.
///
/// Weights start at 2 on the rightmost digit and grow by one per position,
/// going back to 2 after `base`. A `base` below 2 keeps every weight at 2.
pub fn modulo11_with_base(digits: &str, base: u32) -> Modulo11 {
    let mut weight = 2u32;
    let mut total = 0u32;

    for byte in digits.bytes().rev() {
        total += digit_value(byte) * weight;
        weight = if weight >= base { 2 } else { weight + 1 };
    }

    let check_digit = match (total * 10) % 11 {
        10 => 0,
        digit => digit as u8,
    };

    Modulo11 {
        check_digit,
        remainder: (total % 11) as u8,
    }
}

/// Maps a modulo-11 remainder to the overall FEBRABAN check digit.
///
/// Remainders 0, 1 and 10 become 1; anything else becomes `11 - remainder`.
/// The result is never 0.
pub fn febraban_check_digit(remainder: u8) -> u8 {
    match remainder {
        0 | 1 | 10 => 1,
        r => 11 - r,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulo10_known_values() {
        assert_eq!(modulo10("0019373700"), 4);
        assert_eq!(modulo10("12345"), 5);
        assert_eq!(modulo10("0000000000"), 0);
        assert_eq!(modulo10("9"), 1);
    }

    #[test]
    fn test_modulo10_reduces_two_digit_products() {
        // 8 * 2 = 16 → 1 + 6 = 7; total 7 → check digit 3
        assert_eq!(modulo10("8"), 3);
        // 9 * 2 = 18 → 9; 1 * 1 = 1; total 10 → check digit 0
        assert_eq!(modulo10("19"), 0);
    }

    #[test]
    fn test_modulo10_empty_is_zero() {
        assert_eq!(modulo10(""), 0);
    }

    #[test]
    fn test_modulo11_bank_codes() {
        // Published bank code check digits
        assert_eq!(modulo11("001").check_digit, 9);
        assert_eq!(modulo11("033").check_digit, 7);
        assert_eq!(modulo11("104").check_digit, 0);
        assert_eq!(modulo11("237").check_digit, 2);
        assert_eq!(modulo11("341").check_digit, 7);
    }

    #[test]
    fn test_modulo11_remainder() {
        assert_eq!(modulo11("001").remainder, 2);
        assert_eq!(modulo11("090").remainder, 5);
        assert_eq!(modulo11("0019").remainder, 10);
    }

    #[test]
    fn test_modulo11_ten_becomes_zero() {
        // 748: sum 45, 450 mod 11 = 10 → 0
        assert_eq!(
            modulo11("748"),
            Modulo11 {
                check_digit: 0,
                remainder: 1
            }
        );
    }

    #[test]
    fn test_modulo11_weights_wrap_after_base() {
        // Eleven nines: weights 2..9 then 2, 3, 4 → sum 9 * 53 = 477
        assert_eq!(
            modulo11("99999999999"),
            Modulo11 {
                check_digit: 7,
                remainder: 4
            }
        );
    }

    #[test]
    fn test_modulo11_custom_base() {
        // Weights 2..7 then 2..5 over "1234567890"
        assert_eq!(
            modulo11_with_base("1234567890", 7),
            Modulo11 {
                check_digit: 3,
                remainder: 8
            }
        );
    }

    #[test]
    fn test_febraban_check_digit_mapping() {
        assert_eq!(febraban_check_digit(0), 1);
        assert_eq!(febraban_check_digit(1), 1);
        assert_eq!(febraban_check_digit(10), 1);
        assert_eq!(febraban_check_digit(2), 9);
        assert_eq!(febraban_check_digit(9), 2);
    }
}
