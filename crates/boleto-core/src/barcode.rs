//! # Barcode Encoder
//!
//! Interleaved 2 of 5 bar/space widths for a FEBRABAN code.
//!
//! ## Symbol Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start guard     digit pairs (d1, d2)...                  stop guard    │
//! │  ▌ ▌             bars ← d1 pattern, spaces ← d2 pattern    █ ▌          │
//! │  n n n n         b s b s b s b s b s                       W n n        │
//! │  (bar space      (10 elements per pair)                   (bar space   │
//! │   bar space)                                                bar)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The output is a flat list of (width, color) elements. Turning it into
//! pixels, SVG rectangles or terminal blocks is up to the caller.

use serde::Serialize;
use ts_rs::TS;

use crate::febraban::FebrabanCode;
use crate::validation::{validate_digit_chars, ValidationResult};

/// Narrow/wide pattern per digit, `1` = wide.
const DIGIT_PATTERNS: [[u8; 5]; 10] = [
    [0, 0, 1, 1, 0],
    [1, 0, 0, 0, 1],
    [0, 1, 0, 0, 1],
    [1, 1, 0, 0, 0],
    [0, 0, 1, 0, 1],
    [1, 0, 1, 0, 0],
    [0, 1, 1, 0, 0],
    [0, 0, 0, 1, 1],
    [1, 0, 0, 1, 0],
    [0, 1, 0, 1, 0],
];

/// Width class of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BarWidth {
    Narrow,
    Wide,
}

/// Whether an element is inked or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BarColor {
    Bar,
    Space,
}

/// One element of the symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct BarElement {
    pub width: BarWidth,
    pub color: BarColor,
}

impl BarElement {
    const fn new(width: BarWidth, color: BarColor) -> Self {
        BarElement { width, color }
    }
}

const fn narrow_bar() -> BarElement {
    BarElement::new(BarWidth::Narrow, BarColor::Bar)
}

const fn narrow_space() -> BarElement {
    BarElement::new(BarWidth::Narrow, BarColor::Space)
}

/// Start guard: narrow bar, narrow space, narrow bar, narrow space.
pub const START_GUARD: [BarElement; 4] = [narrow_bar(), narrow_space(), narrow_bar(), narrow_space()];

/// Stop guard: wide bar, narrow space, narrow bar.
pub const STOP_GUARD: [BarElement; 3] = [
    BarElement::new(BarWidth::Wide, BarColor::Bar),
    narrow_space(),
    narrow_bar(),
];

/// The complete ordered element sequence of a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct BarWidths(Vec<BarElement>);

impl BarWidths {
    /// Returns the elements, guards included.
    #[inline]
    pub fn elements(&self) -> &[BarElement] {
        &self.0
    }

    /// Number of elements, guards included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a symbol carries at least its guards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Elements between the start and stop guards.
    pub fn data_elements(&self) -> &[BarElement] {
        &self.0[START_GUARD.len()..self.0.len() - STOP_GUARD.len()]
    }

    /// Maps each element to a concrete width chosen by the renderer.
    ///
    /// ## Example
    /// ```rust
    /// use boleto_core::barcode::encode_interleaved_2of5;
    ///
    /// let widths = encode_interleaved_2of5("00").unwrap().module_widths(1, 3);
    /// assert_eq!(&widths[..4], &[1, 1, 1, 1]);
    /// assert_eq!(&widths[widths.len() - 3..], &[3, 1, 1]);
    /// ```
    pub fn module_widths(&self, narrow: u32, wide: u32) -> Vec<u32> {
        self.0
            .iter()
            .map(|element| match element.width {
                BarWidth::Narrow => narrow,
                BarWidth::Wide => wide,
            })
            .collect()
    }
}

/// Encodes an arbitrary digit string as interleaved 2 of 5.
///
/// An odd-length input gets a leading `0`.
///
/// ## Errors
/// `InvalidCharacter` if `digits` contains a non-digit.
pub fn encode_interleaved_2of5(digits: &str) -> ValidationResult<BarWidths> {
    validate_digit_chars("barcode", digits)?;

    if digits.len() % 2 == 1 {
        Ok(encode_pairs(format!("0{digits}").as_bytes()))
    } else {
        Ok(encode_pairs(digits.as_bytes()))
    }
}

/// Encodes a FEBRABAN code. Cannot fail: the code is always 44 digits.
///
/// ## Example
/// ```rust
/// use boleto_core::barcode::encode_barcode;
///
/// let code = "09099000100000100000000000000000000000000010".parse().unwrap();
/// assert_eq!(encode_barcode(&code).len(), 4 + 220 + 3);
/// ```
pub fn encode_barcode(code: &FebrabanCode) -> BarWidths {
    encode_pairs(code.as_str().as_bytes())
}

/// `digits` must be an even number of ASCII digits.
fn encode_pairs(digits: &[u8]) -> BarWidths {
    let mut elements = Vec::with_capacity(START_GUARD.len() + digits.len() * 5 + STOP_GUARD.len());
    elements.extend_from_slice(&START_GUARD);

    for pair in digits.chunks_exact(2) {
        let bars = &DIGIT_PATTERNS[usize::from(pair[0] - b'0')];
        let spaces = &DIGIT_PATTERNS[usize::from(pair[1] - b'0')];

        for (bar, space) in bars.iter().zip(spaces) {
            elements.push(BarElement::new(width_of(*bar), BarColor::Bar));
            elements.push(BarElement::new(width_of(*space), BarColor::Space));
        }
    }

    elements.extend_from_slice(&STOP_GUARD);
    BarWidths(elements)
}

fn width_of(bit: u8) -> BarWidth {
    if bit == 0 {
        BarWidth::Narrow
    } else {
        BarWidth::Wide
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    const N: BarWidth = BarWidth::Narrow;
    const W: BarWidth = BarWidth::Wide;

    fn widths(elements: &[BarElement]) -> Vec<BarWidth> {
        elements.iter().map(|e| e.width).collect()
    }

    #[test]
    fn test_every_pattern_has_two_wide() {
        for pattern in DIGIT_PATTERNS {
            assert_eq!(pattern.iter().filter(|bit| **bit == 1).count(), 2);
        }
    }

    #[test]
    fn test_pair_interleaving() {
        // "12": bars from 1 = 10001, spaces from 2 = 01001
        let symbol = encode_interleaved_2of5("12").unwrap();
        let data = symbol.data_elements();
        assert_eq!(data.len(), 10);
        assert_eq!(widths(data), vec![W, N, N, W, N, N, N, N, W, W]);

        let colors: Vec<BarColor> = data.iter().map(|e| e.color).collect();
        assert_eq!(colors[0], BarColor::Bar);
        assert_eq!(colors[1], BarColor::Space);
        assert!(colors.chunks(2).all(|c| c == [BarColor::Bar, BarColor::Space]));
    }

    #[test]
    fn test_guards() {
        let symbol = encode_interleaved_2of5("1234").unwrap();
        assert_eq!(&symbol.elements()[..4], &START_GUARD);
        assert_eq!(&symbol.elements()[symbol.len() - 3..], &STOP_GUARD);
        assert_eq!(widths(&STOP_GUARD), vec![W, N, N]);
        assert_eq!(widths(&START_GUARD), vec![N, N, N, N]);
    }

    #[test]
    fn test_odd_input_is_padded() {
        assert_eq!(
            encode_interleaved_2of5("7").unwrap(),
            encode_interleaved_2of5("07").unwrap()
        );
    }

    #[test]
    fn test_empty_input_is_guards_only() {
        let symbol = encode_interleaved_2of5("").unwrap();
        assert_eq!(symbol.len(), START_GUARD.len() + STOP_GUARD.len());
        assert!(symbol.data_elements().is_empty());
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(matches!(
            encode_interleaved_2of5("12x4"),
            Err(ValidationError::InvalidCharacter { position: 2, .. })
        ));
    }

    #[test]
    fn test_febraban_code_element_count() {
        let code: FebrabanCode = "09099000100000100000000000000000000000000010".parse().unwrap();
        let symbol = encode_barcode(&code);
        assert_eq!(symbol.data_elements().len(), 44 * 5);
        assert_eq!(symbol, encode_interleaved_2of5(code.as_str()).unwrap());
    }

    #[test]
    fn test_module_widths() {
        let symbol = encode_interleaved_2of5("12").unwrap();
        let modules = symbol.module_widths(1, 3);
        assert_eq!(modules.len(), symbol.len());
        assert_eq!(&modules[4..14], &[3, 1, 1, 3, 1, 1, 1, 1, 3, 3]);
    }

    #[test]
    fn test_json_shape() {
        let symbol = encode_interleaved_2of5("12").unwrap();
        let json = serde_json::to_value(&symbol).unwrap();

        assert_eq!(json.as_array().unwrap().len(), symbol.len());
        assert_eq!(json[0], serde_json::json!({ "width": "narrow", "color": "bar" }));
        assert_eq!(json[4], serde_json::json!({ "width": "wide", "color": "bar" }));
        assert_eq!(json[5]["color"], "space");
    }
}
