//! # Due Date Module
//!
//! Converts a boleto due date into the FEBRABAN due-date factor.
//!
//! ## The Factor
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  factor = whole calendar days from 1997-10-07 to the due date           │
//! │                                                                         │
//! │    1997-10-07  →  0000                                                 │
//! │    1997-10-08  →  0001                                                 │
//! │    2000-07-03  →  1000                                                 │
//! │    2025-02-21  →  9999   (last representable date)                     │
//! │    2025-02-22  →  DueDateFactorOverflow                                │
//! │                                                                         │
//! │  "Pay on presentation" slips have no due date → 0000                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Days are counted on calendar dates ([`NaiveDate`]), never on timestamps,
//! so time zones cannot shift the factor.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BoletoError, BoletoResult};

/// Days from 0001-01-01 (CE) to the FEBRABAN epoch, 1997-10-07.
const EPOCH_DAYS_FROM_CE: i64 = 729_304;

/// Largest factor the 4-digit field can hold.
pub const MAX_DUE_DATE_FACTOR: u16 = 9999;

// =============================================================================
// Due Date
// =============================================================================

/// When a boleto falls due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueDate {
    /// Fixed calendar due date.
    Fixed(NaiveDate),
    /// No due date: payable on presentation ("contra apresentação").
    OnPresentation,
}

impl From<Option<NaiveDate>> for DueDate {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(DueDate::OnPresentation, DueDate::Fixed)
    }
}

// =============================================================================
// Due Date Factor
// =============================================================================

/// The 4-digit due-date factor field (FEBRABAN positions 6-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct DueDateFactor(u16);

impl DueDateFactor {
    /// The factor used by slips without a due date.
    pub const ON_PRESENTATION: DueDateFactor = DueDateFactor(0);

    /// Creates a factor from a raw day count.
    pub fn from_days(days: i64) -> BoletoResult<Self> {
        if !(0..=i64::from(MAX_DUE_DATE_FACTOR)).contains(&days) {
            return Err(BoletoError::DueDateFactorOverflow { days });
        }
        Ok(DueDateFactor(days as u16))
    }

    /// Parses an already-formatted 4-digit field.
    pub fn from_field(field: &str) -> BoletoResult<Self> {
        crate::validation::validate_digits("due_date_factor", field, 4)?;
        let days = field.bytes().fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'));
        Self::from_days(days)
    }

    /// Returns the day count.
    #[inline]
    pub const fn days(&self) -> u16 {
        self.0
    }

    /// Returns the zero-padded 4-digit field.
    pub fn field(&self) -> String {
        self.to_string()
    }

    /// Maps the factor back to its calendar date.
    ///
    /// `0000` is read as "on presentation" and yields `OnPresentation`.
    pub fn due_date(&self) -> DueDate {
        if self.0 == 0 {
            return DueDate::OnPresentation;
        }

        NaiveDate::from_num_days_from_ce_opt((EPOCH_DAYS_FROM_CE + i64::from(self.0)) as i32)
            .map_or(DueDate::OnPresentation, DueDate::Fixed)
    }
}

impl fmt::Display for DueDateFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Computes the due-date factor.
///
/// `None` means the slip is payable on presentation and yields `0000`.
///
/// ## Errors
/// [`BoletoError::DueDateFactorOverflow`] when the day count is negative or
/// above 9999.
///
/// ## Example
/// ```rust
/// use boleto_core::due_date::compute_due_date_factor;
/// use chrono::NaiveDate;
///
/// let due = NaiveDate::from_ymd_opt(1997, 10, 8).unwrap();
/// assert_eq!(compute_due_date_factor(Some(due)).unwrap().field(), "0001");
/// assert_eq!(compute_due_date_factor(None).unwrap().field(), "0000");
/// ```
pub fn compute_due_date_factor(due_date: Option<NaiveDate>) -> BoletoResult<DueDateFactor> {
    DueDate::from(due_date).factor()
}

impl DueDate {
    /// Computes this due date's factor.
    pub fn factor(&self) -> BoletoResult<DueDateFactor> {
        match self {
            DueDate::OnPresentation => Ok(DueDateFactor::ON_PRESENTATION),
            DueDate::Fixed(date) => {
                DueDateFactor::from_days(i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE)
            }
        }
    }

    /// Returns the calendar date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DueDate::Fixed(date) => Some(*date),
            DueDate::OnPresentation => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch_constant_matches_calendar() {
        assert_eq!(
            i64::from(date(1997, 10, 7).num_days_from_ce()),
            EPOCH_DAYS_FROM_CE
        );
    }

    #[test]
    fn test_epoch_and_next_day() {
        assert_eq!(compute_due_date_factor(Some(date(1997, 10, 7))).unwrap().days(), 0);
        assert_eq!(compute_due_date_factor(Some(date(1997, 10, 8))).unwrap().days(), 1);
        assert_eq!(
            compute_due_date_factor(Some(date(1997, 10, 8))).unwrap().field(),
            "0001"
        );
    }

    #[test]
    fn test_on_presentation() {
        let factor = compute_due_date_factor(None).unwrap();
        assert_eq!(factor, DueDateFactor::ON_PRESENTATION);
        assert_eq!(factor.field(), "0000");
    }

    #[test]
    fn test_known_factors() {
        assert_eq!(compute_due_date_factor(Some(date(2000, 7, 3))).unwrap().days(), 1000);
        assert_eq!(compute_due_date_factor(Some(date(2025, 2, 21))).unwrap().days(), 9999);
    }

    #[test]
    fn test_overflow_is_reported_not_wrapped() {
        assert_eq!(
            compute_due_date_factor(Some(date(2025, 2, 22))),
            Err(BoletoError::DueDateFactorOverflow { days: 10000 })
        );
    }

    #[test]
    fn test_before_epoch_is_rejected() {
        assert_eq!(
            compute_due_date_factor(Some(date(1997, 10, 6))),
            Err(BoletoError::DueDateFactorOverflow { days: -1 })
        );
    }

    #[test]
    fn test_from_field() {
        assert_eq!(DueDateFactor::from_field("0042").unwrap().days(), 42);
        assert!(DueDateFactor::from_field("42").is_err());
        assert!(DueDateFactor::from_field("00a2").is_err());
    }

    #[test]
    fn test_factor_maps_back_to_date() {
        let factor = compute_due_date_factor(Some(date(2020, 1, 15))).unwrap();
        assert_eq!(factor.due_date(), DueDate::Fixed(date(2020, 1, 15)));
        assert_eq!(DueDateFactor::ON_PRESENTATION.due_date(), DueDate::OnPresentation);
    }

    #[test]
    fn test_due_date_from_option() {
        assert_eq!(DueDate::from(None), DueDate::OnPresentation);
        assert_eq!(
            DueDate::from(Some(date(2020, 1, 1))).date(),
            Some(date(2020, 1, 1))
        );
    }
}
