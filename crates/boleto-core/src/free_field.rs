//! # Free Field Capability
//!
//! Positions 20-44 of the code belong to the issuing bank. The engine never
//! looks at bank identity; it only asks a [`FreeFieldBuilder`] for a
//! validated 25-digit [`FreeField`].
//!
//! ```text
//! ┌──────────────────┐     build_free_field()      ┌──────────────────────┐
//! │  bank module     │ ─────────────────────────►  │  assemble_with(...)  │
//! │  (boleto-banks)  │     FreeField (25 digits)   │  → FebrabanCode      │
//! └──────────────────┘                             └──────────────────────┘
//! ```

use crate::due_date::DueDateFactor;
use crate::error::BoletoResult;
use crate::febraban::FebrabanCode;
use crate::types::{BankCode, BoletoFields, CurrencyCode, FreeField, ValueField};

/// Produces the bank-specific free field.
///
/// Any `Fn() -> BoletoResult<FreeField>` closure is a builder, so a bank
/// module can pass a plain function.
pub trait FreeFieldBuilder {
    fn build_free_field(&self) -> BoletoResult<FreeField>;
}

impl<F> FreeFieldBuilder for F
where
    F: Fn() -> BoletoResult<FreeField>,
{
    fn build_free_field(&self) -> BoletoResult<FreeField> {
        self()
    }
}

/// Assembles a code, asking `builder` for the free field.
///
/// ## Example
/// ```rust
/// use boleto_core::free_field::assemble_with;
/// use boleto_core::types::{BankCode, CurrencyCode, FreeField, ValueField};
/// use boleto_core::{BoletoResult, DueDateFactor};
///
/// let code = assemble_with(
///     &BankCode::new("090").unwrap(),
///     CurrencyCode::REAL,
///     DueDateFactor::from_days(1).unwrap(),
///     ValueField::new("0000010000").unwrap(),
///     &|| -> BoletoResult<FreeField> { Ok(FreeField::new("0000000000000000000000010")?) },
/// )
/// .unwrap();
/// assert!(code.as_str().starts_with("0909"));
/// ```
pub fn assemble_with<B>(
    bank_code: &BankCode,
    currency_code: CurrencyCode,
    due_date_factor: DueDateFactor,
    value_field: ValueField,
    builder: &B,
) -> BoletoResult<FebrabanCode>
where
    B: FreeFieldBuilder + ?Sized,
{
    let fields = BoletoFields {
        bank_code: bank_code.clone(),
        currency_code,
        due_date_factor,
        value_field,
        free_field: builder.build_free_field()?,
    };

    Ok(FebrabanCode::assemble(&fields))
}

// =============================================================================
// Unit Tests
// =============================================================================
