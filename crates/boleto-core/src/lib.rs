//! # boleto-core: FEBRABAN Code Engine
//!
//! This crate turns boleto fields into the 44-digit FEBRABAN code, its
//! digitable line and its interleaved 2 of 5 barcode. Every function is
//! pure: no I/O, no global mutable state, safe to call from any thread.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Boleto Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   boleto-cli / rendering layer                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        boleto-banks (free fields, wallets, Boleto aggregate)    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ FreeField (25 digits)                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ boleto-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  check_digit ──► due_date ──► febraban ──┬──► digitable_line    │   │
//! │  │  (mod 10/11)     (factor)     (44 digits)└──► barcode           │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`check_digit`] - Modulo-10 and modulo-11 checksums
//! - [`due_date`] - Due-date factor
//! - [`types`] - Fixed-width field value objects
//! - [`money`] - Integer centavos and the value field
//! - [`febraban`] - 44-digit code assembly and parsing
//! - [`free_field`] - The bank free-field capability
//! - [`digitable_line`] - Human-typed line formatting and parsing
//! - [`barcode`] - Interleaved 2 of 5 widths
//! - [`validation`] - Digit-field checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use boleto_core::{
//!     assemble_febraban_code, compute_due_date_factor, encode_barcode, format_digitable_line,
//! };
//! use chrono::NaiveDate;
//!
//! let factor = compute_due_date_factor(NaiveDate::from_ymd_opt(1997, 10, 8)).unwrap();
//! let code = assemble_febraban_code(
//!     "090",
//!     9,
//!     &factor.field(),
//!     "0000010000",
//!     "0000000000000000000000010",
//! )
//! .unwrap();
//!
//! let line = format_digitable_line(&code);
//! assert_eq!(line.as_str(), "09090.00002 00000.000000 00000.000109 9 00010000010000");
//!
//! let bars = encode_barcode(&code);
//! assert_eq!(bars.data_elements().len(), 220);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod barcode;
pub mod check_digit;
pub mod digitable_line;
pub mod due_date;
pub mod error;
pub mod febraban;
pub mod free_field;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use barcode::{encode_barcode, BarColor, BarElement, BarWidth, BarWidths};
pub use check_digit::{modulo10, modulo11, modulo11_with_base, Modulo11};
pub use digitable_line::{format_digitable_line, DigitableLine};
pub use due_date::{compute_due_date_factor, DueDate, DueDateFactor};
pub use error::{BoletoError, BoletoResult, ValidationError};
pub use febraban::{assemble_febraban_code, bank_code_with_check_digit, FebrabanCode};
pub use free_field::{assemble_with, FreeFieldBuilder};
pub use money::Money;
pub use types::{BankCode, BoletoFields, CurrencyCode, FreeField, ValueField};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_outputs_are_send_sync() {
        assert_send_sync::<FebrabanCode>();
        assert_send_sync::<DigitableLine>();
        assert_send_sync::<BarWidths>();
        assert_send_sync::<BoletoFields>();
        assert_send_sync::<BoletoError>();
    }

    #[test]
    fn test_engine_from_many_threads() {
        let lines: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        let code = assemble_febraban_code(
                            "090",
                            9,
                            "0001",
                            "0000010000",
                            "0000000000000000000000010",
                        )
                        .unwrap();
                        format_digitable_line(&code).as_str().to_string()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(lines
            .iter()
            .all(|line| line == "09090.00002 00000.000000 00000.000109 9 00010000010000"));
    }
}
