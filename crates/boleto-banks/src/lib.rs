//! # Boleto Banks
//!
//! Bank-specific layouts on top of `boleto-core`.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           boleto-banks                                  │
//! │                                                                         │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────────────┐    │
//! │  │   registry   │──►│  dyn Bank    │──►│  Boleto                  │    │
//! │  │  find_bank() │   │  (Unicred..) │   │  code / line / barcode   │    │
//! │  └──────────────┘   └──────────────┘   └────────────┬─────────────┘    │
//! │                                                      │                  │
//! └──────────────────────────────────────────────────────┼──────────────────┘
//!                                                        ▼
//!                                                   boleto-core
//! ```
//!
//! Banks differ only in how they fill the 25-digit free field and in a few
//! printed fields. Everything else is shared.
//!
//! ## Example
//! ```rust
//! use boleto_banks::{Boleto, BoletoRequest};
//!
//! let request: BoletoRequest = serde_json::from_str(r#"{
//!     "bank": "unicred",
//!     "agency": "1234",
//!     "account": "123456",
//!     "wallet": "21",
//!     "our_number": "1234567890",
//!     "on_presentation": true
//! }"#).unwrap();
//!
//! let boleto = Boleto::from_request(&request).unwrap();
//! assert_eq!(boleto.febraban_code().unwrap().due_date_factor(), "0000");
//! ```

pub mod account;
pub mod bank;
pub mod boleto;
pub mod error;
pub mod unicred;

pub use account::BankAccount;
pub use bank::{banks, find_bank, Bank, DisplayFields};
pub use boleto::{Boleto, BoletoRequest, BoletoSummary, ON_PRESENTATION_LABEL};
pub use error::{BankError, BankResult};
pub use unicred::Unicred;
