//! # Bank Error Types
//!
//! Errors raised while resolving a bank or building a boleto.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BankError                                                              │
//! │  ├── UnknownBank        - no bank registered under that name/code      │
//! │  ├── UnsupportedWallet  - wallet not offered by the bank               │
//! │  ├── Validation         - a field failed fixed-width validation        │
//! │  └── Boleto             - the core engine rejected the input           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use boleto_core::{BoletoError, ValidationError};
use thiserror::Error;

/// Bank-layer errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// No bank matches the requested name or code.
    #[error("Unknown bank: {0}")]
    UnknownBank(String),

    /// The wallet ("carteira") is not offered by the bank.
    ///
    /// ## When This Occurs
    /// - Typo in the wallet code of a boleto description
    /// - Wallet configured for another bank
    #[error("Wallet {wallet} is not available for {bank}; allowed: {allowed:?}")]
    UnsupportedWallet {
        bank: String,
        wallet: String,
        allowed: Vec<String>,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Engine error (wraps BoletoError).
    #[error(transparent)]
    Boleto(#[from] BoletoError),
}

/// Convenience type alias for Results with BankError.
pub type BankResult<T> = Result<T, BankError>;
