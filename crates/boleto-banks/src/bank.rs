//! # Bank Capability
//!
//! One implementation of [`Bank`] per issuing bank, plus a registry to look
//! them up by name or FEBRABAN code.
//!
//! ## Adding a Bank
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Create src/<bank>.rs with a unit struct                            │
//! │  2. impl Bank: code, name, logo, wallets, free_field                   │
//! │  3. Override display_fields() for fields printed differently           │
//! │  4. Add it to BANKS below                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;

use boleto_core::{BoletoResult, FreeField};

use crate::account::BankAccount;
use crate::error::{BankError, BankResult};
use crate::unicred::Unicred;

/// Per-bank display overrides, keyed by template field name.
///
/// A `None` value blanks the field.
pub type DisplayFields = BTreeMap<String, Option<String>>;

/// What the engine and the templates need from an issuing bank.
pub trait Bank: fmt::Debug + Send + Sync {
    /// The 3-digit FEBRABAN bank code.
    fn code(&self) -> &'static str;

    /// Display name.
    fn name(&self) -> &'static str;

    /// Logo file name, relative to the image directory.
    fn logo(&self) -> &'static str;

    /// Wallets ("carteiras") this bank accepts.
    fn wallets(&self) -> &'static [&'static str];

    /// Printed name of a wallet, when it differs from its number.
    fn wallet_name(&self, _wallet: &str) -> Option<&'static str> {
        None
    }

    /// Lays the account into FEBRABAN positions 20-44.
    fn free_field(&self, account: &BankAccount) -> BoletoResult<FreeField>;

    /// Fields this bank prints differently from the default layout.
    fn display_fields(&self, _account: &BankAccount) -> DisplayFields {
        DisplayFields::new()
    }

    /// Rejects wallets the bank does not offer.
    fn validate_wallet(&self, wallet: &str) -> BankResult<()> {
        if self.wallets().iter().any(|w| *w == wallet) {
            return Ok(());
        }

        Err(BankError::UnsupportedWallet {
            bank: self.name().to_string(),
            wallet: wallet.to_string(),
            allowed: self.wallets().iter().map(|w| w.to_string()).collect(),
        })
    }

    /// Wallet as printed on the slip: its name, or the number padded to 2.
    fn wallet_display(&self, wallet: &str) -> String {
        self.wallet_name(wallet)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{:0>2}", wallet))
    }
}

// =============================================================================
// Registry
// =============================================================================

static BANKS: &[&dyn Bank] = &[&Unicred];

/// All registered banks.
pub fn banks() -> &'static [&'static dyn Bank] {
    BANKS
}

/// Finds a bank by case-insensitive name or by 3-digit code.
///
/// ## Example
/// ```rust
/// use boleto_banks::find_bank;
///
/// assert_eq!(find_bank("unicred").unwrap().code(), "090");
/// assert_eq!(find_bank("090").unwrap().name(), "Unicred");
/// assert!(find_bank("999").is_err());
/// ```
pub fn find_bank(key: &str) -> BankResult<&'static dyn Bank> {
    let key = key.trim();

    BANKS
        .iter()
        .copied()
        .find(|bank| bank.code() == key || bank.name().eq_ignore_ascii_case(key))
        .ok_or_else(|| BankError::UnknownBank(key.to_string()))
}
