//! Unicred (bank code 090).
//!
//! Free field layout:
//!
//! ```text
//! ┌──────────┬────────────────┬─────────────────────┐
//! │ agency 4 │   account 10   │   our number 11     │  = 25
//! └──────────┴────────────────┴─────────────────────┘
//! ```

use boleto_core::validation::zero_fill;
use boleto_core::{BoletoResult, FreeField};
use tracing::debug;

use crate::account::BankAccount;
use crate::bank::{Bank, DisplayFields};

const OUR_NUMBER_LEN: usize = 11;

/// Unicred cooperative bank.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unicred;

impl Unicred {
    fn our_number(account: &BankAccount) -> BoletoResult<String> {
        Ok(zero_fill("our_number", &account.our_number, OUR_NUMBER_LEN)?)
    }
}

impl Bank for Unicred {
    fn code(&self) -> &'static str {
        "090"
    }

    fn name(&self) -> &'static str {
        "Unicred"
    }

    fn logo(&self) -> &'static str {
        "unicred.jpg"
    }

    fn wallets(&self) -> &'static [&'static str] {
        &["11", "21", "31", "41", "51"]
    }

    fn free_field(&self, account: &BankAccount) -> BoletoResult<FreeField> {
        let field = format!(
            "{}{}{}",
            zero_fill("agency", &account.agency, 4)?,
            zero_fill("account", &account.account, 10)?,
            Self::our_number(account)?,
        );

        Ok(FreeField::new(&field)?)
    }

    /// Unicred prints "our number" prefixed by the wallet: `21/00001234567`.
    fn display_fields(&self, account: &BankAccount) -> DisplayFields {
        // Display only: a bad number blanks the field, free_field() reports it
        let our_number = match Self::our_number(account) {
            Ok(number) => Some(format!("{}/{}", account.wallet, number)),
            Err(err) => {
                debug!(%err, "Unicred our_number not displayable");
                None
            }
        };

        DisplayFields::from([("our_number".to_string(), our_number)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boleto_core::{BoletoError, ValidationError};

    fn account(agency: &str, account: &str, our_number: &str) -> BankAccount {
        BankAccount {
            agency: agency.to_string(),
            account: account.to_string(),
            wallet: "21".to_string(),
            our_number: our_number.to_string(),
            ..BankAccount::default()
        }
    }

    #[test]
    fn test_free_field_layout() {
        let field = Unicred.free_field(&account("1234", "123456", "1234567890")).unwrap();
        assert_eq!(field.as_str(), "1234000012345601234567890");
        assert_eq!(field.as_str().len(), 25);
    }

    #[test]
    fn test_free_field_pads_short_values() {
        let field = Unicred.free_field(&account("1", "2", "3")).unwrap();
        assert_eq!(field.as_str(), "0001000000000200000000003");
    }

    #[test]
    fn test_free_field_rejects_wide_agency() {
        let err = Unicred.free_field(&account("12345", "1", "1")).unwrap_err();
        assert!(matches!(
            err,
            BoletoError::Validation(ValidationError::InvalidFieldLength { ref field, .. }) if field == "agency"
        ));
    }

    #[test]
    fn test_free_field_rejects_missing_our_number() {
        let err = Unicred.free_field(&account("1234", "1", "")).unwrap_err();
        assert!(matches!(
            err,
            BoletoError::Validation(ValidationError::MissingRequiredField { ref field }) if field == "our_number"
        ));
    }

    #[test]
    fn test_display_fields() {
        let fields = Unicred.display_fields(&account("1234", "1", "1234567"));
        assert_eq!(
            fields.get("our_number"),
            Some(&Some("21/00001234567".to_string()))
        );
    }

    #[test]
    fn test_display_fields_blank_invalid_our_number() {
        let fields = Unicred.display_fields(&account("1234", "1", "123456789012"));
        assert_eq!(fields.get("our_number"), Some(&None));
    }
}
