//! Payee account details a bank lays into its free field.

use serde::{Deserialize, Serialize};

/// The payee's account at the issuing bank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BankAccount {
    /// Agency ("agência") number.
    pub agency: String,

    /// Agency check digit, when the bank prints one.
    #[serde(default)]
    pub agency_dv: Option<String>,

    /// Account number.
    pub account: String,

    /// Account check digit, when the bank prints one.
    #[serde(default)]
    pub account_dv: Option<String>,

    /// Wallet ("carteira"): registered or unregistered collection mode.
    pub wallet: String,

    /// Bank-side identifier of this boleto ("nosso número").
    pub our_number: String,
}

impl BankAccount {
    /// Renders the "Agência / Código do Cedente" box, e.g. `1234-5 / 123456-7`.
    pub fn agency_and_account(&self) -> String {
        format!(
            "{} / {}",
            with_dv(&self.agency, self.agency_dv.as_deref()),
            with_dv(&self.account, self.account_dv.as_deref())
        )
    }
}

fn with_dv(number: &str, dv: Option<&str>) -> String {
    match dv.filter(|dv| !dv.is_empty()) {
        Some(dv) => format!("{number}-{dv}"),
        None => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> BankAccount {
        BankAccount {
            agency: "1234".to_string(),
            agency_dv: Some("5".to_string()),
            account: "123456".to_string(),
            account_dv: Some("7".to_string()),
            wallet: "21".to_string(),
            our_number: "1234567890".to_string(),
        }
    }

    #[test]
    fn test_agency_and_account() {
        assert_eq!(account().agency_and_account(), "1234-5 / 123456-7");
    }

    #[test]
    fn test_agency_and_account_without_dv() {
        let account = BankAccount {
            agency_dv: None,
            account_dv: Some(String::new()),
            ..account()
        };
        assert_eq!(account.agency_and_account(), "1234 / 123456");
    }
}
