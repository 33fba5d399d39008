//! # Boleto Aggregate
//!
//! Binds a bank, a payee account, a value and a due date, and drives the
//! core engine to produce the code, line and barcode.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BoletoRequest (TOML / JSON)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Boleto::from_request ← find bank, check wallet, resolve due date       │
//! │       │                                                                 │
//! │       ├──► febraban_code()   ── bank.free_field() + assemble_with      │
//! │       ├──► digitable_line()                                            │
//! │       ├──► barcode()                                                   │
//! │       └──► display_fields()  ── defaults, then bank overrides          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is cached: every accessor recomputes from the boleto's fields.

use boleto_core::{
    assemble_with, bank_code_with_check_digit, encode_barcode, format_digitable_line, BankCode,
    BarWidths, CurrencyCode, DigitableLine, DueDate, FebrabanCode, Money, ValidationError,
    ValueField,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::account::BankAccount;
use crate::bank::{find_bank, Bank, DisplayFields};
use crate::error::BankResult;

/// Printed in the due-date box of slips without a due date.
pub const ON_PRESENTATION_LABEL: &str = "Contra Apresentação";

// =============================================================================
// Boleto Request
// =============================================================================

/// A boleto description as read from configuration or an API payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoletoRequest {
    /// Bank name ("unicred") or 3-digit code ("090").
    pub bank: String,

    #[serde(flatten)]
    pub account: BankAccount,

    /// Amount in centavos. Ignored for on-presentation slips.
    #[serde(default)]
    pub value_cents: i64,

    /// Calendar due date, `YYYY-MM-DD`.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    /// Payable on presentation, without a due date.
    #[serde(default)]
    pub on_presentation: bool,

    /// Minimum payment in centavos; implies `on_presentation`.
    #[serde(default)]
    pub minimum_payment_cents: Option<i64>,
}

// =============================================================================
// Boleto
// =============================================================================

/// A boleto ready to be encoded.
#[derive(Debug, Clone)]
pub struct Boleto {
    bank: &'static dyn Bank,
    account: BankAccount,
    currency: CurrencyCode,
    value: Money,
    due_date: DueDate,
    minimum_payment: Option<Money>,
}

impl Boleto {
    /// Creates a boleto, rejecting wallets the bank does not offer.
    pub fn new(
        bank: &'static dyn Bank,
        account: BankAccount,
        value: Money,
        due_date: DueDate,
    ) -> BankResult<Self> {
        bank.validate_wallet(&account.wallet)?;

        debug!(
            bank = bank.code(),
            wallet = %account.wallet,
            value = value.cents(),
            ?due_date,
            "Creating boleto"
        );

        Ok(Boleto {
            bank,
            account,
            currency: CurrencyCode::REAL,
            value,
            due_date,
            minimum_payment: None,
        })
    }

    /// Builds a boleto from a request.
    ///
    /// ## Errors
    /// - `UnknownBank` when `bank` matches no registered bank
    /// - `UnsupportedWallet` when the wallet is not offered
    /// - `MissingRequiredField("due_date")` for a fixed-date slip without a date
    pub fn from_request(request: &BoletoRequest) -> BankResult<Self> {
        let bank = find_bank(&request.bank)?;

        let on_presentation = request.on_presentation || request.minimum_payment_cents.is_some();
        let due_date = if on_presentation {
            DueDate::OnPresentation
        } else {
            let date = request.due_date.ok_or_else(|| ValidationError::MissingRequiredField {
                field: "due_date".to_string(),
            })?;
            DueDate::Fixed(date)
        };

        let mut boleto = Boleto::new(
            bank,
            request.account.clone(),
            Money::from_cents(request.value_cents),
            due_date,
        )?;

        if let Some(cents) = request.minimum_payment_cents {
            boleto = boleto.with_minimum_payment(Money::from_cents(cents));
        }

        Ok(boleto)
    }

    /// Sets a minimum payment. The slip becomes payable on presentation.
    pub fn with_minimum_payment(mut self, minimum: Money) -> Self {
        self.minimum_payment = Some(minimum);
        self.due_date = DueDate::OnPresentation;
        self
    }

    pub fn bank(&self) -> &'static dyn Bank {
        self.bank
    }

    pub fn account(&self) -> &BankAccount {
        &self.account
    }

    pub fn due_date(&self) -> DueDate {
        self.due_date
    }

    pub fn minimum_payment(&self) -> Option<Money> {
        self.minimum_payment
    }

    /// The amount encoded in the code: zero for on-presentation slips.
    pub fn value(&self) -> Money {
        match self.due_date {
            DueDate::OnPresentation => Money::zero(),
            DueDate::Fixed(_) => self.value,
        }
    }

    fn bank_code(&self) -> BankResult<BankCode> {
        Ok(BankCode::new(self.bank.code())?)
    }

    fn value_field(&self) -> BankResult<ValueField> {
        Ok(self.value().value_field()?)
    }

    /// Assembles the 44-digit code.
    pub fn febraban_code(&self) -> BankResult<FebrabanCode> {
        let factor = self.due_date.factor()?;
        let code = assemble_with(
            &self.bank_code()?,
            self.currency,
            factor,
            self.value_field()?,
            &|| self.bank.free_field(&self.account),
        )?;

        debug!(bank = self.bank.code(), factor = %factor, code = %code, "Assembled FEBRABAN code");
        Ok(code)
    }

    pub fn digitable_line(&self) -> BankResult<DigitableLine> {
        Ok(format_digitable_line(&self.febraban_code()?))
    }

    pub fn barcode(&self) -> BankResult<BarWidths> {
        Ok(encode_barcode(&self.febraban_code()?))
    }

    /// Bank code with its check digit, e.g. `090-6`.
    pub fn bank_code_with_check_digit(&self) -> BankResult<String> {
        Ok(bank_code_with_check_digit(&self.bank_code()?))
    }

    /// Wallet as printed on the slip.
    pub fn wallet_name(&self) -> String {
        self.bank.wallet_display(&self.account.wallet)
    }

    /// Template fields: common defaults overridden by the bank's own.
    pub fn display_fields(&self) -> DisplayFields {
        let due_date = match self.due_date {
            DueDate::Fixed(date) => date.format("%d/%m/%Y").to_string(),
            DueDate::OnPresentation => ON_PRESENTATION_LABEL.to_string(),
        };

        let mut fields = DisplayFields::from([
            ("agency_and_account".to_string(), Some(self.account.agency_and_account())),
            ("due_date".to_string(), Some(due_date)),
            ("logo".to_string(), Some(self.bank.logo().to_string())),
            ("our_number".to_string(), Some(self.account.our_number.clone())),
            ("species".to_string(), self.currency.species().map(str::to_string)),
            ("wallet".to_string(), Some(self.wallet_name())),
        ]);

        fields.extend(self.bank.display_fields(&self.account));
        fields
    }

    /// Everything a renderer needs, in one serializable value.
    pub fn summary(&self) -> BankResult<BoletoSummary> {
        let code = self.febraban_code()?;

        Ok(BoletoSummary {
            bank_name: self.bank.name().to_string(),
            bank_code: self.bank_code_with_check_digit()?,
            digitable_line: format_digitable_line(&code),
            barcode: encode_barcode(&code),
            due_date_factor: code.due_date_factor().to_string(),
            value_cents: self.value().cents(),
            minimum_payment_cents: self.minimum_payment.map(|m| m.cents()),
            display_fields: self.display_fields(),
            febraban_code: code,
        })
    }
}

/// Serializable output of a [`Boleto`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoletoSummary {
    pub bank_name: String,
    pub bank_code: String,
    pub febraban_code: FebrabanCode,
    pub digitable_line: DigitableLine,
    pub due_date_factor: String,
    pub value_cents: i64,
    pub minimum_payment_cents: Option<i64>,
    pub display_fields: DisplayFields,
    pub barcode: BarWidths,
}

// =============================================================================
// Unit Tests
// =============================================================================
