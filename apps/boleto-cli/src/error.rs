//! CLI error types.

use boleto_banks::BankError;
use boleto_core::BoletoError;
use thiserror::Error;

/// Everything that can stop the `boleto` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Bank(#[from] BankError),

    #[error(transparent)]
    Boleto(#[from] BoletoError),
}

pub type CliResult<T> = Result<T, CliError>;
