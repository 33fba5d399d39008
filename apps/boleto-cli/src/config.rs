//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BOLETO_DUE_DATE=2020-01-15                                         │
//! │     BOLETO_VALUE_CENTS=10000                                           │
//! │     BOLETO_WALLET=21                                                   │
//! │     BOLETO_RENDER_HEIGHT=6                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH>, else $BOLETO_CONFIG, else ./boleto.toml           │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [boleto]
//! bank = "unicred"
//! agency = "1234"
//! account = "123456"
//! wallet = "21"
//! our_number = "1234567890"
//! value_cents = 10000
//! due_date = "2020-01-15"
//!
//! [render]
//! narrow = 1
//! wide = 3
//! height = 4
//! ```

use std::path::{Path, PathBuf};

use boleto_banks::BoletoRequest;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

const DEFAULT_CONFIG_FILE: &str = "boleto.toml";

/// Largest accepted `render.wide`, in columns.
pub const MAX_RENDER_WIDE: u32 = 16;

/// Largest accepted `render.height`, in rows.
pub const MAX_RENDER_HEIGHT: u32 = 64;

// =============================================================================
// Render Settings
// =============================================================================

/// Terminal barcode geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Columns per narrow element.
    #[serde(default = "default_narrow")]
    pub narrow: u32,

    /// Columns per wide element.
    #[serde(default = "default_wide")]
    pub wide: u32,

    /// Rows of the printed symbol.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_narrow() -> u32 {
    1
}

fn default_wide() -> u32 {
    3
}

fn default_height() -> u32 {
    4
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            narrow: default_narrow(),
            wide: default_wide(),
            height: default_height(),
        }
    }
}

// =============================================================================
// CLI Config
// =============================================================================

/// Root of `boleto.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// The boleto to encode.
    #[serde(default)]
    pub boleto: BoletoRequest,

    #[serde(default)]
    pub render: RenderSettings,
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let explicit = config_path
            .or_else(|| std::env::var("BOLETO_CONFIG").ok().map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading boleto config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.boleto.bank.trim().is_empty() {
            return Err(CliError::InvalidConfig("boleto.bank is required".into()));
        }

        if self.render.narrow == 0 {
            return Err(CliError::InvalidConfig(
                "render.narrow must be at least 1".into(),
            ));
        }

        if self.render.wide <= self.render.narrow {
            return Err(CliError::InvalidConfig(format!(
                "render.wide ({}) must be greater than render.narrow ({})",
                self.render.wide, self.render.narrow
            )));
        }

        if self.render.wide > MAX_RENDER_WIDE {
            return Err(CliError::InvalidConfig(format!(
                "render.wide must be at most {MAX_RENDER_WIDE}"
            )));
        }

        if self.render.height == 0 || self.render.height > MAX_RENDER_HEIGHT {
            return Err(CliError::InvalidConfig(format!(
                "render.height must be between 1 and {MAX_RENDER_HEIGHT}"
            )));
        }

        Ok(())
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Unlike missing variables, unparsable values are errors.
    fn apply_env_overrides<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(date) = lookup("BOLETO_DUE_DATE") {
            let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
                .map_err(|_| CliError::InvalidConfig(format!("BOLETO_DUE_DATE: {date}")))?;
            debug!(due_date = %parsed, "Overriding due date from environment");
            self.boleto.due_date = Some(parsed);
        }

        if let Some(value) = lookup("BOLETO_VALUE_CENTS") {
            self.boleto.value_cents = parse_env("BOLETO_VALUE_CENTS", &value)?;
        }

        if let Some(wallet) = lookup("BOLETO_WALLET") {
            debug!(wallet = %wallet, "Overriding wallet from environment");
            self.boleto.account.wallet = wallet;
        }

        if let Some(height) = lookup("BOLETO_RENDER_HEIGHT") {
            self.render.height = parse_env("BOLETO_RENDER_HEIGHT", &height)?;
        }

        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> CliResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidConfig(format!("{key}: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SAMPLE: &str = r#"
        [boleto]
        bank = "unicred"
        agency = "1234"
        agency_dv = "5"
        account = "123456"
        wallet = "21"
        our_number = "1234567890"
        value_cents = 10000
        due_date = "2020-01-15"

        [render]
        wide = 2
    "#;

    fn sample() -> CliConfig {
        toml::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_parse_sample() {
        let config = sample();
        assert_eq!(config.boleto.bank, "unicred");
        assert_eq!(config.boleto.account.agency_dv.as_deref(), Some("5"));
        assert_eq!(config.boleto.value_cents, 10000);
        assert_eq!(config.render, RenderSettings { narrow: 1, wide: 2, height: 4 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_render_settings() {
        let config: CliConfig = toml::from_str("[boleto]\nbank = \"090\"\nagency = \"1\"\naccount = \"1\"\nwallet = \"11\"\nour_number = \"1\"\n").unwrap();
        assert_eq!(config.render, RenderSettings::default());
        assert_eq!(config.boleto.due_date, None);
    }

    #[test]
    fn test_validation() {
        let mut config = sample();

        config.render.wide = 1;
        assert!(matches!(config.validate(), Err(CliError::InvalidConfig(_))));

        config.render = RenderSettings { height: 0, ..RenderSettings::default() };
        assert!(config.validate().is_err());

        config.render = RenderSettings { narrow: 0, ..RenderSettings::default() };
        assert!(config.validate().is_err());

        assert!(CliConfig::default().validate().is_err());
    }

    #[test]
    fn test_render_size_is_capped() {
        let mut config = sample();

        config.render = RenderSettings { height: MAX_RENDER_HEIGHT, ..RenderSettings::default() };
        assert!(config.validate().is_ok());

        config.render.height = MAX_RENDER_HEIGHT + 1;
        assert!(matches!(config.validate(), Err(CliError::InvalidConfig(_))));

        config.render = RenderSettings { wide: MAX_RENDER_WIDE + 1, ..RenderSettings::default() };
        assert!(matches!(config.validate(), Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn test_huge_height_from_env_is_rejected() {
        let mut config = sample();
        config
            .apply_env_overrides(|key| {
                (key == "BOLETO_RENDER_HEIGHT").then(|| "4000000000".to_string())
            })
            .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env = HashMap::from([
            ("BOLETO_DUE_DATE", "2021-03-01"),
            ("BOLETO_VALUE_CENTS", "2500"),
            ("BOLETO_WALLET", "11"),
            ("BOLETO_RENDER_HEIGHT", "8"),
        ]);

        let mut config = sample();
        config
            .apply_env_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.boleto.due_date, NaiveDate::from_ymd_opt(2021, 3, 1));
        assert_eq!(config.boleto.value_cents, 2500);
        assert_eq!(config.boleto.account.wallet, "11");
        assert_eq!(config.render.height, 8);
    }

    #[test]
    fn test_bad_env_value_is_an_error() {
        let mut config = sample();
        let result = config.apply_env_overrides(|key| {
            (key == "BOLETO_VALUE_CENTS").then(|| "ten reais".to_string())
        });
        assert!(matches!(result, Err(CliError::InvalidConfig(ref msg)) if msg.contains("BOLETO_VALUE_CENTS")));

        let result = config.apply_env_overrides(|key| {
            (key == "BOLETO_DUE_DATE").then(|| "15/01/2020".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = CliConfig::load(Some(PathBuf::from("/nonexistent/boleto.toml")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
