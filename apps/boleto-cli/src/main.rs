//! # boleto
//!
//! Prints the FEBRABAN code, digitable line and barcode of a boleto, or
//! decodes a typed digitable line.
//!
//! ## Usage
//! ```bash
//! # Encode the boleto described in ./boleto.toml
//! cargo run -p boleto-cli --bin boleto
//!
//! # Explicit config, JSON output
//! cargo run -p boleto-cli --bin boleto -- --config ./slip.toml --json
//!
//! # Decode a typed line
//! cargo run -p boleto-cli --bin boleto -- --decode "09090.00002 00000.000000 00000.000109 9 00010000010000"
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); stdout carries only output.

mod config;
mod error;
mod render;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use boleto_banks::{Boleto, ON_PRESENTATION_LABEL};
use boleto_core::{DigitableLine, DueDate, DueDateFactor, FebrabanCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

const USAGE: &str = "\
Usage:
  boleto [--config <PATH>] [--json]
  boleto --decode <LINE>

Options:
  -c, --config <PATH>   boleto description (default: $BOLETO_CONFIG or ./boleto.toml)
      --json            print the summary as JSON
  -d, --decode <LINE>   verify a typed digitable line and print its fields
  -h, --help            show this message";

/// What the user asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Encode { config: Option<PathBuf>, json: bool },
    Decode { line: String },
    Help,
}

fn parse_args(args: &[String]) -> CliResult<Command> {
    let mut config = None;
    let mut json = false;
    let mut decode = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| CliError::InvalidArgument("--config needs a path".into()))?;
                config = Some(PathBuf::from(path));
                i += 1;
            }
            "--decode" | "-d" => {
                let line = args
                    .get(i + 1)
                    .ok_or_else(|| CliError::InvalidArgument("--decode needs a line".into()))?;
                decode = Some(line.clone());
                i += 1;
            }
            "--json" => json = true,
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(CliError::InvalidArgument(format!("unknown option: {other}"))),
        }
        i += 1;
    }

    Ok(match decode {
        Some(line) => Command::Decode { line },
        None => Command::Encode { config, json },
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    match parse_args(&args).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "boleto failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> CliResult<()> {
    match command {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::Encode { config, json } => encode(config, json),
        Command::Decode { line } => decode(&line),
    }
}

fn encode(config_path: Option<PathBuf>, json: bool) -> CliResult<()> {
    let config = CliConfig::load(config_path)?;
    let boleto = Boleto::from_request(&config.boleto)?;
    let summary = boleto.summary()?;

    info!(bank = %summary.bank_code, "Boleto encoded");

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}  {}", summary.bank_name, summary.bank_code);
    println!("{:<18}{}", "FEBRABAN code:", summary.febraban_code);
    println!("{:<18}{}", "Digitable line:", summary.digitable_line);
    println!();
    for (name, value) in &summary.display_fields {
        println!("{:<20}{}", name, value.as_deref().unwrap_or(""));
    }
    println!();
    println!("{}", render::render_barcode(&summary.barcode, &config.render));

    Ok(())
}

fn decode(line: &str) -> CliResult<()> {
    let line: DigitableLine = line.parse()?;
    let code: FebrabanCode = line.to_febraban_code()?;
    let due_date = DueDateFactor::from_field(code.due_date_factor())?.due_date();

    info!(bank = code.bank_code(), "Digitable line verified");

    println!("{:<18}{}", "Digitable line:", line);
    println!("{:<18}{}", "FEBRABAN code:", code);
    println!("{:<18}{}", "Bank code:", code.bank_code());
    println!("{:<18}{}", "Currency code:", code.currency_code());
    println!("{:<18}{}", "Check digit:", code.check_digit());
    println!("{:<18}{}", "Due date factor:", code.due_date_factor());
    match due_date {
        DueDate::Fixed(date) => println!("{:<18}{}", "Due date:", date.format("%d/%m/%Y")),
        DueDate::OnPresentation => println!("{:<18}{}", "Due date:", ON_PRESENTATION_LABEL),
    }
    println!("{:<18}{}", "Value field:", code.value_field());
    println!("{:<18}{}", "Free field:", code.free_field());

    Ok(())
}
