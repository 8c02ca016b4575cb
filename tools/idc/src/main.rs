//! idc - identifier token inspector
//!
//! Parses identifier tokens the same way services do, prints their
//! canonical form, and mints new UUID-backed identifiers.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod logging;

use commands::Cli;
use config::Config;

fn run(cli: &Cli) -> Result<bool> {
    let mut config = Config::from_env()?;
    cli.apply_overrides(&mut config);
    logging::init(&config);

    tracing::debug!(
        log_level = %config.log_level,
        uuid_case = ?config.uuid_case,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    cli.run(&config, &mut stdout.lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
