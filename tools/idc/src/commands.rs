//! CLI commands.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, warn};
use waypost_id::{define_id, Codec, HexCase, ParseFailure, Uuid, UuidLiteral, Wrap};

use crate::config::Config;

define_id!(IntegerId, IntegerTag, i64);
define_id!(UuidId, UuidTag, Uuid);

/// idc - parse, normalize and mint identifier tokens.
#[derive(Debug, Parser)]
#[command(name = "idc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level, overriding WAYPOST_LOG_LEVEL.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse one token and print its canonical form.
    Parse(ParseCommand),

    /// Mint a fresh UUID-backed identifier.
    New(NewCommand),

    /// Report how each token round-trips.
    Check(CheckCommand),
}

#[derive(Debug, Args)]
struct ParseCommand {
    /// The token to parse.
    token: String,

    /// Which grammar the token uses.
    #[arg(long, value_enum)]
    kind: Kind,

    /// Reject uppercase hex digits in UUID tokens.
    #[arg(long)]
    strict_case: bool,
}

#[derive(Debug, Args)]
struct NewCommand {
    /// Use a time-ordered (v7) UUID instead of a random one.
    #[arg(long)]
    v7: bool,
}

#[derive(Debug, Args)]
struct CheckCommand {
    /// Tokens to check. The grammar is detected per token.
    #[arg(required = true)]
    tokens: Vec<String>,

    /// Reject uppercase hex digits in UUID tokens.
    #[arg(long)]
    strict_case: bool,
}

/// Token grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Int,
    Uuid,
}

impl Kind {
    /// Guesses the grammar of a token: UUID-shaped tokens are 36 bytes with
    /// a hyphen after the first group, everything else is an integer.
    pub fn detect(token: &str) -> Self {
        if token.len() == 36 && token.as_bytes().get(8) == Some(&b'-') {
            Kind::Uuid
        } else {
            Kind::Int
        }
    }
}

/// The result of parsing one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The token was already canonical.
    Exact { token: String, kind: Kind },
    /// The token parsed but prints differently.
    Normalized {
        token: String,
        kind: Kind,
        canonical: String,
    },
    /// The token did not parse.
    Rejected {
        token: String,
        kind: Kind,
        position: usize,
        error: String,
    },
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }

    /// The canonical token, if the input parsed.
    pub fn canonical(&self) -> Option<&str> {
        match self {
            Outcome::Exact { token, .. } => Some(token),
            Outcome::Normalized { canonical, .. } => Some(canonical),
            Outcome::Rejected { .. } => None,
        }
    }

    fn render_text(&self) -> String {
        match self {
            Outcome::Exact { token, .. } => format!("ok          {token}"),
            Outcome::Normalized {
                token, canonical, ..
            } => format!("normalized  {token} -> {canonical}"),
            Outcome::Rejected {
                token,
                position,
                error,
                ..
            } => {
                // position counts bytes; the caret needs a column
                let column = token
                    .get(..*position)
                    .map_or(*position, |prefix| prefix.chars().count());
                let caret = " ".repeat(column);
                format!("rejected    {token}\n            {caret}^ {error}")
            }
        }
    }
}

/// Parses `token` with `codec` and compares the printed form to the input.
fn inspect<C: Codec>(codec: &C, token: &str, kind: Kind) -> Outcome {
    debug!(token, ?kind, "parsing token");

    match codec.parse_complete(token) {
        Ok(value) => {
            let canonical = codec.print_to_string(&value);
            if canonical == token {
                Outcome::Exact {
                    token: token.to_string(),
                    kind,
                }
            } else {
                info!(token, canonical = %canonical, "token normalized");
                Outcome::Normalized {
                    token: token.to_string(),
                    kind,
                    canonical,
                }
            }
        }
        Err(err) => rejected(token, kind, err),
    }
}

fn rejected(token: &str, kind: Kind, err: ParseFailure) -> Outcome {
    warn!(token, position = err.position(), error = %err, "token rejected");
    Outcome::Rejected {
        token: token.to_string(),
        kind,
        position: err.position(),
        error: err.to_string(),
    }
}

/// Parses a token of a known grammar.
pub fn inspect_token(token: &str, kind: Kind, case: HexCase) -> Outcome {
    match kind {
        Kind::Int => inspect(&IntegerId::codec(), token, kind),
        Kind::Uuid => {
            let codec = UuidLiteral::new(case).map(Wrap::<UuidTag, Uuid>::new());
            inspect(&codec, token, kind)
        }
    }
}

fn case_policy(strict_case: bool, config: &Config) -> HexCase {
    if strict_case {
        HexCase::Lowercase
    } else {
        config.uuid_case
    }
}

fn write_outcomes(out: &mut dyn Write, format: OutputFormat, outcomes: &[Outcome]) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for outcome in outcomes {
                writeln!(out, "{}", outcome.render_text())?;
            }
        }
        OutputFormat::Json => {
            let json = if let [single] = outcomes {
                serde_json::to_string_pretty(single)?
            } else {
                serde_json::to_string_pretty(outcomes)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

impl Cli {
    /// Settings that override the environment.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.log_level.clone_from(level);
        }
    }

    /// Run the selected command, writing results to `out`.
    ///
    /// Returns false if any token was rejected.
    pub fn run(&self, config: &Config, out: &mut dyn Write) -> Result<bool> {
        match &self.command {
            Commands::Parse(cmd) => {
                let case = case_policy(cmd.strict_case, config);
                let outcome = inspect_token(&cmd.token, cmd.kind, case);
                match (self.format, outcome.canonical()) {
                    (OutputFormat::Text, Some(canonical)) => writeln!(out, "{canonical}")?,
                    _ => write_outcomes(out, self.format, std::slice::from_ref(&outcome))?,
                }
                Ok(!outcome.is_rejected())
            }
            Commands::New(cmd) => {
                let id = if cmd.v7 {
                    UuidId::new_v7()
                } else {
                    UuidId::new_v4()
                };
                info!(id = %id, v7 = cmd.v7, "minted identifier");
                match self.format {
                    OutputFormat::Text => writeln!(out, "{id}")?,
                    OutputFormat::Json => writeln!(
                        out,
                        "{}",
                        serde_json::to_string(&serde_json::json!({ "id": id }))
                            .context("failed to encode identifier")?
                    )?,
                }
                Ok(true)
            }
            Commands::Check(cmd) => {
                let case = case_policy(cmd.strict_case, config);
                let outcomes: Vec<Outcome> = cmd
                    .tokens
                    .iter()
                    .map(|token| inspect_token(token, Kind::detect(token), case))
                    .collect();
                write_outcomes(out, self.format, &outcomes)?;
                Ok(!outcomes.iter().any(Outcome::is_rejected))
            }
        }
    }
}
