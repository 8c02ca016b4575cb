//! idc configuration.
//!
//! Everything is env-driven; command-line flags override what is read here.

use anyhow::{bail, Result};
use waypost_id::HexCase;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Compact,
    /// One JSON object per record.
    Json,
}

/// idc configuration (env-driven).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log record format.
    pub log_format: LogFormat,

    /// Whether UUID tokens may use uppercase hex digits.
    pub uuid_case: HexCase,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::default(),
            uuid_case: HexCase::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_level = lookup("WAYPOST_LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match lookup("WAYPOST_LOG_FORMAT").as_deref() {
            None | Some("compact") => LogFormat::Compact,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("WAYPOST_LOG_FORMAT must be 'compact' or 'json', got '{other}'."),
        };

        let uuid_case = match lookup("WAYPOST_UUID_CASE").map(|v| v.to_lowercase()).as_deref() {
            None | Some("lenient") => HexCase::Lenient,
            Some("lowercase") => HexCase::Lowercase,
            Some(other) => {
                bail!("WAYPOST_UUID_CASE must be 'lenient' or 'lowercase', got '{other}'.")
            }
        };

        Ok(Self {
            log_level,
            log_format,
            uuid_case,
        })
    }
}
