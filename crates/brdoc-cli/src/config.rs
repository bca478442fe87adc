//! CLI configuration.
//!
//! Defaults that command-line flags override. Loaded from environment
//! variables so scripts can fix output shape once instead of repeating
//! flags on every call.

use std::str::FromStr;

/// Output rendering for every subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per value, tab-separated fields.
    #[default]
    Text,
    /// A single JSON array on stdout.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                var: "BRDOC_OUTPUT".into(),
                value: s.to_string(),
            }),
        }
    }
}

/// Resolved CLI defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Output rendering.
    pub output: OutputFormat,
    /// Print generated values in punctuated form.
    pub formatted: bool,
    /// Seed for reproducible generation. `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `BRDOC_OUTPUT`: `text` or `json` (default: `text`)
    /// - `BRDOC_FORMATTED`: `1/0`, `true/false`, `yes/no` (default: false)
    /// - `BRDOC_SEED`: unsigned 64-bit seed (default: unset)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = match lookup("BRDOC_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };
        let formatted = match lookup("BRDOC_FORMATTED") {
            Some(raw) => parse_bool("BRDOC_FORMATTED", &raw)?,
            None => false,
        };
        let seed = match lookup("BRDOC_SEED") {
            Some(raw) => Some(raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "BRDOC_SEED".into(),
                value: raw.clone(),
            })?),
            None => None,
        };
        Ok(Self {
            output,
            formatted,
            seed,
        })
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value its parser rejects.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue {
        /// Name of the offending variable.
        var: String,
        /// The rejected value, verbatim.
        value: String,
    },
}
