//! # brdoc-cli: Command-Line Surface for brdoc
//!
//! Provides the `brdoc` command over `brdoc-core`.
//!
//! ## Subcommands
//!
//! - `brdoc generate`: synthetic CPF/CNPJ/CNH/RENAVAM/card numbers.
//! - `brdoc validate`: classify user-supplied numbers.
//! - `brdoc brands`: the card brand table.
//!
//! ```bash
//! brdoc generate cpf --count 3 --formatted
//! brdoc validate cnpj 11.222.333/0001-81
//! BRDOC_OUTPUT=json brdoc validate card 4532015112830366
//! ```
//!
//! Results go to stdout; logs go to stderr.

pub mod brands;
pub mod config;
pub mod generate;
pub mod validate;

use config::{CliConfig, OutputFormat};

/// `--json` forces JSON; otherwise the configured default applies.
pub fn resolve_output(json_flag: bool, config: &CliConfig) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        config.output
    }
}
