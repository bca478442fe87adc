//! # brdoc CLI entry point
//!
//! Parses command-line arguments, loads environment defaults, and
//! dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brdoc_cli::brands::{run_brands, BrandsArgs};
use brdoc_cli::config::CliConfig;
use brdoc_cli::generate::{run_generate, GenerateArgs};
use brdoc_cli::validate::{run_validate, ValidateArgs};

/// brdoc: generate and validate Brazilian document and card numbers.
///
/// CPF, CNPJ, CNH and RENAVAM check digits, Luhn card numbers, and card
/// brand detection.
#[derive(Parser, Debug)]
#[command(name = "brdoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate structurally valid numbers.
    Generate(GenerateArgs),

    /// Classify numbers as valid, malformed, degenerate, or bad checksum.
    Validate(ValidateArgs),

    /// List supported card brands.
    Brands(BrandsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("brdoc CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(?config, "loaded configuration");

    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args, &config),
        Commands::Validate(args) => run_validate(&args, &config),
        Commands::Brands(args) => run_brands(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
