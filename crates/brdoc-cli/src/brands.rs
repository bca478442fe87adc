//! # Brands: list the card brand table.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use brdoc_core::card::BRANDS;
use brdoc_core::BrandInfo;

use crate::config::{CliConfig, OutputFormat};
use crate::resolve_output;

/// Brands subcommand arguments.
#[derive(Args, Debug)]
pub struct BrandsArgs {
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the brands subcommand.
pub fn run_brands(args: &BrandsArgs, config: &CliConfig) -> Result<u8> {
    let stdout = std::io::stdout();
    render(&BRANDS, resolve_output(args.json, config), &mut stdout.lock())?;
    Ok(0)
}

/// Write the brand table.
pub fn render<W: Write>(brands: &[BrandInfo], output: OutputFormat, out: &mut W) -> Result<()> {
    match output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, brands).context("serializing brands")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for b in brands {
                writeln!(
                    out,
                    "{:<12} {:<18} prefix {:<3} length {}",
                    b.brand.as_str(),
                    b.name,
                    b.prefix,
                    b.length
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lists_every_brand() {
        let mut buf = Vec::new();
        render(&BRANDS, OutputFormat::Text, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("American Express"));
        assert!(text.lines().next().unwrap().starts_with("visa"));
    }

    #[test]
    fn json_has_prefix_and_length() {
        let mut buf = Vec::new();
        render(&BRANDS, OutputFormat::Json, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[2]["brand"], "american_express");
        assert_eq!(value[2]["prefix"], "34");
        assert_eq!(value[2]["length"], 15);
    }
}
