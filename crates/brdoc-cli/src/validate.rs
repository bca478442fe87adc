//! # Validate: classify user-supplied numbers.
//!
//! ```bash
//! brdoc validate cpf 111.444.777-35 111.444.777-36
//! brdoc validate card 4532015112830366 --json
//! cat numbers.txt | brdoc validate cnpj -
//! ```
//!
//! Exit status is `0` when every input is valid and `2` otherwise.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use brdoc_core::{card, CardBrand, DocumentKind, ValidationOutcome};

use crate::config::{CliConfig, OutputFormat};
use crate::resolve_output;

/// Exit status when at least one input is rejected.
pub const EXIT_REJECTED: u8 = 2;

/// Validate subcommand arguments.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document kind: cpf, cnpj, cnh, renavam, or card.
    pub kind: DocumentKind,

    /// Values to check. A single `-` reads one value per line from stdin.
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Emit a JSON array instead of one line per value.
    #[arg(long)]
    pub json: bool,
}

/// Classification of a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The input as supplied.
    pub input: String,
    /// Document kind it was checked as.
    pub kind: DocumentKind,
    /// Classification.
    pub outcome: ValidationOutcome,
    /// Boolean view of `outcome`.
    pub valid: bool,
    /// Card issuer, cards only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<CardBrand>,
}

/// Classify one input as `kind`.
pub fn check(kind: DocumentKind, input: &str) -> Report {
    let (outcome, brand) = match kind {
        DocumentKind::Card => {
            let report = card::validate(input);
            (report.outcome, report.brand)
        }
        other => (other.validate(input), None),
    };
    Report {
        input: input.to_string(),
        kind,
        outcome,
        valid: outcome.is_valid(),
        brand,
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let inputs = if args.inputs.len() == 1 && args.inputs[0] == "-" {
        let stdin = std::io::stdin();
        read_inputs(stdin.lock()).context("reading inputs from stdin")?
    } else {
        args.inputs.clone()
    };

    let reports: Vec<Report> = inputs.iter().map(|i| check(args.kind, i)).collect();
    let rejected = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(kind = %args.kind, total = reports.len(), rejected, "validated");

    let stdout = std::io::stdout();
    render(&reports, resolve_output(args.json, config), &mut stdout.lock())?;

    Ok(if rejected == 0 { 0 } else { EXIT_REJECTED })
}

/// Non-empty trimmed lines.
pub fn read_inputs<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}

/// Write reports in the requested format.
pub fn render<W: Write>(reports: &[Report], output: OutputFormat, out: &mut W) -> Result<()> {
    match output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports).context("serializing reports")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for r in reports {
                match (r.kind, r.brand) {
                    (DocumentKind::Card, Some(brand)) => {
                        writeln!(out, "{}\t{}\t{}", r.input, r.outcome, brand.as_str())?
                    }
                    (DocumentKind::Card, None) => {
                        writeln!(out, "{}\t{}\tunknown", r.input, r.outcome)?
                    }
                    _ => writeln!(out, "{}\t{}", r.input, r.outcome)?,
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(reports: &[Report], output: OutputFormat) -> String {
        let mut buf = Vec::new();
        render(reports, output, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn check_cpf() {
        let r = check(DocumentKind::Cpf, "111.444.777-35");
        assert!(r.valid);
        assert_eq!(r.outcome, ValidationOutcome::Valid);
        assert_eq!(r.brand, None);
    }

    #[test]
    fn check_card_reports_brand_on_failure() {
        let r = check(DocumentKind::Card, "4532015112830367");
        assert!(!r.valid);
        assert_eq!(r.outcome, ValidationOutcome::InvalidChecksum);
        assert_eq!(r.brand, Some(CardBrand::Visa));
    }

    #[test]
    fn text_rendering() {
        let reports = vec![
            check(DocumentKind::Cpf, "111.444.777-35"),
            check(DocumentKind::Cpf, "111.444.777-36"),
        ];
        assert_eq!(
            render_to_string(&reports, OutputFormat::Text),
            "111.444.777-35\tvalid\n111.444.777-36\tinvalid_checksum\n"
        );
    }

    #[test]
    fn text_rendering_cards() {
        let reports = vec![
            check(DocumentKind::Card, "4532015112830366"),
            check(DocumentKind::Card, "6011111111111117"),
        ];
        assert_eq!(
            render_to_string(&reports, OutputFormat::Text),
            "4532015112830366\tvalid\tvisa\n6011111111111117\tvalid\tunknown\n"
        );
    }

    #[test]
    fn json_rendering_omits_brand_for_documents() {
        let reports = vec![check(DocumentKind::Cnpj, "11.222.333/0001-81")];
        let value: serde_json::Value =
            serde_json::from_str(&render_to_string(&reports, OutputFormat::Json)).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "input": "11.222.333/0001-81",
                "kind": "cnpj",
                "outcome": "valid",
                "valid": true,
            }])
        );
    }

    #[test]
    fn read_inputs_skips_blank_lines() {
        let data = "111.444.777-35\n\n  11144477736  \n";
        let inputs = read_inputs(data.as_bytes()).unwrap();
        assert_eq!(inputs, vec!["111.444.777-35", "11144477736"]);
    }
}
