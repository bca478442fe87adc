//! # Generate: synthetic document numbers.
//!
//! ```bash
//! brdoc generate cpf
//! brdoc generate cnpj --count 5 --formatted --branch random
//! brdoc generate card --brand amex --seed 7 --json
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use brdoc_core::{
    seeded_digits, thread_digits, CardBrand, CnpjBranch, DigitSource, DocumentKind,
    GeneratedDocument, GenerationOptions,
};

use crate::config::{CliConfig, OutputFormat};
use crate::resolve_output;

/// Generate subcommand arguments.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Document kind: cpf, cnpj, cnh, renavam, or card.
    pub kind: DocumentKind,

    /// How many values to generate.
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,

    /// Print the punctuated form (e.g. 111.444.777-35).
    #[arg(short, long)]
    pub formatted: bool,

    /// Card brand: visa, mastercard, amex, or diners (cards only).
    #[arg(long)]
    pub brand: Option<CardBrand>,

    /// CNPJ branch suffix: headquarters (0001) or random (CNPJ only).
    #[arg(long)]
    pub branch: Option<CnpjBranch>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit a JSON array instead of one value per line.
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    fn options(&self) -> GenerationOptions {
        GenerationOptions {
            brand: self.brand.unwrap_or_default(),
            branch: self.branch.unwrap_or_default(),
        }
    }
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, config: &CliConfig) -> Result<u8> {
    if args.brand.is_some() && args.kind != DocumentKind::Card {
        tracing::warn!(kind = %args.kind, "--brand only applies to cards; ignoring");
    }
    if args.branch.is_some() && args.kind != DocumentKind::Cnpj {
        tracing::warn!(kind = %args.kind, "--branch only applies to CNPJ; ignoring");
    }

    let options = args.options();
    let seed = args.seed.or(config.seed);
    tracing::info!(kind = %args.kind, count = args.count, ?seed, "generating");

    let docs = match seed {
        Some(seed) => generate_many(args.kind, &options, args.count, &mut seeded_digits(seed)),
        None => generate_many(args.kind, &options, args.count, &mut thread_digits()),
    };

    let output = resolve_output(args.json, config);
    let formatted = args.formatted || config.formatted;
    let stdout = std::io::stdout();
    render(&docs, output, formatted, &mut stdout.lock())?;
    Ok(0)
}

/// Generate `count` values from one digit source.
pub fn generate_many<S: DigitSource + ?Sized>(
    kind: DocumentKind,
    options: &GenerationOptions,
    count: u32,
    source: &mut S,
) -> Vec<GeneratedDocument> {
    (0..count)
        .map(|_| kind.generate_with(options, source))
        .collect()
}

/// Write generated values in the requested format.
pub fn render<W: Write>(
    docs: &[GeneratedDocument],
    output: OutputFormat,
    formatted: bool,
    out: &mut W,
) -> Result<()> {
    match output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, docs).context("serializing generated values")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for doc in docs {
                if formatted {
                    writeln!(out, "{}", doc.formatted)?;
                } else {
                    writeln!(out, "{}", doc.digits)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use brdoc_core::ScriptedDigits;

    fn render_to_string(
        docs: &[GeneratedDocument],
        output: OutputFormat,
        formatted: bool,
    ) -> String {
        let mut buf = Vec::new();
        render(docs, output, formatted, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn generate_many_uses_one_stream() {
        let mut src = ScriptedDigits::from_str_digits("111444777");
        let docs = generate_many(DocumentKind::Cpf, &GenerationOptions::default(), 3, &mut src);
        assert_eq!(docs.len(), 3);
        assert!(docs.iter().all(|d| d.digits.to_string() == "11144477735"));
        assert_eq!(src.drawn(), 27);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let options = GenerationOptions::default();
        let a = generate_many(DocumentKind::Cnpj, &options, 5, &mut seeded_digits(9));
        let b = generate_many(DocumentKind::Cnpj, &options, 5, &mut seeded_digits(9));
        assert_eq!(a, b);
    }

    #[test]
    fn text_output_bare_and_formatted() {
        let mut src = ScriptedDigits::from_str_digits("111444777");
        let docs = generate_many(DocumentKind::Cpf, &GenerationOptions::default(), 2, &mut src);
        assert_eq!(
            render_to_string(&docs, OutputFormat::Text, false),
            "11144477735\n11144477735\n"
        );
        assert_eq!(
            render_to_string(&docs, OutputFormat::Text, true),
            "111.444.777-35\n111.444.777-35\n"
        );
    }

    #[test]
    fn json_output_is_an_array() {
        let mut src = ScriptedDigits::from_str_digits("11222333");
        let docs = generate_many(DocumentKind::Cnpj, &GenerationOptions::default(), 1, &mut src);
        let text = render_to_string(&docs, OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["kind"], "cnpj");
        assert_eq!(value[0]["digits"], "11222333000181");
        assert_eq!(value[0]["formatted"], "11.222.333/0001-81");
    }

    #[test]
    fn options_default_when_flags_absent() {
        let args = GenerateArgs {
            kind: DocumentKind::Card,
            count: 1,
            formatted: false,
            brand: None,
            branch: None,
            seed: None,
            json: false,
        };
        assert_eq!(args.options(), GenerationOptions::default());
    }
}
