//! # Error Types
//!
//! Errors produced by validating constructors and by name parsing. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - [`ValidationError`] variants map one-to-one onto the non-`Valid`
//!   [`ValidationOutcome`] variants, in the order they are checked:
//!   format → length → degenerate → checksum.
//! - Errors carry the [`DocumentKind`] they were raised for so a single
//!   message is meaningful without surrounding context.

use thiserror::Error;

use crate::document::DocumentKind;
use crate::validation::ValidationOutcome;

/// Rejection reason for a document or card number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input contains characters outside the digits and the document's
    /// separators, or its punctuation does not follow the document mask.
    #[error("{kind}: invalid format {input:?}")]
    InvalidFormat {
        /// Document being validated.
        kind: DocumentKind,
        /// The raw input as supplied.
        input: String,
    },

    /// Input is well-formed but has the wrong number of digits.
    #[error("{kind}: expected {} digits, found {actual}", expected_digits(.min, .max))]
    InvalidLength {
        /// Document being validated.
        kind: DocumentKind,
        /// Smallest accepted digit count.
        min: usize,
        /// Largest accepted digit count.
        max: usize,
        /// Digit count actually found.
        actual: usize,
    },

    /// All digits are identical (e.g. `00000000000`).
    #[error("{kind}: degenerate sequence of repeated digits")]
    DegenerateSequence {
        /// Document being validated.
        kind: DocumentKind,
    },

    /// Check digit(s) do not match the base digits.
    #[error("{kind}: check digit mismatch")]
    InvalidChecksum {
        /// Document being validated.
        kind: DocumentKind,
    },
}

impl ValidationError {
    /// The classification this error corresponds to.
    pub fn outcome(&self) -> ValidationOutcome {
        match self {
            Self::InvalidFormat { .. } => ValidationOutcome::InvalidFormat,
            Self::InvalidLength { .. } => ValidationOutcome::InvalidLength,
            Self::DegenerateSequence { .. } => ValidationOutcome::DegenerateSequence,
            Self::InvalidChecksum { .. } => ValidationOutcome::InvalidChecksum,
        }
    }

    /// The document kind the error was raised for.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::InvalidFormat { kind, .. }
            | Self::InvalidLength { kind, .. }
            | Self::DegenerateSequence { kind }
            | Self::InvalidChecksum { kind } => *kind,
        }
    }
}

fn expected_digits(min: &usize, max: &usize) -> String {
    if min == max {
        min.to_string()
    } else {
        format!("{min}-{max}")
    }
}

/// Failure to parse a document kind or card brand from its name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Name does not match any [`DocumentKind`].
    #[error("unknown document kind: {0:?} (expected one of cpf, cnpj, cnh, renavam, card)")]
    UnknownKind(String),

    /// Name does not match any card brand.
    #[error("unknown card brand: {0:?} (expected one of visa, mastercard, amex, diners)")]
    UnknownBrand(String),

    /// Name does not match any CNPJ branch mode.
    #[error("unknown CNPJ branch mode: {0:?} (expected headquarters or random)")]
    UnknownBranch(String),
}
