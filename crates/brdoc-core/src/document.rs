//! # Document Kinds and Dispatch
//!
//! [`Identifier`] is the seam every typed document implements: a validating
//! constructor, a generator driven by a [`DigitSource`], and a display
//! format. [`DocumentKind`] lets callers that only know a document by name
//! (the CLI, for one) dispatch to the right implementation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card::{CardBrand, CardNumber};
use crate::cnh::Cnh;
use crate::cnpj::{Cnpj, CnpjBranch};
use crate::cpf::Cpf;
use crate::digits::DigitSequence;
use crate::error::{ParseError, ValidationError};
use crate::random::{thread_digits, DigitSource};
use crate::renavam::Renavam;
use crate::validation::ValidationOutcome;

/// A document number that is valid by construction.
pub trait Identifier: Sized {
    /// Which document this is.
    const KIND: DocumentKind;

    /// Generation parameters. `()` for fixed-structure documents.
    type Options: Default;

    /// Parse and validate user input (raw digits or the punctuated form).
    ///
    /// # Errors
    ///
    /// Returns the first applicable [`ValidationError`] in the order
    /// format → length → degenerate → checksum.
    fn parse(input: &str) -> Result<Self, ValidationError>;

    /// Generate a structurally valid number. Never fails.
    fn generate_with<S: DigitSource + ?Sized>(options: &Self::Options, source: &mut S) -> Self;

    /// The bare digits.
    fn digits(&self) -> &DigitSequence;

    /// Conventional punctuated display form.
    fn formatted(&self) -> String;

    /// Classify user input without constructing.
    fn validate(input: &str) -> ValidationOutcome {
        ValidationOutcome::from(&Self::parse(input))
    }

    /// Generate with the thread-local RNG.
    fn generate(options: &Self::Options) -> Self {
        Self::generate_with(options, &mut thread_digits())
    }
}

/// Shared trait plumbing for the typed documents: inherent `new`,
/// `Display` (punctuated form), `FromStr`, and serde as the digit string
/// with validation on the way in.
macro_rules! impl_identifier_traits {
    ($ty:ident) => {
        impl $ty {
            /// Parse and validate; see [`crate::document::Identifier::parse`].
            ///
            /// # Errors
            ///
            /// Returns the [`crate::error::ValidationError`] describing why
            /// the input was rejected.
            pub fn new(value: impl AsRef<str>) -> Result<Self, crate::error::ValidationError> {
                <Self as crate::document::Identifier>::parse(value.as_ref())
            }

            /// The bare digit string, without punctuation.
            pub fn to_digit_string(&self) -> String {
                crate::document::Identifier::digits(self).to_string()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&crate::document::Identifier::formatted(self))
            }
        }

        impl std::str::FromStr for $ty {
            type Err = crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as crate::document::Identifier>::parse(s)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(crate::document::Identifier::digits(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                <Self as crate::document::Identifier>::parse(&raw)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_identifier_traits;

/// Every supported document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Individual taxpayer number (11 digits).
    Cpf,
    /// Company taxpayer number (14 digits).
    Cnpj,
    /// Driver's license number (11 digits).
    Cnh,
    /// Vehicle registration number (11 digits).
    Renavam,
    /// Payment-card number (13–19 digits).
    Card,
}

impl DocumentKind {
    /// All kinds, in declaration order.
    pub const ALL: [DocumentKind; 5] = [
        Self::Cpf,
        Self::Cnpj,
        Self::Cnh,
        Self::Renavam,
        Self::Card,
    ];

    /// Lowercase name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Cnh => "cnh",
            Self::Renavam => "renavam",
            Self::Card => "card",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Cnh => "CNH",
            Self::Renavam => "RENAVAM",
            Self::Card => "card",
        }
    }

    /// Classify user input as this kind of document.
    pub fn validate(self, input: &str) -> ValidationOutcome {
        let outcome = match self {
            Self::Cpf => Cpf::validate(input),
            Self::Cnpj => Cnpj::validate(input),
            Self::Cnh => Cnh::validate(input),
            Self::Renavam => Renavam::validate(input),
            Self::Card => CardNumber::validate(input),
        };
        tracing::debug!(kind = self.as_str(), %outcome, "validated input");
        outcome
    }

    /// Generate a value of this kind.
    pub fn generate_with<S: DigitSource + ?Sized>(
        self,
        options: &GenerationOptions,
        source: &mut S,
    ) -> GeneratedDocument {
        match self {
            Self::Cpf => GeneratedDocument::of(&Cpf::generate_with(&(), source)),
            Self::Cnpj => GeneratedDocument::of(&Cnpj::generate_with(&options.branch, source)),
            Self::Cnh => GeneratedDocument::of(&Cnh::generate_with(&(), source)),
            Self::Renavam => GeneratedDocument::of(&Renavam::generate_with(&(), source)),
            Self::Card => GeneratedDocument::of(&CardNumber::generate_with(&options.brand, source)),
        }
    }

    /// Generate a value of this kind with the thread-local RNG.
    pub fn generate(self, options: &GenerationOptions) -> GeneratedDocument {
        self.generate_with(options, &mut thread_digits())
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| ParseError::UnknownKind(s.to_string()))
    }
}

/// Per-document generation parameters.
///
/// Only cards and CNPJ read anything from here; the other documents have
/// a fixed structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Card issuer to generate for.
    #[serde(default)]
    pub brand: CardBrand,
    /// CNPJ branch suffix mode.
    #[serde(default)]
    pub branch: CnpjBranch,
}

/// A freshly generated value, detached from its typed wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    /// Which document was generated.
    pub kind: DocumentKind,
    /// Bare digits.
    pub digits: DigitSequence,
    /// Conventional punctuated form.
    pub formatted: String,
}

impl GeneratedDocument {
    /// Capture a typed document.
    pub fn of<T: Identifier>(doc: &T) -> Self {
        Self {
            kind: T::KIND,
            digits: doc.digits().clone(),
            formatted: doc.formatted(),
        }
    }
}
