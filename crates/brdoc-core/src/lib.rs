//! # brdoc-core: Check-Digit Engine
//!
//! Generates and validates Brazilian identification numbers and payment-card
//! numbers. Every algorithm here is a pure function of its input (plus, for
//! generation, an injected [`DigitSource`]).
//!
//! ## Documents
//!
//! | Module | Document | Digits | Rule |
//! |--------|----------|--------|------|
//! | [`cpf`] | Cadastro de Pessoas Físicas | 11 | mod-11, two DVs |
//! | [`cnpj`] | Cadastro Nacional da Pessoa Jurídica | 14 | mod-11, two DVs |
//! | [`cnh`] | Carteira Nacional de Habilitação | 11 | CNH mod-11 variant |
//! | [`renavam`] | Registro Nacional de Veículos Automotores | 11 | mod-11, one DV |
//! | [`card`] | Payment card (ISO/IEC 7812) | 13–19 | Luhn |
//!
//! ## Key Design Principles
//!
//! 1. **Validation returns a classification, never an error.** Each module's
//!    `validate()` yields a [`ValidationOutcome`]. Malformed input is an
//!    outcome, not a panic.
//!
//! 2. **Typed documents are valid by construction.** [`Cpf`], [`Cnpj`],
//!    [`Cnh`], [`Renavam`] and [`CardNumber`] can only be built through a
//!    validating constructor or a generator.
//!
//! 3. **Separate rules stay separate.** The shared "remainder < 2 ⇒ 0" rule
//!    lives in [`checksum`]; CNH's "remainder ≥ 10 ⇒ 0" rule lives in
//!    [`cnh`] and is never routed through the shared one.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod card;
pub mod checksum;
pub mod cnh;
pub mod cnpj;
pub mod cpf;
pub mod digits;
pub mod document;
pub mod error;
pub mod random;
pub mod renavam;
pub mod validation;

// Re-export primary types for ergonomic imports.
pub use card::{BrandInfo, CardBrand, CardNumber, CardValidation};
pub use cnh::Cnh;
pub use cnpj::{Cnpj, CnpjBranch};
pub use cpf::Cpf;
pub use digits::DigitSequence;
pub use document::{DocumentKind, GeneratedDocument, GenerationOptions, Identifier};
pub use error::{ParseError, ValidationError};
pub use random::{seeded_digits, thread_digits, DigitSource, RngDigits, ScriptedDigits};
pub use renavam::Renavam;
pub use validation::ValidationOutcome;
