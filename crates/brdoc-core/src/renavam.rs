//! # RENAVAM: Registro Nacional de Veículos Automotores
//!
//! Vehicle registration number: 10 base digits and one check digit,
//! weights `3 2 9 8 7 6 5 4 3 2`, shared mod-11 mapping (remainder 0 or 1
//! gives 0, otherwise `11 − remainder`).
//!
//! Input is written as bare digits (whitespace ignored). Unlike CPF and
//! CNPJ there is no degenerate-sequence rule.

use crate::checksum::mod11_check_digit;
use crate::digits::DigitSequence;
use crate::document::{impl_identifier_traits, DocumentKind, Identifier};
use crate::error::ValidationError;
use crate::random::{thread_digits, DigitSource};
use crate::validation::{Layout, ValidationOutcome};

/// Total digit count.
pub const LENGTH: usize = 11;

const BASE_LENGTH: usize = 10;
const WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

const LAYOUT: Layout = Layout::bare(DocumentKind::Renavam, LENGTH);

/// A valid RENAVAM number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Renavam(DigitSequence);

impl_identifier_traits!(Renavam);

/// Check digit for 10 base digits.
pub fn check_digit(base: &[u8]) -> u8 {
    debug_assert_eq!(base.len(), BASE_LENGTH);
    mod11_check_digit(base, &WEIGHTS)
}

impl Identifier for Renavam {
    const KIND: DocumentKind = DocumentKind::Renavam;
    type Options = ();

    fn parse(input: &str) -> Result<Self, ValidationError> {
        let seq = LAYOUT.normalize(input)?;
        let (base, check) = seq.split_check(1);
        if check != [check_digit(base)] {
            return Err(ValidationError::InvalidChecksum { kind: Self::KIND });
        }
        Ok(Self(seq))
    }

    fn generate_with<S: DigitSource + ?Sized>(_options: &(), source: &mut S) -> Self {
        let mut digits = source.digits(BASE_LENGTH);
        let check = check_digit(&digits);
        digits.push(check);
        Self(DigitSequence::from_trusted(digits))
    }

    fn digits(&self) -> &DigitSequence {
        &self.0
    }

    fn formatted(&self) -> String {
        self.0.to_string()
    }
}

/// Generate a random valid RENAVAM.
pub fn generate() -> Renavam {
    Renavam::generate_with(&(), &mut thread_digits())
}

/// Classify user input as a RENAVAM.
pub fn validate(input: &str) -> ValidationOutcome {
    Renavam::validate(input)
}

/// Boolean view of [`validate`].
pub fn is_valid(input: &str) -> bool {
    validate(input).is_valid()
}
