//! # CPF: Cadastro de Pessoas Físicas
//!
//! Brazilian individual taxpayer number: 9 base digits followed by two
//! mod-11 check digits.
//!
//! - DV1: weights `10..=2` over the 9 base digits.
//! - DV2: weights `11..=2` over the 9 base digits plus DV1.
//!
//! Accepted input: `11144477735` or `111.444.777-35` (whitespace ignored).
//! All-identical sequences (`000.000.000-00` … `999.999.999-99`) satisfy
//! the arithmetic but are rejected as degenerate.

use crate::checksum::mod11_check_digit;
use crate::digits::DigitSequence;
use crate::document::{impl_identifier_traits, DocumentKind, Identifier};
use crate::error::ValidationError;
use crate::random::{draw_accepted, thread_digits, DigitSource};
use crate::validation::{Layout, ValidationOutcome};

/// Total digit count.
pub const LENGTH: usize = 11;

/// Display mask.
pub const MASK: &str = "###.###.###-##";

const BASE_LENGTH: usize = 9;
const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const FALLBACK: [u8; LENGTH] = [1, 1, 1, 4, 4, 4, 7, 7, 7, 3, 5];

const LAYOUT: Layout = Layout {
    kind: DocumentKind::Cpf,
    min_len: LENGTH,
    max_len: LENGTH,
    mask: Some(MASK),
    separators: &['.', '-'],
};

/// A valid CPF number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(DigitSequence);

impl_identifier_traits!(Cpf);

/// Both check digits for 9 base digits.
pub fn check_digits(base: &[u8]) -> [u8; 2] {
    debug_assert_eq!(base.len(), BASE_LENGTH);
    let first = mod11_check_digit(base, &FIRST_WEIGHTS);
    let mut extended = base.to_vec();
    extended.push(first);
    let second = mod11_check_digit(&extended, &SECOND_WEIGHTS);
    [first, second]
}

impl Identifier for Cpf {
    const KIND: DocumentKind = DocumentKind::Cpf;
    type Options = ();

    fn parse(input: &str) -> Result<Self, ValidationError> {
        let seq = LAYOUT.normalize(input)?;
        if seq.is_repeated() {
            return Err(ValidationError::DegenerateSequence { kind: Self::KIND });
        }
        let (base, check) = seq.split_check(2);
        if check != check_digits(base) {
            return Err(ValidationError::InvalidChecksum { kind: Self::KIND });
        }
        Ok(Self(seq))
    }

    fn generate_with<S: DigitSource + ?Sized>(_options: &(), source: &mut S) -> Self {
        Self(draw_accepted(
            Self::KIND,
            source,
            |src| src.digits(BASE_LENGTH),
            |base| {
                let mut digits = base.to_vec();
                digits.extend_from_slice(&check_digits(base));
                let seq = DigitSequence::from_trusted(digits);
                (!seq.is_repeated()).then_some(seq)
            },
            &FALLBACK,
        ))
    }

    fn digits(&self) -> &DigitSequence {
        &self.0
    }

    fn formatted(&self) -> String {
        self.0.apply_mask(MASK)
    }
}

/// Generate a random valid CPF.
pub fn generate() -> Cpf {
    Cpf::generate_with(&(), &mut thread_digits())
}

/// Classify user input as a CPF.
pub fn validate(input: &str) -> ValidationOutcome {
    Cpf::validate(input)
}

/// Boolean view of [`validate`].
pub fn is_valid(input: &str) -> bool {
    validate(input).is_valid()
}
