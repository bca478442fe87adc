//! # CNH: Carteira Nacional de Habilitação
//!
//! Brazilian driver's-license number: 9 base digits and two check digits.
//!
//! CNH does not use the shared mod-11 mapping from [`crate::checksum`]:
//!
//! 1. `r1 = Σ d[i] * (9 − i) mod 11`; DV1 = `0` if `r1 ≥ 10`, else `r1`.
//! 2. `r2 = Σ d[i] * (i + 1) mod 11`; DV2 = `0` if `r2 ≥ 10`, else
//!    `r2 − 2` when `r1 ≥ 10`, else `r2`.
//!
//! The "minus 2" adjustment in step 2 is the DETRAN quirk as observed in
//! deployed validators. When it would go below zero the base digits admit
//! no check digits at all: such inputs are never valid and generation
//! redraws them.
//!
//! Input is written as bare digits (whitespace ignored).

use crate::checksum::weighted_sum;
use crate::digits::DigitSequence;
use crate::document::{impl_identifier_traits, DocumentKind, Identifier};
use crate::error::ValidationError;
use crate::random::{draw_accepted, thread_digits, DigitSource};
use crate::validation::{Layout, ValidationOutcome};

/// Total digit count.
pub const LENGTH: usize = 11;

const BASE_LENGTH: usize = 9;
const FIRST_WEIGHTS: [u32; 9] = [9, 8, 7, 6, 5, 4, 3, 2, 1];
const SECOND_WEIGHTS: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
const ADJUSTMENT: u32 = 2;
const FALLBACK: [u8; LENGTH] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 0];

const LAYOUT: Layout = Layout::bare(DocumentKind::Cnh, LENGTH);

/// A valid CNH number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnh(DigitSequence);

impl_identifier_traits!(Cnh);

/// CNH remainder mapping: `≥ 10 ⇒ 0`, otherwise the remainder itself.
fn remainder_or_zero(r: u32) -> u32 {
    if r >= 10 {
        0
    } else {
        r
    }
}

/// Both check digits for 9 base digits, or `None` when the adjustment
/// underflows and no valid pair exists.
pub fn check_digits(base: &[u8]) -> Option<[u8; 2]> {
    debug_assert_eq!(base.len(), BASE_LENGTH);
    let r1 = weighted_sum(base, &FIRST_WEIGHTS) % 11;
    let first = remainder_or_zero(r1);
    let discount = if r1 >= 10 { ADJUSTMENT } else { 0 };

    let r2 = weighted_sum(base, &SECOND_WEIGHTS) % 11;
    let second = if r2 >= 10 {
        0
    } else {
        r2.checked_sub(discount)?
    };

    Some([first as u8, second as u8])
}

impl Identifier for Cnh {
    const KIND: DocumentKind = DocumentKind::Cnh;
    type Options = ();

    fn parse(input: &str) -> Result<Self, ValidationError> {
        let seq = LAYOUT.normalize(input)?;
        if seq.is_repeated() {
            return Err(ValidationError::DegenerateSequence { kind: Self::KIND });
        }
        let (base, check) = seq.split_check(2);
        match check_digits(base) {
            Some(expected) if check == expected => Ok(Self(seq)),
            _ => Err(ValidationError::InvalidChecksum { kind: Self::KIND }),
        }
    }

    fn generate_with<S: DigitSource + ?Sized>(_options: &(), source: &mut S) -> Self {
        Self(draw_accepted(
            Self::KIND,
            source,
            |src| src.digits(BASE_LENGTH),
            |base| {
                let check = check_digits(base)?;
                let mut digits = base.to_vec();
                digits.extend_from_slice(&check);
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
        self.0.to_string()
    }
}

/// Generate a random valid CNH.
pub fn generate() -> Cnh {
    Cnh::generate_with(&(), &mut thread_digits())
}

/// Classify user input as a CNH.
pub fn validate(input: &str) -> ValidationOutcome {
    Cnh::validate(input)
}

/// Boolean view of [`validate`].
pub fn is_valid(input: &str) -> bool {
    validate(input).is_valid()
}
