//! # CNPJ: Cadastro Nacional da Pessoa Jurídica
//!
//! Brazilian company taxpayer number: an 8-digit root, a 4-digit branch
//! (`0001` for headquarters), and two mod-11 check digits.
//!
//! The weight tables are 12 and 13 entries long and wrap from 2 back to 9;
//! they are not the CPF tables.
//!
//! Accepted input: `11222333000181` or `11.222.333/0001-81`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::mod11_check_digit;
use crate::digits::DigitSequence;
use crate::document::{impl_identifier_traits, DocumentKind, Identifier};
use crate::error::{ParseError, ValidationError};
use crate::random::{draw_accepted, thread_digits, DigitSource};
use crate::validation::{Layout, ValidationOutcome};

/// Total digit count.
pub const LENGTH: usize = 14;

/// Display mask.
pub const MASK: &str = "##.###.###/####-##";

const ROOT_LENGTH: usize = 8;
const BRANCH_LENGTH: usize = 4;
const BASE_LENGTH: usize = ROOT_LENGTH + BRANCH_LENGTH;
const HEADQUARTERS: [u8; BRANCH_LENGTH] = [0, 0, 0, 1];
const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const FALLBACK: [u8; LENGTH] = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1, 8, 1];

const LAYOUT: Layout = Layout {
    kind: DocumentKind::Cnpj,
    min_len: LENGTH,
    max_len: LENGTH,
    mask: Some(MASK),
    separators: &['.', '/', '-'],
};

/// How the 4-digit branch suffix is chosen during generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CnpjBranch {
    /// `0001`, the headquarters branch.
    #[default]
    Headquarters,
    /// Four random digits.
    Random,
}

impl FromStr for CnpjBranch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "headquarters" | "hq" | "matriz" => Ok(Self::Headquarters),
            "random" => Ok(Self::Random),
            _ => Err(ParseError::UnknownBranch(s.to_string())),
        }
    }
}

/// A valid CNPJ number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(DigitSequence);

impl_identifier_traits!(Cnpj);

impl Cnpj {
    /// The 8-digit company root.
    pub fn root(&self) -> &[u8] {
        &self.0.as_slice()[..ROOT_LENGTH]
    }

    /// The 4-digit branch number.
    pub fn branch(&self) -> &[u8] {
        &self.0.as_slice()[ROOT_LENGTH..BASE_LENGTH]
    }

    /// Whether this is the headquarters (`0001`) registration.
    pub fn is_headquarters(&self) -> bool {
        self.branch() == HEADQUARTERS
    }
}

/// Both check digits for 12 base digits.
pub fn check_digits(base: &[u8]) -> [u8; 2] {
    debug_assert_eq!(base.len(), BASE_LENGTH);
    let first = mod11_check_digit(base, &FIRST_WEIGHTS);
    let mut extended = base.to_vec();
    extended.push(first);
    let second = mod11_check_digit(&extended, &SECOND_WEIGHTS);
    [first, second]
}

impl Identifier for Cnpj {
    const KIND: DocumentKind = DocumentKind::Cnpj;
    type Options = CnpjBranch;

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

    fn generate_with<S: DigitSource + ?Sized>(branch: &CnpjBranch, source: &mut S) -> Self {
        Self(draw_accepted(
            Self::KIND,
            source,
            |src| {
                let mut base = src.digits(ROOT_LENGTH);
                match branch {
                    CnpjBranch::Headquarters => base.extend_from_slice(&HEADQUARTERS),
                    CnpjBranch::Random => base.extend(src.digits(BRANCH_LENGTH)),
                }
                base
            },
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

/// Generate a random valid CNPJ.
pub fn generate(branch: CnpjBranch) -> Cnpj {
    Cnpj::generate_with(&branch, &mut thread_digits())
}

/// Classify user input as a CNPJ.
pub fn validate(input: &str) -> ValidationOutcome {
    Cnpj::validate(input)
}

/// Boolean view of [`validate`].
pub fn is_valid(input: &str) -> bool {
    validate(input).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedDigits;

    #[test]
    fn known_valid_formatted() {
        assert_eq!(validate("11.222.333/0001-81"), ValidationOutcome::Valid);
    }

    #[test]
    fn known_valid_raw() {
        assert_eq!(validate("11222333000181"), ValidationOutcome::Valid);
    }

    #[test]
    fn last_digit_changed_is_checksum_error() {
        assert_eq!(validate("11.222.333/0001-82"), ValidationOutcome::InvalidChecksum);
        assert_eq!(validate("11222333000180"), ValidationOutcome::InvalidChecksum);
    }

    #[test]
    fn check_digits_vector() {
        let base = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1];
        assert_eq!(check_digits(&base), [8, 1]);
    }

    #[test]
    fn weight_tables_are_twelve_and_thirteen_long() {
        assert_eq!(FIRST_WEIGHTS.len(), 12);
        assert_eq!(SECOND_WEIGHTS.len(), 13);
        assert_eq!(&SECOND_WEIGHTS[1..], &FIRST_WEIGHTS[..]);
    }

    #[test]
    fn cpf_weights_would_give_a_different_answer() {
        // With the CPF tables (10..2 / 11..2 truncated) the first digit of
        // 11.222.333/0001-81 would not be 8.
        let base = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1];
        let cpf_like: [u32; 12] = [13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
        assert_ne!(mod11_check_digit(&base, &cpf_like), 8);
        assert_eq!(mod11_check_digit(&base, &FIRST_WEIGHTS), 8);
    }

    #[test]
    fn degenerate_sequences_rejected() {
        for d in 0..=9u8 {
            let raw = d.to_string().repeat(LENGTH);
            assert_eq!(validate(&raw), ValidationOutcome::DegenerateSequence, "{raw}");
        }
    }

    #[test]
    fn length_boundaries() {
        assert_eq!(validate("1122233300018"), ValidationOutcome::InvalidLength);
        assert_eq!(validate("112223330001811"), ValidationOutcome::InvalidLength);
    }

    #[test]
    fn partial_punctuation_is_format_error() {
        assert_eq!(validate("11222333/0001-81"), ValidationOutcome::InvalidFormat);
        assert_eq!(validate("11.222.333/0001_81"), ValidationOutcome::InvalidFormat);
    }

    #[test]
    fn headquarters_generation_is_exact() {
        let mut src = ScriptedDigits::from_str_digits("11222333");
        let cnpj = Cnpj::generate_with(&CnpjBranch::Headquarters, &mut src);
        assert_eq!(cnpj.to_digit_string(), "11222333000181");
        assert_eq!(cnpj.formatted(), "11.222.333/0001-81");
        assert!(cnpj.is_headquarters());
        assert_eq!(cnpj.root(), &[1, 1, 2, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn random_branch_draws_four_more_digits() {
        let mut src = ScriptedDigits::from_str_digits("112223330002");
        let cnpj = Cnpj::generate_with(&CnpjBranch::Random, &mut src);
        assert_eq!(cnpj.branch(), &[0, 0, 0, 2]);
        assert!(!cnpj.is_headquarters());
        assert_eq!(src.drawn(), 12);
        assert!(is_valid(&cnpj.to_digit_string()));
    }

    #[test]
    fn random_branch_redraws_degenerate() {
        // Twelve zeros give 00000000000000; the second draw is used.
        let mut src = ScriptedDigits::from_str_digits("000000000000112223330001");
        let cnpj = Cnpj::generate_with(&CnpjBranch::Random, &mut src);
        assert_eq!(cnpj.to_digit_string(), "11222333000181");
    }

    #[test]
    fn stuck_source_still_terminates() {
        for branch in [CnpjBranch::Headquarters, CnpjBranch::Random] {
            let cnpj = Cnpj::generate_with(&branch, &mut ScriptedDigits::new(vec![1]));
            assert!(is_valid(&cnpj.to_digit_string()), "{cnpj}");
        }
        let cnpj = Cnpj::generate_with(&CnpjBranch::Random, &mut ScriptedDigits::new(vec![0]));
        assert_eq!(cnpj.to_digit_string(), "10000000000064");
    }

    #[test]
    fn generated_values_validate() {
        for branch in [CnpjBranch::Headquarters, CnpjBranch::Random] {
            for _ in 0..200 {
                let cnpj = generate(branch);
                assert!(is_valid(&cnpj.formatted()), "{cnpj}");
            }
        }
    }

    #[test]
    fn branch_from_str() {
        assert_eq!("HQ".parse::<CnpjBranch>().unwrap(), CnpjBranch::Headquarters);
        assert_eq!("random".parse::<CnpjBranch>().unwrap(), CnpjBranch::Random);
        assert!("branch".parse::<CnpjBranch>().is_err());
    }
}
