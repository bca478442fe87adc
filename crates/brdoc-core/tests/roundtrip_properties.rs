//! # Round-Trip Properties
//!
//! Every generated value must pass its own validator. Each property runs
//! 10,000 cases, each driving the generator from an independently seeded
//! digit source.

use brdoc_core::{
    seeded_digits, CardBrand, CardNumber, Cnh, Cnpj, CnpjBranch, Cpf, DocumentKind, Identifier,
    Renavam, ValidationOutcome,
};
use proptest::prelude::*;

fn brand() -> impl Strategy<Value = CardBrand> {
    prop_oneof![
        Just(CardBrand::Visa),
        Just(CardBrand::Mastercard),
        Just(CardBrand::AmericanExpress),
        Just(CardBrand::DinersClub),
    ]
}

fn branch() -> impl Strategy<Value = CnpjBranch> {
    prop_oneof![Just(CnpjBranch::Headquarters), Just(CnpjBranch::Random)]
}

fn kind() -> impl Strategy<Value = DocumentKind> {
    prop::sample::select(DocumentKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10_000))]

    #[test]
    fn cpf_roundtrip(seed in any::<u64>()) {
        let cpf = Cpf::generate_with(&(), &mut seeded_digits(seed));
        prop_assert_eq!(Cpf::validate(&cpf.to_digit_string()), ValidationOutcome::Valid);
        prop_assert_eq!(Cpf::validate(&cpf.formatted()), ValidationOutcome::Valid);
    }

    #[test]
    fn cnpj_roundtrip(seed in any::<u64>(), branch in branch()) {
        let cnpj = Cnpj::generate_with(&branch, &mut seeded_digits(seed));
        prop_assert_eq!(Cnpj::validate(&cnpj.to_digit_string()), ValidationOutcome::Valid);
        prop_assert_eq!(Cnpj::validate(&cnpj.formatted()), ValidationOutcome::Valid);
    }

    #[test]
    fn cnh_roundtrip(seed in any::<u64>()) {
        let cnh = Cnh::generate_with(&(), &mut seeded_digits(seed));
        prop_assert_eq!(Cnh::validate(&cnh.to_digit_string()), ValidationOutcome::Valid);
    }

    #[test]
    fn renavam_roundtrip(seed in any::<u64>()) {
        let renavam = Renavam::generate_with(&(), &mut seeded_digits(seed));
        prop_assert_eq!(Renavam::validate(&renavam.to_digit_string()), ValidationOutcome::Valid);
    }

    #[test]
    fn card_roundtrip(seed in any::<u64>(), brand in brand()) {
        let card = CardNumber::generate_with(&brand, &mut seeded_digits(seed));
        let report = brdoc_core::card::validate(&card.to_digit_string());
        prop_assert!(report.luhn_valid);
        prop_assert_eq!(report.brand, Some(brand));
        prop_assert!(brdoc_core::card::validate(&card.formatted()).luhn_valid);
    }
}

proptest! {
    /// Validation is a pure function of its input.
    #[test]
    fn validation_is_deterministic(kind in kind(), input in "[0-9./ -]{0,24}") {
        prop_assert_eq!(kind.validate(&input), kind.validate(&input));
    }

    /// Validation never panics, whatever the input.
    #[test]
    fn validation_is_total(kind in kind(), input in any::<String>()) {
        let _ = kind.validate(&input);
    }

    /// Digit-only inputs are never format errors.
    #[test]
    fn bare_digits_are_well_formed(kind in kind(), input in "[0-9]{0,24}") {
        prop_assert_ne!(kind.validate(&input), ValidationOutcome::InvalidFormat);
    }

    /// Changing either check digit of a valid CPF is always detected.
    #[test]
    fn cpf_check_digit_corruption_detected(
        seed in any::<u64>(),
        pos in 9usize..11,
        delta in 1u8..10,
    ) {
        let mut digits = Cpf::generate_with(&(), &mut seeded_digits(seed))
            .digits()
            .as_slice()
            .to_vec();
        digits[pos] = (digits[pos] + delta) % 10;
        let raw: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        prop_assert_ne!(Cpf::validate(&raw), ValidationOutcome::Valid);
    }
}
