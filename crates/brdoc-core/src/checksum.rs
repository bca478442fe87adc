//! # Checksum Primitives
//!
//! Shared numeric kernels used by the document modules:
//!
//! - [`mod11_check_digit`]: weighted sum reduced modulo 11, with the
//!   "remainder < 2 ⇒ 0, otherwise 11 − remainder" mapping used by CPF,
//!   CNPJ and RENAVAM.
//! - [`luhn_check_digit`] / [`luhn_is_valid`]: the ISO/IEC 7812 mod-10
//!   doubling checksum used by payment cards.
//!
//! CNH uses a different remainder mapping and keeps its own rule in
//! [`crate::cnh`]; it must not be routed through [`mod11_check_digit`].

/// `Σ digits[i] * weights[i]`.
///
/// Both slices are expected to have the same length; extra elements on
/// either side are ignored.
pub fn weighted_sum(digits: &[u8], weights: &[u32]) -> u32 {
    debug_assert_eq!(digits.len(), weights.len());
    digits
        .iter()
        .zip(weights)
        .map(|(d, w)| u32::from(*d) * w)
        .sum()
}

/// Weighted mod-11 check digit: `0` when `sum mod 11 < 2`, else
/// `11 − (sum mod 11)`.
///
/// The threshold is `< 2`, not `≥ 10`: remainder `1` maps to `0`, never to
/// `10`, and remainder `0` maps to `0`, never to `11`.
pub fn mod11_check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    match weighted_sum(digits, weights) % 11 {
        0 | 1 => 0,
        r => (11 - r) as u8,
    }
}

/// Luhn sum over `digits`, doubling every second digit counting from the
/// rightmost one when `double_rightmost` is set, or from the one before it
/// otherwise.
fn luhn_sum(digits: &[u8], double_rightmost: bool) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| {
            let d = u32::from(*d);
            if (i % 2 == 0) == double_rightmost {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum()
}

/// Luhn check digit for a payload that does not yet include it.
///
/// Starting from the rightmost payload digit, every second digit is
/// doubled (minus 9 when the result exceeds 9); the check digit is
/// `(10 − sum mod 10) mod 10`.
pub fn luhn_check_digit(payload: &[u8]) -> u8 {
    ((10 - luhn_sum(payload, true) % 10) % 10) as u8
}

/// Whether a complete number (payload plus check digit) passes Luhn.
///
/// Empty input is never valid.
pub fn luhn_is_valid(digits: &[u8]) -> bool {
    !digits.is_empty() && luhn_sum(digits, false) % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn weighted_sum_basic() {
        assert_eq!(weighted_sum(&[1, 2, 3], &[3, 2, 1]), 10);
        assert_eq!(weighted_sum(&[], &[]), 0);
    }

    #[test]
    fn mod11_remainder_zero_maps_to_zero() {
        // 11 * 1 = 11 → remainder 0.
        assert_eq!(mod11_check_digit(&[1], &[11]), 0);
    }

    #[test]
    fn mod11_remainder_one_maps_to_zero() {
        // 12 → remainder 1. A "≥ 10 ⇒ 0" rule would yield 10 here.
        assert_eq!(mod11_check_digit(&[1], &[12]), 0);
    }

    #[test]
    fn mod11_remainder_two_maps_to_nine() {
        assert_eq!(mod11_check_digit(&[2], &[1]), 9);
    }

    #[test]
    fn mod11_remainder_ten_maps_to_one() {
        assert_eq!(mod11_check_digit(&[5], &[2]), 1);
    }

    #[test]
    fn mod11_cpf_first_digit_vector() {
        // 111.444.777-35: Σ = 162, 162 mod 11 = 8, 11 − 8 = 3.
        let base = digits("111444777");
        assert_eq!(weighted_sum(&base, &[10, 9, 8, 7, 6, 5, 4, 3, 2]), 162);
        assert_eq!(mod11_check_digit(&base, &[10, 9, 8, 7, 6, 5, 4, 3, 2]), 3);
    }

    #[test]
    fn luhn_check_digit_standard_vectors() {
        assert_eq!(luhn_check_digit(&digits("453201511283036")), 6);
        assert_eq!(luhn_check_digit(&digits("7992739871")), 3);
        assert_eq!(luhn_check_digit(&digits("0")), 0);
    }

    #[test]
    fn luhn_validation() {
        assert!(luhn_is_valid(&digits("4532015112830366")));
        assert!(!luhn_is_valid(&digits("4532015112830367")));
        assert!(luhn_is_valid(&digits("79927398713")));
        assert!(!luhn_is_valid(&[]));
    }

    #[test]
    fn luhn_doubling_above_nine_subtracts_nine() {
        // Payload "9": doubled → 18 → 9; check = (10 − 9) % 10 = 1.
        assert_eq!(luhn_check_digit(&[9]), 1);
        assert!(luhn_is_valid(&[9, 1]));
    }

    #[test]
    fn luhn_detects_single_digit_errors() {
        let good = digits("4532015112830366");
        for i in 0..good.len() {
            let mut bad = good.clone();
            bad[i] = (bad[i] + 1) % 10;
            assert!(!luhn_is_valid(&bad), "position {i}");
        }
    }
}
