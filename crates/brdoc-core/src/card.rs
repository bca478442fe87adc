//! # Payment Cards
//!
//! Luhn-checked card numbers (ISO/IEC 7812) and issuer classification.
//!
//! ## Generation
//!
//! Each [`CardBrand`] has a [`BrandInfo`] record fixing the prefix the
//! generator seeds with and the total length. The remaining digits are
//! random except the last, which is the Luhn check digit.
//!
//! ## Classification
//!
//! Brand detection matches the leading digits against each brand's issuer
//! prefix ranges and keeps the longest match. Brand and Luhn validity are
//! independent facts: a number may carry a known prefix and fail Luhn, or
//! pass Luhn with an unknown prefix.
//!
//! | Brand | Generation prefix | Length | Classified prefixes |
//! |-------|-------------------|--------|---------------------|
//! | Visa | `4` | 16 | `4` |
//! | Mastercard | `5` | 16 | `5`, `2221–2720` |
//! | American Express | `34` | 15 | `34`, `37` |
//! | Diners Club | `30` | 14 | `30`, `36`, `38`, `39` |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::{luhn_check_digit, luhn_is_valid};
use crate::digits::DigitSequence;
use crate::document::{impl_identifier_traits, DocumentKind, Identifier};
use crate::error::{ParseError, ValidationError};
use crate::random::{thread_digits, DigitSource};
use crate::validation::{Layout, ValidationOutcome};

/// Shortest accepted card number.
pub const MIN_LENGTH: usize = 13;

/// Longest accepted card number.
pub const MAX_LENGTH: usize = 19;

const LAYOUT: Layout = Layout {
    kind: DocumentKind::Card,
    min_len: MIN_LENGTH,
    max_len: MAX_LENGTH,
    mask: None,
    separators: &[],
};

/// Card issuer network.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    /// Visa.
    #[default]
    Visa,
    /// Mastercard.
    Mastercard,
    /// American Express.
    AmericanExpress,
    /// Diners Club.
    DinersClub,
}

impl CardBrand {
    /// All brands, in declaration order.
    pub const ALL: [CardBrand; 4] = [
        Self::Visa,
        Self::Mastercard,
        Self::AmericanExpress,
        Self::DinersClub,
    ];

    /// Generation record for this brand.
    pub fn info(self) -> &'static BrandInfo {
        match self {
            Self::Visa => &BRANDS[0],
            Self::Mastercard => &BRANDS[1],
            Self::AmericanExpress => &BRANDS[2],
            Self::DinersClub => &BRANDS[3],
        }
    }

    /// Short lowercase name, accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::AmericanExpress => "amex",
            Self::DinersClub => "diners",
        }
    }
}

impl std::fmt::Display for CardBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.info().name)
    }
}

impl FromStr for CardBrand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" | "master" | "mc" => Ok(Self::Mastercard),
            "amex" | "americanexpress" => Ok(Self::AmericanExpress),
            "diners" | "dinersclub" => Ok(Self::DinersClub),
            _ => Err(ParseError::UnknownBrand(s.to_string())),
        }
    }
}

/// Immutable per-brand generation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandInfo {
    /// Which brand this describes.
    pub brand: CardBrand,
    /// Display name.
    pub name: &'static str,
    /// Numeric prefix generated numbers start with.
    pub prefix: &'static str,
    /// Total digit count of generated numbers.
    pub length: usize,
}

/// Generation table, one entry per [`CardBrand`] in declaration order.
pub const BRANDS: [BrandInfo; 4] = [
    BrandInfo {
        brand: CardBrand::Visa,
        name: "Visa",
        prefix: "4",
        length: 16,
    },
    BrandInfo {
        brand: CardBrand::Mastercard,
        name: "Mastercard",
        prefix: "5",
        length: 16,
    },
    BrandInfo {
        brand: CardBrand::AmericanExpress,
        name: "American Express",
        prefix: "34",
        length: 15,
    },
    BrandInfo {
        brand: CardBrand::DinersClub,
        name: "Diners Club",
        prefix: "30",
        length: 14,
    },
];

/// Inclusive range over the leading `width` digits.
struct PrefixRange {
    low: u32,
    high: u32,
    width: usize,
    brand: CardBrand,
}

const PREFIX_RANGES: [PrefixRange; 8] = [
    PrefixRange {
        low: 4,
        high: 4,
        width: 1,
        brand: CardBrand::Visa,
    },
    PrefixRange {
        low: 5,
        high: 5,
        width: 1,
        brand: CardBrand::Mastercard,
    },
    PrefixRange {
        low: 2221,
        high: 2720,
        width: 4,
        brand: CardBrand::Mastercard,
    },
    PrefixRange {
        low: 34,
        high: 34,
        width: 2,
        brand: CardBrand::AmericanExpress,
    },
    PrefixRange {
        low: 37,
        high: 37,
        width: 2,
        brand: CardBrand::AmericanExpress,
    },
    PrefixRange {
        low: 30,
        high: 30,
        width: 2,
        brand: CardBrand::DinersClub,
    },
    PrefixRange {
        low: 36,
        high: 36,
        width: 2,
        brand: CardBrand::DinersClub,
    },
    PrefixRange {
        low: 38,
        high: 39,
        width: 2,
        brand: CardBrand::DinersClub,
    },
];

fn leading_value(digits: &[u8], width: usize) -> Option<u32> {
    digits
        .get(..width)
        .map(|lead| lead.iter().fold(0u32, |acc, d| acc * 10 + u32::from(*d)))
}

/// Identify the issuer by longest matching prefix.
pub fn classify(digits: &[u8]) -> Option<CardBrand> {
    PREFIX_RANGES
        .iter()
        .filter(|r| {
            leading_value(digits, r.width).is_some_and(|v| (r.low..=r.high).contains(&v))
        })
        .max_by_key(|r| r.width)
        .map(|r| r.brand)
}

/// A Luhn-valid card number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardNumber(DigitSequence);

impl_identifier_traits!(CardNumber);

impl CardNumber {
    /// Issuer by prefix, if recognized.
    pub fn brand(&self) -> Option<CardBrand> {
        classify(self.0.as_slice())
    }
}

impl Identifier for CardNumber {
    const KIND: DocumentKind = DocumentKind::Card;
    type Options = CardBrand;

    fn parse(input: &str) -> Result<Self, ValidationError> {
        let seq = LAYOUT.normalize(input)?;
        if !luhn_is_valid(seq.as_slice()) {
            return Err(ValidationError::InvalidChecksum { kind: Self::KIND });
        }
        Ok(Self(seq))
    }

    fn generate_with<S: DigitSource + ?Sized>(brand: &CardBrand, source: &mut S) -> Self {
        let info = brand.info();
        let mut digits: Vec<u8> = info.prefix.bytes().map(|b| b - b'0').collect();
        let fill = info.length.saturating_sub(digits.len() + 1);
        digits.extend(source.digits(fill));
        let check = luhn_check_digit(&digits);
        digits.push(check);
        Self(DigitSequence::from_trusted(digits))
    }

    fn digits(&self) -> &DigitSequence {
        &self.0
    }

    /// 4-6-5 for 15-digit Amex, 4-6-4 for 14-digit Diners, groups of four
    /// otherwise.
    fn formatted(&self) -> String {
        match (self.brand(), self.0.len()) {
            (Some(CardBrand::AmericanExpress), 15) => self.0.apply_mask("#### ###### #####"),
            (Some(CardBrand::DinersClub), 14) => self.0.apply_mask("#### ###### ####"),
            _ => self
                .0
                .as_slice()
                .chunks(4)
                .map(|group| group.iter().map(|d| char::from(b'0' + d)).collect::<String>())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Result of checking a card number: Luhn status and issuer are reported
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardValidation {
    /// Full classification (format, length, checksum).
    pub outcome: ValidationOutcome,
    /// Luhn result over the stripped digits, regardless of length. `false`
    /// when the input is not all digits.
    pub luhn_valid: bool,
    /// Issuer by prefix; `None` when unrecognized or not all digits.
    pub brand: Option<CardBrand>,
}

impl CardValidation {
    /// Generation record of the detected brand.
    pub fn brand_info(&self) -> Option<&'static BrandInfo> {
        self.brand.map(CardBrand::info)
    }
}

/// Generate a random Luhn-valid number for `brand`.
pub fn generate(brand: CardBrand) -> CardNumber {
    CardNumber::generate_with(&brand, &mut thread_digits())
}

/// Check Luhn compliance and classify the issuer.
pub fn validate(input: &str) -> CardValidation {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let seq = DigitSequence::parse(&compact);
    let luhn_valid = seq.as_ref().is_some_and(|seq| luhn_is_valid(seq.as_slice()));
    let brand = seq.as_ref().and_then(|seq| classify(seq.as_slice()));
    CardValidation {
        outcome: CardNumber::validate(input),
        luhn_valid,
        brand,
    }
}
