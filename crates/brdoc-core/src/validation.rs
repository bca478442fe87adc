//! # Validation Outcomes and Input Normalization
//!
//! Every document accepts both its raw digit string and its conventional
//! punctuated form. Normalization is governed by a per-document [`Layout`]:
//!
//! 1. Whitespace is dropped everywhere.
//! 2. Any character that is neither an ASCII digit nor one of the
//!    document's separators is a format error.
//! 3. If any separator is present, the input must follow the document
//!    mask exactly (`#` stands for a digit). Otherwise it is a format error.
//! 4. The digit count must lie within the layout's length bounds.
//!
//! Classification order is format → length → degenerate → checksum; the
//! last two are the responsibility of each document module.

use serde::{Deserialize, Serialize};

use crate::digits::DigitSequence;
use crate::document::DocumentKind;
use crate::error::ValidationError;

/// Classification of a candidate document or card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Well-formed with matching check digit(s).
    Valid,
    /// Non-digit content, or punctuation that does not follow the mask.
    InvalidFormat,
    /// Correct character set, wrong digit count.
    InvalidLength,
    /// All digits identical; well-formed but conventionally rejected.
    DegenerateSequence,
    /// Well-formed, check digit(s) do not match.
    InvalidChecksum,
}

impl ValidationOutcome {
    /// Boolean view: `true` only for [`ValidationOutcome::Valid`].
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// `true` when the input was not shaped like the document at all
    /// (format or length failure), as opposed to document-shaped but wrong.
    pub fn is_malformed(self) -> bool {
        matches!(self, Self::InvalidFormat | Self::InvalidLength)
    }

    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::InvalidFormat => "invalid_format",
            Self::InvalidLength => "invalid_length",
            Self::DegenerateSequence => "degenerate_sequence",
            Self::InvalidChecksum => "invalid_checksum",
        }
    }
}

impl<T> From<&Result<T, ValidationError>> for ValidationOutcome {
    fn from(result: &Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => Self::Valid,
            Err(e) => e.outcome(),
        }
    }
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted textual shape of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Document this layout belongs to.
    pub kind: DocumentKind,
    /// Smallest accepted digit count.
    pub min_len: usize,
    /// Largest accepted digit count.
    pub max_len: usize,
    /// Punctuated display mask, `#` per digit. `None` for documents that
    /// are only written as bare digits.
    pub mask: Option<&'static str>,
    /// Punctuation characters that may appear (only in mask positions).
    pub separators: &'static [char],
}

impl Layout {
    /// Layout for a fixed-width, unpunctuated document.
    pub const fn bare(kind: DocumentKind, len: usize) -> Self {
        Self {
            kind,
            min_len: len,
            max_len: len,
            mask: None,
            separators: &[],
        }
    }

    /// Strip whitespace and punctuation, enforcing format and length.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidFormat`] for foreign characters,
    /// [`ValidationError::InvalidLength`] for a wrong digit count, and
    /// [`ValidationError::InvalidFormat`] again when a correctly sized input
    /// places its separators off the mask.
    pub fn normalize(&self, input: &str) -> Result<DigitSequence, ValidationError> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        let mut digits = Vec::with_capacity(compact.len());
        let mut punctuated = false;
        for c in compact.chars() {
            if c.is_ascii_digit() {
                digits.push(c as u8 - b'0');
            } else if self.separators.contains(&c) {
                punctuated = true;
            } else {
                return Err(self.format_error(input));
            }
        }

        if digits.len() < self.min_len || digits.len() > self.max_len {
            return Err(ValidationError::InvalidLength {
                kind: self.kind,
                min: self.min_len,
                max: self.max_len,
                actual: digits.len(),
            });
        }

        // Separator placement is only judged once the digit count is right.
        if punctuated && !self.matches_mask(&compact) {
            return Err(self.format_error(input));
        }

        Ok(DigitSequence::from_trusted(digits))
    }

    fn matches_mask(&self, compact: &str) -> bool {
        let Some(mask) = self.mask else {
            return false;
        };
        compact.chars().count() == mask.chars().count()
            && compact.chars().zip(mask.chars()).all(|(c, m)| match m {
                '#' => c.is_ascii_digit(),
                sep => c == sep,
            })
    }

    fn format_error(&self, input: &str) -> ValidationError {
        ValidationError::InvalidFormat {
            kind: self.kind,
            input: input.to_string(),
        }
    }
}
