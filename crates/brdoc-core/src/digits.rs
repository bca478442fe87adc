//! # Digit Sequences
//!
//! [`DigitSequence`] is the shared value type underneath every document:
//! an ordered run of base-10 digit values. Each element is guaranteed to be
//! in `0..=9`; the exact length is enforced by the document that owns it.

use serde::{Deserialize, Serialize};

/// An ordered sequence of decimal digits.
///
/// Displays as the bare digit string (`"11144477735"`). Serializes the
/// same way; deserialization rejects anything but ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    /// Build a sequence from digit values.
    ///
    /// Returns `None` if any value is greater than 9.
    pub fn new(digits: Vec<u8>) -> Option<Self> {
        digits.iter().all(|d| *d <= 9).then_some(Self(digits))
    }

    /// Parse a string made only of ASCII digits.
    ///
    /// Returns `None` on any other character. No separators are stripped;
    /// document-level normalization lives in [`crate::validation::Layout`].
    pub fn parse(s: &str) -> Option<Self> {
        s.bytes()
            .map(|b| b.is_ascii_digit().then(|| b - b'0'))
            .collect::<Option<Vec<u8>>>()
            .map(Self)
    }

    /// Caller guarantees every value is `0..=9`.
    pub(crate) fn from_trusted(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|d| *d <= 9));
        Self(digits)
    }

    /// Digit values in order.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` when the sequence is non-empty and every digit is the same.
    pub fn is_repeated(&self) -> bool {
        match self.0.split_first() {
            Some((first, rest)) => rest.iter().all(|d| d == first),
            None => false,
        }
    }

    /// Split into the leading base digits and the trailing `n` check digits.
    pub fn split_check(&self, n: usize) -> (&[u8], &[u8]) {
        self.0.split_at(self.0.len().saturating_sub(n))
    }

    /// Render through a mask where every `#` consumes the next digit and
    /// every other character is copied verbatim. Digits beyond the mask
    /// are appended; unfilled `#` positions are dropped.
    pub fn apply_mask(&self, mask: &str) -> String {
        let mut digits = self.0.iter();
        let mut out = String::with_capacity(mask.len());
        for m in mask.chars() {
            if m == '#' {
                match digits.next() {
                    Some(d) => out.push(char::from(b'0' + d)),
                    None => break,
                }
            } else {
                out.push(m);
            }
        }
        out.extend(digits.map(|d| char::from(b'0' + d)));
        out
    }
}

impl std::fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for DigitSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for DigitSequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DigitSequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("not a digit string: {raw:?}")))
    }
}
