//! # Digit Sources
//!
//! Generation draws its random digits through the [`DigitSource`] trait so
//! callers choose where randomness comes from:
//!
//! - [`RngDigits`] wraps any `rand` RNG. [`thread_digits`] uses the
//!   thread-local generator; [`seeded_digits`] gives a reproducible stream.
//! - [`ScriptedDigits`] replays a fixed script, so tests can assert exact
//!   generated values.
//!
//! Cryptographic strength is not required: generated numbers are synthetic
//! test data, not real identifiers.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::digits::DigitSequence;
use crate::document::DocumentKind;

/// Fresh draws a generator makes before it stops trusting its source.
pub(crate) const MAX_REDRAWS: usize = 16;

/// A source of uniformly distributed decimal digits.
pub trait DigitSource {
    /// Next digit in `0..=9`.
    fn next_digit(&mut self) -> u8;

    /// Fill a buffer of `n` digits.
    fn digits(&mut self, n: usize) -> Vec<u8> {
        (0..n).map(|_| self.next_digit()).collect()
    }
}

impl<S: DigitSource + ?Sized> DigitSource for &mut S {
    fn next_digit(&mut self) -> u8 {
        (**self).next_digit()
    }
}

/// Uniform digits drawn from a `rand` RNG.
#[derive(Debug, Clone)]
pub struct RngDigits<R>(R);

impl<R: Rng> RngDigits<R> {
    /// Wrap an RNG.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    /// Unwrap the RNG.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Rng> DigitSource for RngDigits<R> {
    fn next_digit(&mut self) -> u8 {
        self.0.gen_range(0..10)
    }
}

/// Digits from the thread-local RNG.
pub fn thread_digits() -> RngDigits<ThreadRng> {
    RngDigits(rand::thread_rng())
}

/// Reproducible digits from a seeded [`StdRng`].
///
/// The same seed yields the same stream within a given `rand` version.
pub fn seeded_digits(seed: u64) -> RngDigits<StdRng> {
    RngDigits(StdRng::seed_from_u64(seed))
}

/// Replays a fixed digit script, wrapping around at the end.
///
/// Values above 9 are reduced modulo 10. An empty script yields zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedDigits {
    script: Vec<u8>,
    cursor: usize,
}

impl ScriptedDigits {
    /// Script from digit values.
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self {
            script: script.into().into_iter().map(|d| d % 10).collect(),
            cursor: 0,
        }
    }

    /// Script from a string; non-digit characters are ignored.
    pub fn from_str_digits(script: &str) -> Self {
        Self::new(
            script
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect::<Vec<u8>>(),
        )
    }

    /// Number of digits drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl DigitSource for ScriptedDigits {
    fn next_digit(&mut self) -> u8 {
        if self.script.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let d = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        d
    }
}

/// Draw a base and complete it, redrawing while `complete` rejects it.
///
/// After [`MAX_REDRAWS`] rejected draws the last base has its first digit
/// stepped through the other nine values. If none of those completes
/// either, `fallback` (a known-valid full number) is returned. Generation
/// therefore terminates for any source, including one stuck on a digit.
pub(crate) fn draw_accepted<S, D, C>(
    kind: DocumentKind,
    source: &mut S,
    mut draw: D,
    mut complete: C,
    fallback: &[u8],
) -> DigitSequence
where
    S: DigitSource + ?Sized,
    D: FnMut(&mut S) -> Vec<u8>,
    C: FnMut(&[u8]) -> Option<DigitSequence>,
{
    let mut base = Vec::new();
    for _ in 0..MAX_REDRAWS {
        base = draw(&mut *source);
        if let Some(seq) = complete(&base) {
            return seq;
        }
        tracing::trace!(%kind, ?base, "redrawing rejected base");
    }

    if !base.is_empty() {
        for _ in 0..9 {
            base[0] = (base[0] + 1) % 10;
            if let Some(seq) = complete(&base) {
                tracing::debug!(%kind, %seq, "source kept repeating; stepped first digit");
                return seq;
            }
        }
    }

    tracing::warn!(%kind, "no acceptable base from digit source; using fallback");
    DigitSequence::from_trusted(fallback.to_vec())
}
