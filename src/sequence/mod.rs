//! Fibonacci sequence generation
//!
//! The generator is a pure function of the requested count: it seeds
//! `[0, 1]` and advances two running terms until the sequence holds `n`
//! elements. Element `i` of the result is always `F(i)`.
//!
//! # Example
//!
//! ```rust
//! use fibseq::sequence::fibonacci;
//!
//! let seq = fibonacci(10);
//! assert_eq!(seq.into_vec(), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
//! ```

use std::convert::Infallible;
use std::ops::Deref;

use serde::Serialize;
use tracing::debug;

/// A single Fibonacci term
pub type Term = u128;

/// Number of leading Fibonacci terms representable as [`Term`].
///
/// `F(186)` is the largest value below `u128::MAX`; `F(187)` overflows.
pub const MAX_TERMS: usize = 187;

/// Generation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The term at `index` does not fit in a [`Term`]
    #[error("F({index}) exceeds the range of a 128-bit term")]
    Overflow { index: usize },
}

/// The first `n` Fibonacci numbers, index-aligned with `F(i)`.
///
/// Built once by [`fibonacci`] or [`try_fibonacci`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence(Vec<Term>);

impl Sequence {
    /// Number of terms
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `F(index)`, if the sequence reaches that far
    #[inline]
    pub fn term(
        &self,
        index: usize,
    ) -> Option<Term> {
        self.0.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Term] {
        &self.0
    }

    /// Iterate over the terms in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.0.iter()
    }

    /// Consume the sequence, returning the underlying terms
    pub fn into_vec(self) -> Vec<Term> {
        self.0
    }
}

impl Deref for Sequence {
    type Target = [Term];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Term]> for Sequence {
    fn as_ref(&self) -> &[Term] {
        &self.0
    }
}

impl IntoIterator for Sequence {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[Term]> for Sequence {
    fn eq(
        &self,
        other: &[Term],
    ) -> bool {
        self.0 == other
    }
}

impl PartialEq<Vec<Term>> for Sequence {
    fn eq(
        &self,
        other: &Vec<Term>,
    ) -> bool {
        &self.0 == other
    }
}

/// Generate the first `n` Fibonacci numbers, starting at `F(0) = 0`.
///
/// Total over every `i64`: counts `<= 0` yield an empty sequence. Terms past
/// `F(186)` cannot be represented and saturate at `Term::MAX`; use
/// [`try_fibonacci`] to reject such counts instead.
pub fn fibonacci(n: i64) -> Sequence {
    match build(n, |_| Ok::<_, Infallible>(Term::MAX)) {
        Ok(seq) => seq,
        Err(never) => match never {},
    }
}

/// Like [`fibonacci`], but fails on the first term that overflows.
///
/// Succeeds for every `n <= MAX_TERMS`.
pub fn try_fibonacci(n: i64) -> Result<Sequence, SequenceError> {
    build(n, |index| Err(SequenceError::Overflow { index }))
}

/// Non-positive counts clamp to zero
fn clamp_count(n: i64) -> usize {
    if n <= 0 {
        0
    } else {
        usize::try_from(n).unwrap_or(usize::MAX)
    }
}

fn build<E>(
    n: i64,
    on_overflow: impl Fn(usize) -> Result<Term, E>,
) -> Result<Sequence, E> {
    let len = clamp_count(n);

    let mut terms: Vec<Term> = match len {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            let mut terms = Vec::with_capacity(len.min(MAX_TERMS));
            terms.extend_from_slice(&[0, 1]);
            terms
        }
    };

    for i in 2..len {
        let next = match terms[i - 1].checked_add(terms[i - 2]) {
            Some(term) => term,
            None => on_overflow(i)?,
        };
        terms.push(next);
    }

    debug!(count = n, len = terms.len(), "generated fibonacci sequence");
    Ok(Sequence(terms))
}

#[cfg(test)]
mod tests;
