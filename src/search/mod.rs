/// Boyer–Moore exact matching.
mod boyer_moore;
/// Approximate matching under an edit-distance threshold.
mod inexact;
/// Knuth–Morris–Pratt exact matching.
mod kmp;
/// Naive baseline substring search.
mod substring;

pub use boyer_moore::*;
pub use inexact::*;
pub use kmp::*;
pub use substring::*;

/// The exact-matching algorithm used by [`exact_search`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExactAlgorithm {
    /// Right-to-left scanning with bad-character and good-suffix shifts.
    BoyerMoore,
    /// Two-pointer linear scan over an LPS table.
    Kmp,
}

/// Finds all occurrences of `pattern` in `text` with the chosen exact
/// matching algorithm.
///
/// Matches are ascending 0-indexed start offsets and include overlapping
/// occurrences. An empty pattern or a pattern longer than the text yields no
/// matches.
///
/// # Example
/// ```
/// use motif::search::{ExactAlgorithm, exact_search};
///
/// let text = b"AAAAAAA";
/// assert_eq!(exact_search(text, b"AAA", ExactAlgorithm::Kmp), vec![0, 1, 2, 3, 4]);
/// ```
#[inline]
#[must_use]
pub fn exact_search(text: &[u8], pattern: &[u8], algorithm: ExactAlgorithm) -> Vec<usize> {
    match algorithm {
        ExactAlgorithm::BoyerMoore => boyer_moore_search(text, pattern),
        ExactAlgorithm::Kmp => kmp_search(text, pattern),
    }
}

/// Similar to [`exact_search`] but also tallies the number of symbol
/// comparisons performed, for empirical complexity analysis.
#[inline]
#[must_use]
pub fn exact_search_tallied(text: &[u8], pattern: &[u8], algorithm: ExactAlgorithm) -> (Vec<usize>, u64) {
    match algorithm {
        ExactAlgorithm::BoyerMoore => boyer_moore_search_tallied(text, pattern),
        ExactAlgorithm::Kmp => kmp_search_tallied(text, pattern),
    }
}
