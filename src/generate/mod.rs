use crate::data::err::GenerateError;
use rand_xoshiro::rand_core::RngCore;

/// Generates a reproducible random sequence of `length` symbols drawn from
/// `alpha`.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    use rand_xoshiro::{Xoshiro256PlusPlus, rand_core::SeedableRng};

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Kinds of edit operations applied by [`mutate_pattern`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MutationKind {
    /// Substitutions only; the mutated pattern keeps its length.
    Substitution,
    /// A random mix of substitutions, insertions, and deletions.
    Mixed,
}

/// Extracts a substring of `length` symbols from a random position in
/// `text`, guaranteeing the result actually occurs in the text. Useful for
/// producing patterns for exact-search benchmarks.
///
/// ## Errors
///
/// Returns [`GenerateError::PatternTooLong`] if `length` exceeds the text
/// length.
pub fn extract_pattern(text: &[u8], length: usize, rng: &mut impl RngCore) -> Result<Vec<u8>, GenerateError> {
    if length > text.len() {
        return Err(GenerateError::PatternTooLong {
            requested: length,
            available: text.len(),
        });
    }

    let start = rand_index(rng, text.len() - length + 1);
    Ok(text[start..start + length].to_vec())
}

/// Applies `edits` random edit operations to `pattern`, simulating
/// sequencing errors for approximate-search benchmarks. Substituted and
/// inserted symbols are drawn from `alpha`, which must be non-empty.
///
/// The result can end up within fewer than `edits` of the original, since
/// operations may cancel each other out.
#[must_use]
pub fn mutate_pattern(
    pattern: &[u8], alpha: &[u8], edits: usize, kind: MutationKind, rng: &mut impl RngCore,
) -> Vec<u8> {
    let mut mutated = pattern.to_vec();

    for _ in 0..edits {
        let op = match kind {
            MutationKind::Substitution => 0,
            MutationKind::Mixed => rand_index(rng, 3),
        };

        match op {
            0 if !mutated.is_empty() => {
                let i = rand_index(rng, mutated.len());
                let current = mutated[i];
                let choices: Vec<u8> = alpha.iter().copied().filter(|b| *b != current).collect();
                if !choices.is_empty() {
                    mutated[i] = choices[rand_index(rng, choices.len())];
                }
            }
            1 => {
                // Insertion at the end is allowed.
                let i = rand_index(rng, mutated.len() + 1);
                mutated.insert(i, alpha[rand_index(rng, alpha.len())]);
            }
            2 if !mutated.is_empty() => {
                let i = rand_index(rng, mutated.len());
                mutated.remove(i);
            }
            _ => {}
        }
    }

    mutated
}

#[inline]
fn rand_index(rng: &mut impl RngCore, bound: usize) -> usize {
    rng.next_u32() as usize % bound
}
