/// Levenshtein edit-distance functions.
mod edit;

pub use edit::*;
