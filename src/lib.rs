#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

/// Data import and error handling functions.
pub mod data;
/// Distance functions for sequence data.
pub mod distance;

/// Generate sequences and mutated patterns.
#[cfg(feature = "rand")]
pub mod generate;
/// Exact and approximate sequence search.
pub mod search;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::err::OrFail;
    pub use crate::data::fasta::{FastaReader, load_sequence};
    pub use crate::distance::{edit_distance, edit_distance_tallied};
    #[cfg(feature = "rand")]
    pub use crate::generate::{MutationKind, extract_pattern, mutate_pattern, rand_sequence};
    pub use crate::search::{
        ApproximateStrategy, ExactAlgorithm, approximate_search, approximate_search_tallied, exact_search,
        exact_search_tallied,
    };
}
