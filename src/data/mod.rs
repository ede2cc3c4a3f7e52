/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// FASTA-style sequence input.
pub mod fasta;
