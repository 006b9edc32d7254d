//! Sequence utilities used to produce and check assembler input.
//!
//! These helpers generate synthetic genomes, cut them into k-mers and compare
//! the k-mer composition of two sequences. They are what the `simulate` and
//! `compare` commands are built on, and what the tests use to check that an
//! assembly reproduces its source.

use rand::seq::SliceRandom;
use rand::Rng;

/// Alphabet used for generated sequences
pub const NUCLEOTIDES: &[u8; 4] = b"atgc";

/// Generate a random DNA sequence with a length drawn uniformly from
/// `min_length..=max_length`. Bases are drawn uniformly from [`NUCLEOTIDES`].
///
/// If `max_length < min_length`, `min_length` is used as the length.
pub fn random_dna_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    min_length: usize,
    max_length: usize,
) -> String {
    let length = if max_length <= min_length {
        min_length
    } else {
        rng.gen_range(min_length..=max_length)
    };

    (0..length)
        .map(|_| char::from(NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())]))
        .collect()
}

/// All k-mers of `sequence` in sliding-window order.
///
/// Returns an empty vector when `k` is zero or longer than the sequence.
/// The sequence is expected to be ASCII.
#[must_use]
pub fn extract_kmers(sequence: &str, k: usize) -> Vec<String> {
    if k == 0 || k > sequence.len() {
        return Vec::new();
    }

    (0..=sequence.len() - k)
        .map(|i| sequence[i..i + k].to_string())
        .collect()
}

/// Shuffle k-mers into a uniformly random order
pub fn shuffle_kmers<R: Rng + ?Sized>(kmers: &mut [String], rng: &mut R) {
    kmers.shuffle(rng);
}

/// The k-mer composition of a sequence: all k-mers in dictionary order
#[must_use]
pub fn composition(sequence: &str, k: usize) -> Vec<String> {
    let mut kmers = extract_kmers(sequence, k);
    kmers.sort_unstable();
    kmers
}

/// Check whether two sequences have the same k-mer composition.
///
/// Sequences of different length never match; identical sequences always do.
#[must_use]
pub fn same_composition(a: &str, b: &str, k: usize) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a == b {
        return true;
    }
    composition(a, k) == composition(b, k)
}
