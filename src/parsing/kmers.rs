use std::io::BufRead;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::core::error::AssemblyError;
use crate::core::kmer::KmerSet;
use crate::parsing::fasta::{is_fasta_file, read_sequences};
use crate::parsing::open_input;
use crate::utils::validation::{at_kmer_limit, MAX_KMERS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many k-mers: {0} exceeds maximum allowed ({max})", max = MAX_KMERS)]
    TooManyKmers(usize),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

/// Load k-mers from a file.
///
/// FASTA files (see [`is_fasta_file`]) contribute one k-mer per record.
/// Anything else is read as a k-mer list (see [`parse_kmer_reader`]).
/// `-` reads a k-mer list from stdin.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// for malformed FASTA, `ParseError::TooManyKmers` if the limit is exceeded,
/// or `ParseError::Assembly` if the k-mers themselves are invalid.
pub fn parse_kmer_file(path: &Path) -> Result<KmerSet, ParseError> {
    let kmers = if is_fasta_file(path) {
        let records = read_sequences(path)?;
        if records.len() > MAX_KMERS {
            return Err(ParseError::TooManyKmers(records.len()));
        }
        KmerSet::new(records.into_iter().map(|record| record.sequence))?
    } else {
        parse_kmer_reader(open_input(path)?)?
    };

    debug!(
        path = %path.display(),
        kmers = kmers.len(),
        k = kmers.k(),
        "Loaded k-mers"
    );

    Ok(kmers)
}

/// Parse a k-mer list from text
///
/// # Errors
///
/// See [`parse_kmer_reader`].
pub fn parse_kmer_text(text: &str) -> Result<KmerSet, ParseError> {
    parse_kmer_reader(text.as_bytes())
}

/// Parse a k-mer list.
///
/// Each whitespace-separated token is a k-mer. Blank lines and lines starting
/// with `#` are skipped.
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails, `ParseError::TooManyKmers` if
/// the limit is exceeded, or `ParseError::Assembly` if the k-mers are empty,
/// of mixed length, or contain non-nucleotide characters.
pub fn parse_kmer_reader<R: BufRead>(reader: R) -> Result<KmerSet, ParseError> {
    let mut kmers = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for token in line.split_whitespace() {
            if at_kmer_limit(kmers.len()) {
                return Err(ParseError::TooManyKmers(kmers.len()));
            }
            kmers.push(token.to_string());
        }
    }

    Ok(KmerSet::new(kmers)?)
}
