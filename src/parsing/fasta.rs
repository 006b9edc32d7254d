//! Reading genome sequences from FASTA files using noodles.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, Read};
use std::path::Path;

use noodles::fasta;
use tracing::warn;

use crate::parsing::kmers::ParseError;
use crate::parsing::open_input;

/// A named sequence read from a FASTA file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaSequence {
    pub name: String,
    pub sequence: String,
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Read every record of a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if a record is malformed, or `ParseError::InvalidFormat` if the file has no
/// records.
pub fn read_sequences(path: &Path) -> Result<Vec<FastaSequence>, ParseError> {
    let reader = open_input(path)?;
    let mut fasta_reader = fasta::io::Reader::new(reader);
    read_sequences_from(&mut fasta_reader)
}

/// Read every record from a noodles FASTA reader
fn read_sequences_from<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<FastaSequence>, ParseError> {
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = String::from_utf8_lossy(record.sequence().as_ref()).to_string();

        sequences.push(FastaSequence { name, sequence });
    }

    if sequences.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(sequences)
}

/// Read a single genome sequence from a file.
///
/// FASTA input (by extension, or text starting with `>`) yields the first
/// record; other records are ignored with a warning. Anything else is treated
/// as bare sequence text, with line breaks and surrounding whitespace removed.
/// `-` reads from stdin.
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read, `ParseError::Noodles`
/// for malformed FASTA, or `ParseError::InvalidFormat` if no sequence is found.
pub fn read_genome(path: &Path) -> Result<String, ParseError> {
    let mut text = String::new();
    open_input(path)?.read_to_string(&mut text)?;

    if is_fasta_file(path) || text.trim_start().starts_with('>') {
        let mut fasta_reader = fasta::io::Reader::new(text.as_bytes());
        let mut sequences = read_sequences_from(&mut fasta_reader)?;
        if sequences.len() > 1 {
            warn!(
                records = sequences.len(),
                using = %sequences[0].name,
                "FASTA input has several records, using the first"
            );
        }
        return Ok(sequences.swap_remove(0).sequence);
    }

    parse_sequence_text(&text)
}

/// Join the non-empty lines of bare sequence text
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the text contains no sequence.
pub fn parse_sequence_text(text: &str) -> Result<String, ParseError> {
    let sequence: String = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if sequence.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequence found in input".to_string(),
        ));
    }

    Ok(sequence)
}
