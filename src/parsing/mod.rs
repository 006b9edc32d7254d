//! Loading assembler input from files.
//!
//! This module provides readers for:
//!
//! - **k-mer lists**: plain text, one or more k-mers per line, `#` comments
//! - **FASTA k-mers**: a FASTA file whose every record is one k-mer
//! - **Genomes**: FASTA or bare sequence text, used to simulate k-mers and to
//!   compare assemblies
//!
//! Files ending in `.gz` or `.bgz` are decompressed on the fly, and `-`
//! stands for stdin.
//!
//! ## Example
//!
//! ```rust
//! use kmer_assembler::parsing::kmers::parse_kmer_text;
//!
//! let kmers = parse_kmer_text("# three 3-mers\nacg\ncgt gta\n").unwrap();
//! assert_eq!(kmers.len(), 3);
//! assert_eq!(kmers.k(), 3);
//! ```

pub mod fasta;
pub mod kmers;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a path for buffered reading, decompressing gzip and treating `-` as stdin
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened.
pub fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
