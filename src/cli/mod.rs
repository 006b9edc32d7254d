//! Command-line interface for kmer-assembler.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **assemble**: Assemble a sequence from a k-mer file
//! - **graph**: Export the de Bruijn graph of a k-mer file in DOT format
//! - **simulate**: Cut a random or given genome into (shuffled) k-mers
//! - **compare**: Check whether two sequences share the same k-mer composition
//!
//! ## Usage
//!
//! ```text
//! # Assemble k-mers, one per line
//! kmer-assembler assemble kmers.txt
//!
//! # Simulate k-mers from a random genome and assemble them
//! kmer-assembler simulate -k 20 --length 10000 --genome-output truth.txt \
//!     | kmer-assembler assemble - --output assembled.txt
//!
//! # Check the assembly against the truth
//! kmer-assembler compare truth.txt assembled.txt -k 20
//!
//! # Visualize the graph
//! kmer-assembler graph kmers.txt --output graph.dot
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::{Parser, Subcommand};

pub mod assemble;
pub mod compare;
pub mod graph;
pub mod simulate;

#[derive(Parser)]
#[command(name = "kmer-assembler")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Assemble genome sequences from k-mers using de Bruijn graphs")]
#[command(
    long_about = "kmer-assembler reconstructs a sequence from an unordered collection of its k-mers.\n\nIt builds a de Bruijn graph whose edges are the k-mers and whose nodes are their (k-1)-mer overlaps, then finds a walk that uses every edge exactly once (an Eulerian path) and spells the sequence along it.\n\nWhen the walk is not unique the result has the same k-mer composition as the original, though it may not be identical."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble a sequence from k-mers
    Assemble(assemble::AssembleArgs),

    /// Export the de Bruijn graph in DOT format
    Graph(graph::GraphArgs),

    /// Generate k-mers from a random or given genome
    Simulate(simulate::SimulateArgs),

    /// Compare the k-mer composition of two sequences
    Compare(compare::CompareArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Open the output destination: a file if given, stdout otherwise
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(Box::new(BufWriter::new(File::create(path)?))),
        _ => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
