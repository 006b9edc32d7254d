//! # kmer-assembler
//!
//! A library for reconstructing a sequence from an unordered collection of its k-mers.
//!
//! Given every length-k substring of an unknown genome, shuffled, the genome can be
//! recovered by building a de Bruijn graph and walking it. Each k-mer becomes an edge
//! from its (k-1)-base prefix to its (k-1)-base suffix; a walk that uses every edge
//! exactly once (an Eulerian path) spells out a sequence with exactly the input k-mers.
//!
//! When the graph has repeated (k-1)-mers there may be several such walks. The
//! assembled sequence then has the same k-mer composition as the original but is not
//! necessarily identical to it.
//!
//! ## Features
//!
//! - **Multigraph construction**: Repeated k-mers become parallel edges, never merged
//! - **Degree analysis**: Decides whether a walk exists and where it must start and end
//! - **Hierholzer's algorithm**: Linear-time walk with constant-time edge removal
//! - **Typed failures**: Invalid input and missing Eulerian paths are distinct errors
//! - **DOT export**: Inspect the graph with Graphviz
//!
//! ## Example
//!
//! ```rust
//! use kmer_assembler::{Assembler, KmerSet};
//!
//! let kmers = KmerSet::new(["gca", "agc", "cag", "agc", "gct"]).unwrap();
//! let result = Assembler::default().assemble(&kmers).unwrap();
//!
//! assert_eq!(result.sequence.len(), 7);
//! assert_eq!(result.edge_count, 5);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: K-mer sets, node ids, and error types
//! - [`graph`]: De Bruijn graph construction, degree analysis, Eulerian walks, DOT export
//! - [`assembly`]: The end-to-end assembler and sequence reconstruction
//! - [`parsing`]: Readers for k-mer lists and FASTA files
//! - [`utils`]: Validation helpers and sequence utilities
//! - [`cli`]: Command-line interface implementation

pub mod assembly;
pub mod cli;
pub mod core;
pub mod graph;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use assembly::{assemble_kmers, Assembler, AssemblyConfig, AssemblyResult};
pub use core::error::{AssemblyError, PathObstruction};
pub use core::kmer::KmerSet;
pub use core::types::*;
pub use graph::builder::DeBruijnGraph;
pub use graph::degree::DegreeAnalysis;
pub use graph::euler::{EulerianWalker, Walk};
