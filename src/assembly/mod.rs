//! End-to-end assembly: k-mers in, sequence out.
//!
//! [`Assembler`] runs the full pipeline: build the de Bruijn graph, check
//! that an Eulerian walk exists, walk it, and spell the sequence.
//!
//! ## Example
//!
//! ```rust
//! use kmer_assembler::assembly::assemble_kmers;
//!
//! let sequence = assemble_kmers(["gta", "acg", "cgt"]).unwrap();
//! assert_eq!(sequence, "acgta");
//! ```

pub mod reconstruct;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::error::AssemblyError;
use crate::core::kmer::KmerSet;
use crate::core::types::PathKind;
use crate::graph::builder::DeBruijnGraph;
use crate::graph::degree::DegreeAnalysis;
use crate::graph::dot::write_dot;
use crate::graph::euler::EulerianWalker;
use crate::utils::validation::sequence_md5;

use self::reconstruct::reconstruct_sequence;

/// Configuration for the assembler
#[derive(Debug, Clone, Default)]
pub struct AssemblyConfig {
    /// Write the de Bruijn graph in DOT format here before walking it
    pub dot_output: Option<PathBuf>,
}

/// Outcome of a successful assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyResult {
    /// The assembled sequence
    pub sequence: String,

    /// Length of the input k-mers
    pub k: usize,

    /// Number of input k-mers, counting repeats
    pub kmer_count: usize,

    /// Number of distinct (k-1)-mers
    pub node_count: usize,

    /// Number of edges traversed (equals `kmer_count`)
    pub edge_count: usize,

    /// Whether the walk was an open path or a circuit
    pub path_kind: PathKind,

    /// Label of the first node of the walk
    pub start_label: String,

    /// Label of the last node of the walk
    pub end_label: String,

    /// MD5 of the uppercase sequence
    pub md5: String,
}

impl AssemblyResult {
    #[must_use]
    pub fn length(&self) -> usize {
        self.sequence.len()
    }
}

/// Runs the assembly pipeline
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    config: AssemblyConfig,
}

impl Assembler {
    #[must_use]
    pub fn new(config: AssemblyConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Assemble a validated k-mer set.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::NoEulerianPath` if the k-mers cannot be chained
    /// into a single walk.
    pub fn assemble(&self, kmers: &KmerSet) -> Result<AssemblyResult, AssemblyError> {
        info!(kmers = kmers.len(), k = kmers.k(), "Assembling k-mers");

        let graph = DeBruijnGraph::from_kmer_set(kmers);
        self.export_dot(&graph);

        let k = graph.k();
        let kmer_count = kmers.len();
        let node_count = graph.node_count();

        let analysis = DegreeAnalysis::analyze(&graph);
        let walk = EulerianWalker::new(graph, &analysis)?.walk()?;
        debug_assert_eq!(walk.edge_count(), kmer_count);

        let sequence = reconstruct_sequence(&walk);
        let md5 = sequence_md5(&sequence);

        info!(
            length = sequence.len(),
            path_kind = %walk.kind(),
            "Assembly complete"
        );

        Ok(AssemblyResult {
            k,
            kmer_count,
            node_count,
            edge_count: walk.edge_count(),
            path_kind: walk.kind(),
            start_label: walk.first_label().to_string(),
            end_label: walk.last_label().to_string(),
            md5,
            sequence,
        })
    }

    /// Write the DOT file if one was requested. Failures are logged, not
    /// fatal: the export is diagnostic only.
    fn export_dot(&self, graph: &DeBruijnGraph) {
        let Some(path) = &self.config.dot_output else {
            return;
        };

        let result = File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            write_dot(graph, &mut writer)
        });

        match result {
            Ok(()) => info!(path = %path.display(), "Wrote de Bruijn graph"),
            Err(e) => warn!(
                path = %path.display(),
                error = %e,
                "Failed to write DOT file, continuing"
            ),
        }
    }
}

/// Assemble raw k-mers with the default configuration and return the sequence.
///
/// # Errors
///
/// Returns `AssemblyError::InvalidInput` for empty or malformed k-mers, or
/// `AssemblyError::NoEulerianPath` if no walk uses every k-mer exactly once.
pub fn assemble_kmers<I, S>(kmers: I) -> Result<String, AssemblyError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let kmers = KmerSet::new(kmers)?;
    Assembler::default()
        .assemble(&kmers)
        .map(|result| result.sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PathObstruction;

    #[test]
    fn test_assemble_kmers_unique_path() {
        assert_eq!(assemble_kmers(["cgt", "gta", "acg"]).unwrap(), "acgta");
    }

    #[test]
    fn test_assemble_result_fields() {
        let kmers = KmerSet::new(["cgt", "gta", "acg"]).unwrap();
        let result = Assembler::default().assemble(&kmers).unwrap();

        assert_eq!(result.sequence, "acgta");
        assert_eq!(result.length(), 5);
        assert_eq!(result.k, 3);
        assert_eq!(result.kmer_count, 3);
        assert_eq!(result.node_count, 4);
        assert_eq!(result.edge_count, 3);
        assert_eq!(result.path_kind, PathKind::Open);
        assert_eq!(result.start_label, "ac");
        assert_eq!(result.end_label, "ta");
        assert_eq!(result.md5, sequence_md5("ACGTA"));
    }

    #[test]
    fn test_assemble_homogeneous() {
        let kmers = vec!["aaaaa"; 7];
        let sequence = assemble_kmers(kmers).unwrap();
        assert_eq!(sequence, "aaaaaaaaaaa");
    }

    #[test]
    fn test_assemble_errors() {
        assert!(matches!(
            assemble_kmers(Vec::<String>::new()),
            Err(AssemblyError::InvalidInput(_))
        ));
        assert!(matches!(
            assemble_kmers(["acg", "ttg"]),
            Err(AssemblyError::NoEulerianPath(PathObstruction::MultipleSources(2)))
        ));
    }

    #[test]
    fn test_assemble_writes_dot() {
        let dir = tempfile::tempdir().unwrap();
        let dot_path = dir.path().join("graph.dot");
        let assembler = Assembler::new(AssemblyConfig {
            dot_output: Some(dot_path.clone()),
        });

        let kmers = KmerSet::new(["acg", "cgt"]).unwrap();
        assembler.assemble(&kmers).unwrap();

        let dot = std::fs::read_to_string(&dot_path).unwrap();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("ac->cg [label=acg];"));
        assert!(dot.contains("cg->gt [label=cgt];"));
    }

    #[test]
    fn test_assemble_survives_unwritable_dot_path() {
        let dir = tempfile::tempdir().unwrap();
        let assembler = Assembler::new(AssemblyConfig {
            dot_output: Some(dir.path().join("missing").join("graph.dot")),
        });

        let kmers = KmerSet::new(["acg", "cgt"]).unwrap();
        assert_eq!(assembler.assemble(&kmers).unwrap().sequence, "acgt");
    }
}
