//! The de Bruijn graph and the algorithms that run on it.
//!
//! - [`builder`]: arena-backed multigraph built from k-mers
//! - [`degree`]: balance and connectivity analysis, path existence
//! - [`euler`]: Hierholzer's algorithm, producing a [`euler::Walk`]
//! - [`dot`]: DOT export for visualization
//!
//! ## Example
//!
//! ```rust
//! use kmer_assembler::graph::builder::DeBruijnGraph;
//! use kmer_assembler::graph::degree::DegreeAnalysis;
//! use kmer_assembler::graph::euler::EulerianWalker;
//!
//! let graph = DeBruijnGraph::build(["cgt", "acg", "gta"]).unwrap();
//! let analysis = DegreeAnalysis::analyze(&graph);
//! assert!(analysis.has_eulerian_path());
//!
//! let walk = EulerianWalker::new(graph, &analysis).unwrap().walk().unwrap();
//! assert_eq!(walk.labels().collect::<Vec<_>>(), vec!["ac", "cg", "gt", "ta"]);
//! ```

pub mod builder;
pub mod degree;
pub mod dot;
pub mod euler;
