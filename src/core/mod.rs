//! Core data types for k-mer assembly.
//!
//! - [`KmerSet`]: a validated, non-empty multiset of equal-length k-mers
//! - [`NodeId`]: arena index of a (k-1)-mer node
//! - [`PathKind`], [`PathEnds`]: shape and endpoints of an Eulerian walk
//! - [`AssemblyError`], [`PathObstruction`]: failure taxonomy
//!
//! ## Balance convention
//!
//! Throughout the crate a node's balance is `indegree - outdegree`. An open
//! Eulerian path starts at the node with balance `-1` and ends at the node
//! with balance `+1`.
//!
//! [`KmerSet`]: kmer::KmerSet
//! [`NodeId`]: types::NodeId
//! [`PathKind`]: types::PathKind
//! [`PathEnds`]: types::PathEnds
//! [`AssemblyError`]: error::AssemblyError
//! [`PathObstruction`]: error::PathObstruction

pub mod error;
pub mod kmer;
pub mod types;
