use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::core::error::AssemblyError;
use crate::core::kmer::KmerSet;
use crate::core::types::NodeId;

/// A de Bruijn multigraph built from k-mers.
///
/// Nodes are the distinct (k-1)-mers seen as a prefix or suffix of some k-mer,
/// stored in an arena and addressed by [`NodeId`]. Each k-mer contributes one
/// edge from its prefix node to its suffix node; repeated k-mers give parallel
/// edges.
#[derive(Debug, Clone)]
pub struct DeBruijnGraph {
    /// k of the k-mers the graph was built from (labels have length k-1)
    k: usize,

    /// Node labels, indexed by `NodeId`
    labels: Vec<String>,

    /// Index: label -> node id
    label_to_id: HashMap<String, NodeId>,

    /// Outgoing edge targets per node, in insertion order
    outgoing: Vec<VecDeque<NodeId>>,

    /// Incoming edge count per node
    incoming: Vec<usize>,

    edge_count: usize,
}

impl DeBruijnGraph {
    /// Build a graph from raw k-mers, validating them first.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::InvalidInput` if the k-mers are empty, have
    /// inconsistent or too-short lengths, or contain non-nucleotide characters.
    pub fn build<I, S>(kmers: I) -> Result<Self, AssemblyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kmers = KmerSet::new(kmers)?;
        Ok(Self::from_kmer_set(&kmers))
    }

    /// Build a graph from an already validated k-mer set
    #[must_use]
    pub fn from_kmer_set(kmers: &KmerSet) -> Self {
        let k = kmers.k();
        let mut graph = Self::with_capacity(k, kmers.len());

        for kmer in kmers.iter() {
            let from = graph.intern(&kmer[..k - 1]);
            let to = graph.intern(&kmer[1..]);
            graph.add_edge(from, to);
        }

        debug!(
            k,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built de Bruijn graph"
        );

        graph
    }

    fn with_capacity(k: usize, kmer_count: usize) -> Self {
        // A genome-like input has roughly one new node per k-mer
        Self {
            k,
            labels: Vec::with_capacity(kmer_count + 1),
            label_to_id: HashMap::with_capacity(kmer_count + 1),
            outgoing: Vec::with_capacity(kmer_count + 1),
            incoming: Vec::with_capacity(kmer_count + 1),
            edge_count: 0,
        }
    }

    /// Look up a label, creating the node the first time it is seen
    fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }
        let id = NodeId(self.labels.len());
        self.labels.push(label.to_string());
        self.label_to_id.insert(label.to_string(), id);
        self.outgoing.push(VecDeque::new());
        self.incoming.push(0);
        id
    }

    /// Append an edge `from -> to`. Both nodes must already exist.
    pub(crate) fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.outgoing[from.index()].push_back(to);
        self.incoming[to.index()] += 1;
        self.edge_count += 1;
    }

    /// Remove and return the next outgoing edge target of `node`, if any.
    ///
    /// Edges are taken in insertion order. This is the only way edges leave
    /// the graph, and each call is O(1).
    pub fn take_next_edge(&mut self, node: NodeId) -> Option<NodeId> {
        let next = self.outgoing[node.index()].pop_front()?;
        self.incoming[next.index()] -= 1;
        self.edge_count -= 1;
        Some(next)
    }

    /// k of the k-mers the graph was built from
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges currently in the graph
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True once every edge has been taken
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.edge_count == 0
    }

    #[must_use]
    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node.index()]
    }

    /// Find the node with the given (k-1)-mer label
    #[must_use]
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.label_to_id.get(label).copied()
    }

    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.outgoing[node.index()].len()
    }

    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.incoming[node.index()]
    }

    /// Targets of the remaining outgoing edges of `node`, repeats included
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing[node.index()].iter().copied()
    }

    /// All node ids in creation order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.labels.len()).map(NodeId)
    }

    /// All remaining edges as `(from, to)` pairs, grouped by source node
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.outgoing
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (NodeId(from), to)))
    }

    /// Give up the label arena. Used by the walker once the graph is drained.
    pub(crate) fn into_labels(self) -> Vec<String> {
        self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_simple_chain() {
        let graph = DeBruijnGraph::build(["acg", "cgt", "gta"]).unwrap();
        assert_eq!(graph.k(), 3);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);

        let ac = graph.node_id("ac").unwrap();
        let cg = graph.node_id("cg").unwrap();
        assert_eq!(graph.successors(ac).collect::<Vec<_>>(), vec![cg]);
        assert_eq!(graph.out_degree(ac), 1);
        assert_eq!(graph.in_degree(ac), 0);
        assert_eq!(graph.in_degree(cg), 1);
        assert!(graph.node_id("tt").is_none());
    }

    #[test]
    fn test_nodes_created_in_first_seen_order() {
        let graph = DeBruijnGraph::build(["gta", "acg"]).unwrap();
        let labels: Vec<&str> = graph.nodes().map(|id| graph.label(id)).collect();
        assert_eq!(labels, vec!["gt", "ta", "ac", "cg"]);
    }

    #[test]
    fn test_duplicate_kmers_give_parallel_edges() {
        let graph = DeBruijnGraph::build(["acg", "acg", "acg"]).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 3);

        let ac = graph.node_id("ac").unwrap();
        let cg = graph.node_id("cg").unwrap();
        assert_eq!(graph.out_degree(ac), 3);
        assert_eq!(graph.in_degree(cg), 3);
    }

    #[test]
    fn test_self_loop() {
        let graph = DeBruijnGraph::build(["aaaa", "aaaa"]).unwrap();
        assert_eq!(graph.node_count(), 1);
        let aaa = graph.node_id("aaa").unwrap();
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(aaa, aaa), (aaa, aaa)]);
        assert_eq!(graph.in_degree(aaa), 2);
        assert_eq!(graph.out_degree(aaa), 2);
    }

    #[test]
    fn test_case_is_preserved_and_significant() {
        let graph = DeBruijnGraph::build(["ACG", "acg"]).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert!(graph.node_id("AC").is_some());
        assert!(graph.node_id("ac").is_some());
    }

    #[test]
    fn test_take_next_edge_drains_in_insertion_order() {
        let mut graph = DeBruijnGraph::build(["acg", "act", "aca"]).unwrap();
        let ac = graph.node_id("ac").unwrap();
        let cg = graph.node_id("cg").unwrap();
        let ct = graph.node_id("ct").unwrap();
        let ca = graph.node_id("ca").unwrap();

        assert_eq!(graph.take_next_edge(ac), Some(cg));
        assert_eq!(graph.in_degree(cg), 0);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.take_next_edge(ac), Some(ct));
        assert_eq!(graph.take_next_edge(ac), Some(ca));
        assert_eq!(graph.take_next_edge(ac), None);
        assert!(graph.is_drained());
    }

    #[test]
    fn test_build_rejects_invalid_input() {
        assert!(matches!(
            DeBruijnGraph::build(Vec::<String>::new()),
            Err(AssemblyError::InvalidInput(_))
        ));
        assert!(matches!(
            DeBruijnGraph::build(["acg", "ac"]),
            Err(AssemblyError::InvalidInput(_))
        ));
        assert!(matches!(
            DeBruijnGraph::build(["a"]),
            Err(AssemblyError::InvalidInput(_))
        ));
        assert!(matches!(
            DeBruijnGraph::build(["axg"]),
            Err(AssemblyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_k2_single_character_labels() {
        let graph = DeBruijnGraph::build(["ac", "cg"]).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.label(NodeId(0)), "a");
    }
}
