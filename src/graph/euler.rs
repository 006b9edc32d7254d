//! Eulerian walks over de Bruijn graphs (Hierholzer's algorithm).
//!
//! An open path from `start` to `end` is found by first closing it into a
//! circuit with an auxiliary edge `end -> start`, running Hierholzer's
//! circuit search, and then cutting the circuit where the auxiliary edge was
//! used.

use std::collections::HashMap;

use tracing::debug;

use crate::core::error::{AssemblyError, PathObstruction};
use crate::core::types::{NodeId, PathEnds, PathKind};
use crate::graph::builder::DeBruijnGraph;
use crate::graph::degree::DegreeAnalysis;

/// An ordered sequence of nodes using every edge of a graph exactly once.
///
/// The walk owns the node labels of the graph it was taken from, since that
/// graph is consumed by the traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    nodes: Vec<NodeId>,
    labels: Vec<String>,
    kind: PathKind,
}

impl Walk {
    /// Build a walk directly from node labels, in order.
    ///
    /// Repeated labels map to the same node. The walk is a circuit when the
    /// first and last labels are equal and there is more than one node.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::InvalidInput` if `labels` is empty, the labels
    /// do not all have the same non-zero length, or a label does not start
    /// with the last `width - 1` bases of the one before it.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, AssemblyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut arena: Vec<String> = Vec::new();
        let mut index: HashMap<String, NodeId> = HashMap::new();
        let mut nodes = Vec::new();

        for label in labels {
            let label = label.into();
            let id = match index.get(&label) {
                Some(&id) => id,
                None => {
                    let id = NodeId(arena.len());
                    arena.push(label.clone());
                    index.insert(label, id);
                    id
                }
            };
            nodes.push(id);
        }

        let Some(&first) = nodes.first() else {
            return Err(AssemblyError::InvalidInput("walk has no nodes".to_string()));
        };
        let width = arena[first.index()].len();
        if width == 0 || arena.iter().any(|label| label.len() != width) {
            return Err(AssemblyError::InvalidInput(
                "walk labels must share one non-zero length".to_string(),
            ));
        }

        for (step, pair) in nodes.windows(2).enumerate() {
            let from = arena[pair[0].index()].as_bytes();
            let to = arena[pair[1].index()].as_bytes();
            if from[1..] != to[..width - 1] {
                return Err(AssemblyError::InvalidInput(format!(
                    "walk step {} does not overlap: '{}' -> '{}'",
                    step + 1,
                    arena[pair[0].index()],
                    arena[pair[1].index()]
                )));
            }
        }

        let kind = if nodes.len() > 1 && nodes.first() == nodes.last() {
            PathKind::Circuit
        } else {
            PathKind::Open
        };

        Ok(Self {
            nodes,
            labels: arena,
            kind,
        })
    }

    /// Number of nodes visited, counting revisits
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A walk always visits at least one node
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    #[must_use]
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    #[must_use]
    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node.index()]
    }

    /// Labels of the visited nodes, in walk order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|&id| self.label(id))
    }

    #[must_use]
    pub fn first_label(&self) -> &str {
        self.label(self.nodes[0])
    }

    #[must_use]
    pub fn last_label(&self) -> &str {
        self.label(self.nodes[self.nodes.len() - 1])
    }
}

/// Finds an Eulerian walk by draining a graph it owns
#[derive(Debug)]
pub struct EulerianWalker {
    graph: DeBruijnGraph,
    ends: PathEnds,
}

impl EulerianWalker {
    /// Prepare a walk over `graph` using the endpoints found by `analysis`.
    ///
    /// The graph is moved into the walker; it is drained by [`walk`](Self::walk)
    /// and cannot be used afterwards.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::NoEulerianPath` if the analysis found no path.
    pub fn new(graph: DeBruijnGraph, analysis: &DegreeAnalysis) -> Result<Self, AssemblyError> {
        let ends = analysis.path_ends()?;
        Ok(Self { graph, ends })
    }

    /// Analyze `graph` and prepare a walk over it.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::NoEulerianPath` if the graph has no Eulerian path.
    pub fn for_graph(graph: DeBruijnGraph) -> Result<Self, AssemblyError> {
        let analysis = DegreeAnalysis::analyze(&graph);
        Self::new(graph, &analysis)
    }

    /// Traverse every edge exactly once.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::NoEulerianPath` with
    /// `PathObstruction::UnconsumedEdges` if edges remain after traversal,
    /// which happens only if the graph was not connected.
    pub fn walk(mut self) -> Result<Walk, AssemblyError> {
        let PathEnds { start, end, kind } = self.ends;

        if kind == PathKind::Open {
            self.graph.add_edge(end, start);
        }
        let total_edges = self.graph.edge_count();

        let mut circuit = self.hierholzer(start, total_edges);

        let remaining = self.graph.edge_count();
        if remaining > 0 || circuit.len() != total_edges + 1 {
            return Err(PathObstruction::UnconsumedEdges(remaining.max(1)).into());
        }

        if kind == PathKind::Open {
            cut_at_auxiliary_edge(&mut circuit, end, start)?;
        }

        debug!(
            kind = %kind,
            nodes = circuit.len(),
            edges = circuit.len() - 1,
            "Found Eulerian walk"
        );

        Ok(Walk {
            nodes: circuit,
            labels: self.graph.into_labels(),
            kind,
        })
    }

    /// Closed walk from `start` using every edge reachable from it, in
    /// forward order. First and last nodes are both `start`.
    fn hierholzer(&mut self, start: NodeId, total_edges: usize) -> Vec<NodeId> {
        let mut stack = vec![start];
        let mut circuit = Vec::with_capacity(total_edges + 1);

        while let Some(&top) = stack.last() {
            match self.graph.take_next_edge(top) {
                Some(next) => stack.push(next),
                None => {
                    circuit.push(top);
                    stack.pop();
                }
            }
        }

        // Nodes are finalized in reverse traversal order
        circuit.reverse();
        circuit
    }
}

/// Turn a circuit that used the auxiliary edge `end -> start` into an open
/// path from `start` to `end`.
fn cut_at_auxiliary_edge(
    circuit: &mut Vec<NodeId>,
    end: NodeId,
    start: NodeId,
) -> Result<(), AssemblyError> {
    let cut = circuit
        .windows(2)
        .position(|pair| pair[0] == end && pair[1] == start)
        .ok_or(PathObstruction::UnconsumedEdges(1))?;

    // Drop the closing node (a repeat of the first), then rotate so the
    // walk begins just after the auxiliary edge.
    circuit.pop();
    circuit.rotate_left(cut + 1);
    Ok(())
}
