use tracing::debug;

use crate::core::error::{AssemblyError, PathObstruction};
use crate::core::types::{NodeId, PathEnds, PathKind};
use crate::graph::builder::DeBruijnGraph;

/// Balance and connectivity summary of a de Bruijn graph.
///
/// A node's balance is `indegree - outdegree`. An Eulerian path exists when
/// the graph is weakly connected, no balance exceeds 1 in magnitude, and at
/// most one node has balance -1 (the start) and at most one has +1 (the end).
#[derive(Debug, Clone)]
pub struct DegreeAnalysis {
    balances: Vec<i64>,
    component_count: usize,
    ends: Result<PathEnds, PathObstruction>,
}

impl DegreeAnalysis {
    /// Analyze a graph. Does not modify it.
    #[must_use]
    pub fn analyze(graph: &DeBruijnGraph) -> Self {
        let balances = compute_balances(graph);
        let component_count = count_components(graph);
        let ends = decide_ends(graph, &balances, component_count);

        match &ends {
            Ok(ends) => debug!(
                kind = %ends.kind,
                start = graph.label(ends.start),
                end = graph.label(ends.end),
                "Eulerian walk exists"
            ),
            Err(obstruction) => debug!(%obstruction, "No Eulerian walk"),
        }

        Self {
            balances,
            component_count,
            ends,
        }
    }

    /// Balance (`indegree - outdegree`) of a node
    #[must_use]
    pub fn balance(&self, node: NodeId) -> i64 {
        self.balances[node.index()]
    }

    /// Balances of all nodes, indexed by `NodeId`
    #[must_use]
    pub fn balances(&self) -> &[i64] {
        &self.balances
    }

    /// Number of weakly connected components
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Where the walk must start: the unique node with balance -1, or in the
    /// circuit case the first node of the graph. `None` if no walk exists.
    #[must_use]
    pub fn start_node(&self) -> Option<NodeId> {
        self.ends.as_ref().ok().map(|ends| ends.start)
    }

    /// Where the walk must end: the unique node with balance +1, or the start
    /// node in the circuit case. `None` if no walk exists.
    #[must_use]
    pub fn end_node(&self) -> Option<NodeId> {
        self.ends.as_ref().ok().map(|ends| ends.end)
    }

    #[must_use]
    pub fn path_kind(&self) -> Option<PathKind> {
        self.ends.as_ref().ok().map(|ends| ends.kind)
    }

    #[must_use]
    pub fn has_eulerian_path(&self) -> bool {
        self.ends.is_ok()
    }

    /// Why no Eulerian path exists, if it does not
    #[must_use]
    pub fn obstruction(&self) -> Option<&PathObstruction> {
        self.ends.as_ref().err()
    }

    /// Start, end and kind of the walk.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::NoEulerianPath` if the graph has no Eulerian path.
    pub fn path_ends(&self) -> Result<PathEnds, AssemblyError> {
        self.ends.clone().map_err(AssemblyError::from)
    }
}

/// For every edge u -> v: balance[u] -= 1, balance[v] += 1
fn compute_balances(graph: &DeBruijnGraph) -> Vec<i64> {
    let mut balances = vec![0i64; graph.node_count()];
    for (from, to) in graph.edges() {
        balances[from.index()] -= 1;
        balances[to.index()] += 1;
    }
    debug_assert_eq!(balances.iter().sum::<i64>(), 0);
    balances
}

/// Count weakly connected components with an explicit work-list, ignoring
/// edge direction.
fn count_components(graph: &DeBruijnGraph) -> usize {
    let n = graph.node_count();

    // Undirected adjacency: forward edges plus their reverses
    let mut neighbors: Vec<Vec<NodeId>> = vec![Vec::new(); n];
    for (from, to) in graph.edges() {
        if from != to {
            neighbors[from.index()].push(to);
            neighbors[to.index()].push(from);
        }
    }

    let mut visited = vec![false; n];
    let mut stack = Vec::new();
    let mut components = 0;

    for root in 0..n {
        if visited[root] {
            continue;
        }
        components += 1;
        visited[root] = true;
        stack.push(NodeId(root));

        while let Some(node) = stack.pop() {
            for &next in &neighbors[node.index()] {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    stack.push(next);
                }
            }
        }
    }

    components
}

fn decide_ends(
    graph: &DeBruijnGraph,
    balances: &[i64],
    component_count: usize,
) -> Result<PathEnds, PathObstruction> {
    if graph.node_count() == 0 || graph.edge_count() == 0 {
        return Err(PathObstruction::EmptyGraph);
    }

    let mut sources = Vec::new();
    let mut sinks = Vec::new();

    for (index, &balance) in balances.iter().enumerate() {
        match balance {
            0 => {}
            -1 => sources.push(NodeId(index)),
            1 => sinks.push(NodeId(index)),
            _ => {
                return Err(PathObstruction::ExcessiveImbalance {
                    label: graph.label(NodeId(index)).to_string(),
                    balance,
                })
            }
        }
    }

    // Balances sum to zero, so with |balance| <= 1 there are exactly as many
    // sinks as sources
    debug_assert_eq!(sources.len(), sinks.len());
    if sources.len() > 1 {
        return Err(PathObstruction::MultipleSources(sources.len()));
    }
    if component_count > 1 {
        return Err(PathObstruction::Disconnected {
            components: component_count,
        });
    }

    match (sources.first(), sinks.first()) {
        (Some(&start), Some(&end)) => Ok(PathEnds {
            start,
            end,
            kind: PathKind::Open,
        }),
        _ => Ok(PathEnds {
            start: NodeId(0),
            end: NodeId(0),
            kind: PathKind::Circuit,
        }),
    }
}
