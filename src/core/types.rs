use serde::{Deserialize, Serialize};

/// Stable index of a node in a de Bruijn graph's label arena
///
/// Ids are only handed out by the graph that owns the arena:
///
/// ```compile_fail
/// let id = kmer_assembler::NodeId(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shape of an Eulerian walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    /// Starts at the node with balance -1 and ends at the node with balance +1
    Open,
    /// Every node is balanced; the walk returns to its start
    Circuit,
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open path"),
            Self::Circuit => write!(f, "circuit"),
        }
    }
}

/// Start and end nodes of an Eulerian walk, as decided by degree analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEnds {
    pub start: NodeId,
    pub end: NodeId,
    pub kind: PathKind,
}
