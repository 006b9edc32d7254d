use thiserror::Error;

/// Errors raised while validating k-mers or searching for an assembly walk
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// Empty input, inconsistent or too-short k-mer lengths, or bases outside {a,c,g,t}
    #[error("Invalid k-mer input: {0}")]
    InvalidInput(String),

    /// The de Bruijn graph admits no walk that uses every edge exactly once
    #[error("No Eulerian path: {0}")]
    NoEulerianPath(#[from] PathObstruction),
}

/// Why a graph has no Eulerian path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathObstruction {
    #[error("graph has no edges")]
    EmptyGraph,

    #[error("node '{label}' has balance {balance} (must be -1, 0 or +1)")]
    ExcessiveImbalance { label: String, balance: i64 },

    /// More than one node with balance -1, and as many with +1
    #[error("{0} nodes have one more outgoing than incoming edge (at most 1 allowed)")]
    MultipleSources(usize),

    #[error("graph is split into {components} disconnected components")]
    Disconnected { components: usize },

    #[error("{0} edges were left unconsumed after traversal")]
    UnconsumedEdges(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstruction_converts_into_assembly_error() {
        let err: AssemblyError = PathObstruction::MultipleSources(3).into();
        assert_eq!(
            err,
            AssemblyError::NoEulerianPath(PathObstruction::MultipleSources(3))
        );
        assert!(err.to_string().contains("3 nodes"));
    }

    #[test]
    fn test_error_messages() {
        let err = AssemblyError::InvalidInput("no k-mers supplied".to_string());
        assert_eq!(err.to_string(), "Invalid k-mer input: no k-mers supplied");

        let err = AssemblyError::from(PathObstruction::Disconnected { components: 2 });
        assert_eq!(
            err.to_string(),
            "No Eulerian path: graph is split into 2 disconnected components"
        );
    }
}
