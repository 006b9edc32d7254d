//! Graphviz DOT export for inspecting de Bruijn graphs.
//!
//! Each edge is written as `<prefix>-><suffix> [label=<k-mer>];` where the
//! k-mer is recovered as the prefix label plus the last base of the suffix.

use std::io::{self, Write};

use crate::core::types::NodeId;
use crate::graph::builder::DeBruijnGraph;

/// Write the remaining edges of `graph` in DOT format
///
/// # Errors
///
/// Returns any I/O error raised by `writer`.
pub fn write_dot<W: Write>(graph: &DeBruijnGraph, writer: &mut W) -> io::Result<()> {
    writer.write_all(HEADER.as_bytes())?;
    for (from, to) in graph.edges() {
        writeln!(writer, "{}", edge_line(graph, from, to))?;
    }
    writer.write_all(FOOTER.as_bytes())
}

/// Render the graph as a DOT string
#[must_use]
pub fn to_dot(graph: &DeBruijnGraph) -> String {
    let mut dot = String::from(HEADER);
    for (from, to) in graph.edges() {
        dot.push_str(&edge_line(graph, from, to));
        dot.push('\n');
    }
    dot.push_str(FOOTER);
    dot
}

const HEADER: &str = "digraph {\nlabel=\"de Bruijn graph\"\n";
const FOOTER: &str = "}\n";

fn edge_line(graph: &DeBruijnGraph, from: NodeId, to: NodeId) -> String {
    let prefix = graph.label(from);
    let suffix = graph.label(to);
    let last = &suffix[suffix.len() - 1..];
    format!("{prefix}->{suffix} [label={prefix}{last}];")
}
