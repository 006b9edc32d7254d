use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{open_output, OutputFormat};
use crate::graph::builder::DeBruijnGraph;
use crate::graph::degree::DegreeAnalysis;
use crate::graph::dot::write_dot;
use crate::parsing::kmers::parse_kmer_file;

#[derive(Args)]
pub struct GraphArgs {
    /// K-mer file (same formats as `assemble`). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Write output here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute graph subcommand.
///
/// Text output is the DOT description; JSON and TSV give a summary of the
/// graph's size and Eulerian path status instead.
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GraphArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let kmers = parse_kmer_file(&args.input)
        .with_context(|| format!("Failed to read k-mers from {}", args.input.display()))?;
    let graph = DeBruijnGraph::from_kmer_set(&kmers);

    if verbose {
        eprintln!(
            "Built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
    }

    let mut out = open_output(args.output.as_deref())?;
    match format {
        OutputFormat::Text => write_dot(&graph, &mut out)?,
        OutputFormat::Json => {
            let analysis = DegreeAnalysis::analyze(&graph);
            let output = serde_json::json!({
                "k": graph.k(),
                "node_count": graph.node_count(),
                "edge_count": graph.edge_count(),
                "component_count": analysis.component_count(),
                "has_eulerian_path": analysis.has_eulerian_path(),
                "path_kind": analysis.path_kind(),
                "start": analysis.start_node().map(|id| graph.label(id)),
                "end": analysis.end_node().map(|id| graph.label(id)),
                "obstruction": analysis.obstruction().map(ToString::to_string),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Tsv => {
            let analysis = DegreeAnalysis::analyze(&graph);
            writeln!(
                out,
                "k\tnode_count\tedge_count\tcomponent_count\thas_eulerian_path"
            )?;
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                graph.k(),
                graph.node_count(),
                graph.edge_count(),
                analysis.component_count(),
                analysis.has_eulerian_path()
            )?;
        }
    }
    out.flush()?;

    Ok(())
}
