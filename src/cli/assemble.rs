use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::assembly::{Assembler, AssemblyConfig, AssemblyResult};
use crate::cli::{open_output, OutputFormat};
use crate::parsing::kmers::parse_kmer_file;

#[derive(Args)]
pub struct AssembleArgs {
    /// K-mer file: one or more k-mers per line, or FASTA with one k-mer per record.
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Also write the de Bruijn graph in DOT format to this file
    #[arg(long)]
    pub dot: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute assemble subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed, no Eulerian path exists,
/// or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AssembleArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let kmers = parse_kmer_file(&args.input)
        .with_context(|| format!("Failed to read k-mers from {}", args.input.display()))?;

    if verbose {
        eprintln!("Parsed {} k-mers of length {}", kmers.len(), kmers.k());
    }

    let assembler = Assembler::new(AssemblyConfig {
        dot_output: args.dot.clone(),
    });
    let result = assembler
        .assemble(&kmers)
        .with_context(|| format!("Failed to assemble {}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Assembled {} bp from {} nodes ({})",
            result.length(),
            result.node_count,
            result.path_kind
        );
    }

    let mut out = open_output(args.output.as_deref())?;
    match format {
        OutputFormat::Text => writeln!(out, "{}", result.sequence)?,
        OutputFormat::Json => print_json_result(&mut out, &result)?,
        OutputFormat::Tsv => print_tsv_result(&mut out, &result)?,
    }
    out.flush()?;

    Ok(())
}

fn print_json_result(out: &mut dyn Write, result: &AssemblyResult) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "length": result.length(),
        "k": result.k,
        "kmer_count": result.kmer_count,
        "node_count": result.node_count,
        "edge_count": result.edge_count,
        "path_kind": result.path_kind,
        "start": result.start_label,
        "end": result.end_label,
        "md5": result.md5,
        "sequence": result.sequence,
    });

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn print_tsv_result(out: &mut dyn Write, result: &AssemblyResult) -> anyhow::Result<()> {
    writeln!(
        out,
        "length\tk\tkmer_count\tnode_count\tpath_kind\tmd5\tsequence"
    )?;
    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        result.length(),
        result.k,
        result.kmer_count,
        result.node_count,
        result.path_kind,
        result.md5,
        result.sequence,
    )?;
    Ok(())
}
