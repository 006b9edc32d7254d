use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::fasta::read_genome;
use crate::utils::sequence::same_composition;

#[derive(Args)]
pub struct CompareArgs {
    /// First sequence file (FASTA or bare sequence)
    #[arg(required = true)]
    pub input_a: PathBuf,

    /// Second sequence file (FASTA or bare sequence)
    #[arg(required = true)]
    pub input_b: PathBuf,

    /// k-mer length used for the composition comparison
    #[arg(short, long, required = true)]
    pub k: usize,
}

/// How two sequences relate
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// The sequences are identical
    Identical,
    /// Different sequences with the same k-mer composition
    SameComposition,
    /// The k-mer compositions differ
    Different,
}

impl Comparison {
    #[must_use]
    pub fn of(a: &str, b: &str, k: usize) -> Self {
        if a == b {
            Self::Identical
        } else if same_composition(a, b, k) {
            Self::SameComposition
        } else {
            Self::Different
        }
    }
}

/// Execute compare subcommand.
///
/// Exits with an error when the compositions differ so the command can be
/// used as a check in scripts.
///
/// # Errors
///
/// Returns an error if either input cannot be read or the compositions differ.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let a = read_genome(&args.input_a)
        .with_context(|| format!("Failed to read {}", args.input_a.display()))?;
    let b = read_genome(&args.input_b)
        .with_context(|| format!("Failed to read {}", args.input_b.display()))?;

    if verbose {
        eprintln!("Input A: {} bp, input B: {} bp", a.len(), b.len());
    }

    let comparison = Comparison::of(&a, &b, args.k);

    match format {
        OutputFormat::Text => match comparison {
            Comparison::Identical => println!("Sequences are identical"),
            Comparison::SameComposition => {
                println!("Sequences differ but have the same {}-mer composition", args.k);
            }
            Comparison::Different => println!("Sequences have different {}-mer compositions", args.k),
        },
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input_a": args.input_a.display().to_string(),
                "input_b": args.input_b.display().to_string(),
                "length_a": a.len(),
                "length_b": b.len(),
                "k": args.k,
                "result": comparison,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("length_a\tlength_b\tk\tresult");
            println!("{}\t{}\t{}\t{:?}", a.len(), b.len(), args.k, comparison);
        }
    }

    if comparison == Comparison::Different {
        anyhow::bail!("Compositions differ");
    }

    Ok(())
}
