use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::cli::{open_output, OutputFormat};
use crate::parsing::fasta::read_genome;
use crate::utils::sequence::{extract_kmers, random_dna_sequence, shuffle_kmers};
use crate::utils::validation::{find_invalid_base, MIN_KMER_LENGTH};

#[derive(Args)]
pub struct SimulateArgs {
    /// Length of the k-mers to generate
    #[arg(short, long, default_value = "20")]
    pub k: usize,

    /// Exact genome length (overrides --min-length/--max-length)
    #[arg(long, conflicts_with_all = ["min_length", "max_length"])]
    pub length: Option<usize>,

    /// Minimum random genome length
    #[arg(long, default_value = "10")]
    pub min_length: usize,

    /// Maximum random genome length
    #[arg(long, default_value = "10000")]
    pub max_length: usize,

    /// Take the genome from this file (FASTA or bare sequence) instead of generating one
    #[arg(long, conflicts_with_all = ["length", "min_length", "max_length"])]
    pub from: Option<PathBuf>,

    /// Random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep k-mers in genome order instead of shuffling them
    #[arg(long)]
    pub no_shuffle: bool,

    /// Also write the genome itself to this file
    #[arg(long)]
    pub genome_output: Option<PathBuf>,

    /// Write k-mers here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute simulate subcommand
///
/// # Errors
///
/// Returns an error if k is too small, the genome is shorter than k or
/// contains non-nucleotide characters, or output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SimulateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if args.k < MIN_KMER_LENGTH {
        bail!("k must be at least {MIN_KMER_LENGTH}, got {}", args.k);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let genome = if let Some(path) = &args.from {
        read_genome(path).with_context(|| format!("Failed to read genome from {}", path.display()))?
    } else {
        let (min_length, max_length) = match args.length {
            Some(length) => (length, length),
            None => (args.min_length, args.max_length),
        };
        random_dna_sequence(&mut rng, min_length, max_length)
    };

    if let Some((pos, c)) = find_invalid_base(&genome) {
        bail!("Genome has invalid character '{c}' at position {}", pos + 1);
    }
    if genome.len() < args.k {
        bail!(
            "Genome length {} is shorter than k = {}",
            genome.len(),
            args.k
        );
    }

    let mut kmers = extract_kmers(&genome, args.k);
    if !args.no_shuffle {
        shuffle_kmers(&mut kmers, &mut rng);
    }

    info!(genome_length = genome.len(), kmers = kmers.len(), k = args.k, "Simulated k-mers");
    if verbose {
        eprintln!(
            "Generated {} {}-mers from a {} bp genome",
            kmers.len(),
            args.k,
            genome.len()
        );
    }

    if let Some(path) = &args.genome_output {
        let mut genome_out = open_output(Some(path))?;
        writeln!(genome_out, "{genome}")?;
        genome_out.flush()?;
    }

    let mut out = open_output(args.output.as_deref())?;
    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            for kmer in &kmers {
                writeln!(out, "{kmer}")?;
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "k": args.k,
                "genome_length": genome.len(),
                "kmers": kmers,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    out.flush()?;

    Ok(())
}
