use clap::Parser;
use tracing_subscriber::EnvFilter;

mod assembly;
mod cli;
mod core;
mod graph;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("kmer_assembler=debug,info")
    } else {
        EnvFilter::new("kmer_assembler=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Assemble(args) => {
            cli::assemble::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Graph(args) => {
            cli::graph::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Simulate(args) => {
            cli::simulate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Compare(args) => {
            cli::compare::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
