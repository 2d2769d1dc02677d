//! Pairing system interpreter - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pairsys::{evaluate, parse_file, repl, run_file, NAME, VERSION};
use std::path::PathBuf;

/// An interpreter for pairwise rewriting automata
#[derive(Parser, Debug)]
#[command(name = "pairsys")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a description file and evaluate input strings interactively
    Run {
        /// Description file to load
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Evaluate input strings against a description non-interactively
    Eval {
        /// Description file to load
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Input strings to evaluate (! for the empty string)
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<String>,
    },

    /// Check a description file for errors without evaluating anything
    Check {
        /// Description file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    match args.command {
        Commands::Run { file } => {
            run_file(&file).with_context(|| format!("Failed to run: {}", file.display()))?;
        }
        Commands::Eval { file, inputs } => {
            let system = parse_file(&file)?;
            for input in &inputs {
                let input = if input == "!" { "" } else { input };
                match evaluate(&system, input) {
                    Ok(evaluation) => repl::print_evaluation(&evaluation),
                    Err(e) => eprintln!("error: {e}\n"),
                }
            }
        }
        Commands::Check { file } => {
            let system =
                parse_file(&file).with_context(|| format!("Failed to check: {}", file.display()))?;
            println!("Pairing system was successfully parsed:\n");
            println!("{system}");
        }
        Commands::Version => {
            println!("{NAME} {VERSION}");
        }
    }

    Ok(())
}
