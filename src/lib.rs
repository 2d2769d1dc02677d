//! Pairing system interpreter
//!
//! Parses a textual description of a pairing system — an input
//! alphabet, a working alphabet, a set of pairwise rewrite rules and
//! an acceptance set — and evaluates input strings against it by
//! repeatedly applying rewrite rules until none applies.
//!
//! # Example
//!
//! ```
//! use pairsys::{evaluate, parse_system, Result};
//!
//! fn main() -> Result<()> {
//!     let system = parse_system("!sigma: a b\n!gamma: a b c\n!rules: [a,b -> c].\n!accept: c\n")?;
//!     let evaluation = evaluate(&system, "ab")?;
//!     assert!(evaluation.accepted());
//!     Ok(())
//! }
//! ```

#![warn(rust_2018_idioms)]

pub mod engine;
pub mod frontend;
pub mod repl;

// Re-exports
pub use anyhow::{Context, Result};
pub use engine::{evaluate, Evaluation, InputError, Step, Verdict};
pub use frontend::parser::system::{PairingSystem, Rule, Symbol};
pub use frontend::{ParseError, SemanticError, SyntaxError};

use std::fs;
use std::path::Path;

use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "pairsys";

/// Parse a description into a validated pairing system.
pub fn parse_system(source: &str) -> Result<PairingSystem> {
    debug!("parsing pairing system description");
    let system = frontend::parse(source)?;
    debug!(
        sigma = system.sigma.len(),
        gamma = system.gamma.len(),
        rules = system.rules.len(),
        "pairing system parsed"
    );
    Ok(system)
}

/// Parse a description file.
pub fn parse_file(path: &Path) -> Result<PairingSystem> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    parse_system(&source)
}

/// Parse a description file, print the system summary and enter the
/// interactive evaluation loop.
pub fn run_file(path: &Path) -> Result<()> {
    let system = parse_file(path)?;
    println!("Pairing system was successfully parsed:\n");
    println!("{system}\n");
    repl::run(&system)
}
