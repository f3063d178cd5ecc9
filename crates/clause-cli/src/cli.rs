use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clause_core::constants::VERSION;

/// Top-level CLI parser for the `clause` binary.
#[derive(Debug, Parser)]
#[command(
    name = "clause",
    version = VERSION,
    about = "Find contradictory clauses across policy documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect contradictions across two or more documents
    Analyze {
        /// Plain-text documents to compare
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print a prioritized report instead of the raw analysis
        #[arg(short, long)]
        report: bool,
    },
    /// List the key phrases extracted from one document
    Phrases {
        /// Plain-text document
        file: PathBuf,
    },
}
