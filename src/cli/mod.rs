//! Command-line interface for ratio-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **find**: Find integer multiples of two quantities that nearly coincide
//! - **serve**: Start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # Every primitive match for pi against 1 up to complexity 30
//! ratio-matcher find 3.14159265359 1 --threshold 0.05 --max-complexity 30 --primitive-only
//!
//! # Best-yet matches only, via continued fractions
//! ratio-matcher find 1.4142135 1 --only-closest --max-complexity 1000000
//!
//! # JSON output for scripting
//! ratio-matcher --format json find 1.5 1
//!
//! # Start web UI
//! ratio-matcher serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

use crate::matching::guard::DEFAULT_MAX_ITERATIONS;
use crate::matching::MatchingConfig;

pub mod find;

#[derive(Parser)]
#[command(name = "ratio-matcher")]
#[command(version)]
#[command(about = "Find integer multiples of two numbers that nearly coincide")]
#[command(
    long_about = "ratio-matcher finds pairs of counts (countA, countB) such that countA*A is close to countB*B.\n\nIt offers two modes:\n- Every match whose absolute difference is below a threshold\n- Only best-yet matches, generated from the continued fraction of A/B"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find matching multiples of two quantities
    Find(find::FindArgs),

    /// Start the web server
    Serve(ServeArgs),
}

/// Engine options shared by every command that runs a search
#[derive(clap::Args, Clone, Copy, Debug)]
pub struct EngineArgs {
    /// Hard ceiling on loop iterations per search
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_iterations: u64,
}

impl EngineArgs {
    #[must_use]
    pub fn matching_config(&self) -> MatchingConfig {
        MatchingConfig {
            max_iterations: self.max_iterations,
        }
    }
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
