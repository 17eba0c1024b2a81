//! Command-line interface of the strategy lab.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Evaluate the daily swing strategy against local data.
#[derive(Parser, Debug)]
#[command(name = "strategy-lab", author, version, about, long_about = None)]
pub struct Cli {
    /// Strategy settings file (TOML, JSON or YAML by extension).
    /// Values can be overridden with STRATEGY_LAB_* environment variables.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the interval, assets and data feeds the strategy asks for.
    Describe,
    /// Run the strategy once on a host payload ({"holdings": .., "ohlcv": [..]}).
    Run {
        /// Payload file, or "-" for stdin.
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },
    /// Feed a bar history one interval at a time, realising each target.
    Replay {
        /// JSON array of bar sets, oldest first.
        #[arg(long)]
        history: PathBuf,

        /// Starting holdings as a JSON map (default: none).
        #[arg(long)]
        holdings: Option<PathBuf>,
    },
}
