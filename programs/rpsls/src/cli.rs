//! Command-line flags. Every flag is optional.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use rpsls_match::{Droid, MatchConfig};

#[derive(Parser, Debug)]
#[command(
    name = "rpsls",
    version,
    about = "Rock, Paper, Scissors, Lizard, Spock against a droid"
)]
pub struct Args {
    /// Wins needed to become grand champion
    #[arg(long, default_value = "3", value_parser = MatchConfig::from_str)]
    pub threshold: MatchConfig,

    /// Your name (prompted for when absent)
    #[arg(long)]
    pub name: Option<String>,

    /// Opponent: R2D2, C3PO, BB8, K2SO or B2EMO (prompted for when absent)
    #[arg(long, value_parser = Droid::from_str)]
    pub droid: Option<Droid>,

    /// Seed the droid's draws so a session can be replayed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write every completed match to this file as JSON on exit
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Default log filter, overridden by RUST_LOG
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
