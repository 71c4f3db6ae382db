//! Rock, Paper, Scissors, Lizard, Spock in the terminal
//!
//! Runs with no arguments; see `--help` for the optional flags.

mod cli;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rpsls_match::{entropy_rng, seeded_rng, to_json, MatchController, Session};

use crate::cli::Args;
use crate::terminal::Terminal;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    let name = match args.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => terminal::ask_name()?,
    };
    let droid = match args.droid {
        Some(droid) => droid,
        None => {
            let mut rng = match args.seed {
                Some(seed) => seeded_rng(seed),
                None => entropy_rng(),
            };
            terminal::ask_droid(&mut rng)?
        }
    };
    log::info!(
        "{} vs {}, first to {}",
        name,
        droid,
        args.threshold.win_threshold()
    );

    let mut session: Session<StdRng> = match args.seed {
        Some(seed) => Session::seeded(args.threshold, name, droid.persona(), seed),
        None => Session::new(MatchController::new(
            args.threshold,
            name,
            droid.persona(),
            entropy_rng(),
        )),
    };
    let records = session.play(&mut Terminal)?;

    if let Some(path) = args.transcript {
        std::fs::write(&path, to_json(&records)?)
            .with_context(|| format!("writing transcript to {}", path.display()))?;
        log::info!("wrote {} matches to {}", records.len(), path.display());
    }
    Ok(())
}
