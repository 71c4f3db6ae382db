//! Match Logic for Rock, Paper, Scissors, Lizard, Spock
//!
//! Rules engine and match state machine for a human playing a droid to a
//! configurable number of wins. Terminal I/O lives behind the [`Console`]
//! trait so the same core drives the CLI and the tests.

mod error;
mod game;
mod moves;
mod persona;
mod player;
mod random;
mod session;

use serde::{Deserialize, Serialize};

pub use error::MatchError;
pub use game::{to_json, MatchConfig, MatchController, MatchRecord, Phase, RoundResult};
pub use moves::{join, Move};
pub use persona::{Droid, Persona};
pub use player::Player;
pub use random::{entropy_rng, match_seed, seeded_rng};
pub use session::{Console, Session};

/// Outcome of one round, from the first mover's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl RoundOutcome {
    /// Side to credit when the human moved first
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::FirstWins => Some(Side::Human),
            RoundOutcome::SecondWins => Some(Side::Computer),
            RoundOutcome::Tie => None,
        }
    }
}

/// Which player a score or a title belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

/// Resolve a round. Total over all 25 move pairs.
pub fn resolve(a: Move, b: Move) -> RoundOutcome {
    if a.beats(b) {
        RoundOutcome::FirstWins
    } else if b.beats(a) {
        RoundOutcome::SecondWins
    } else {
        RoundOutcome::Tie
    }
}
