//! Match execution engine

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::moves::Move;
use crate::persona::Persona;
use crate::player::Player;
use crate::{resolve, RoundOutcome, Side};

/// Match configuration
///
/// Only built through the validated constructors, so every config in
/// circulation has a reachable threshold:
///
/// ```compile_fail
/// let config = rpsls_match::MatchConfig { win_threshold: 0 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    win_threshold: u32,
}

impl MatchConfig {
    /// Validated constructor. A zero threshold could never be reached.
    pub fn new(win_threshold: u32) -> Result<Self, MatchError> {
        if win_threshold == 0 {
            return Err(MatchError::InvalidThreshold(win_threshold.to_string()));
        }
        Ok(Self { win_threshold })
    }

    /// First to three
    pub fn standard() -> Self {
        Self { win_threshold: 3 }
    }

    /// Wins needed to take the match, always at least one
    pub fn win_threshold(&self) -> u32 {
        self.win_threshold
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Accepts a positive base-10 integer and nothing else
impl FromStr for MatchConfig {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let threshold = s
            .trim()
            .parse::<u32>()
            .map_err(|_| MatchError::InvalidThreshold(s.to_string()))?;
        Self::new(threshold).map_err(|_| MatchError::InvalidThreshold(s.to_string()))
    }
}

/// Where the controller is in the round cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingMoves,
    RoundResolved,
    MatchComplete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::AwaitingMoves => "awaiting moves",
            Phase::RoundResolved => "round resolved",
            Phase::MatchComplete => "match complete",
        };
        f.write_str(s)
    }
}

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based
    pub round: u32,
    pub human_move: Move,
    pub computer_move: Move,
    pub outcome: RoundOutcome,
    pub human_score: u32,
    pub computer_score: u32,
    /// Set on the round that ends the match
    pub champion: Option<Side>,
}

impl RoundResult {
    pub fn is_complete(&self) -> bool {
        self.champion.is_some()
    }
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub win_threshold: u32,
    pub human: String,
    pub computer: String,
    pub rounds: Vec<RoundResult>,
    pub human_score: u32,
    pub computer_score: u32,
    pub champion: Side,
}

/// Serialize completed matches as a pretty JSON array
pub fn to_json(records: &[MatchRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Drives one match at a time between a human and a persona.
///
/// The controller is the only writer of either player. A match ends the
/// moment a score reaches the threshold; after that every round is
/// refused until [`MatchController::reset`].
#[derive(Debug)]
pub struct MatchController<R> {
    config: MatchConfig,
    human: Player,
    computer: Player,
    persona: Persona,
    rng: R,
    phase: Phase,
    rounds: Vec<RoundResult>,
}

impl<R: Rng> MatchController<R> {
    pub fn new(config: MatchConfig, human_name: impl Into<String>, persona: Persona, rng: R) -> Self {
        Self {
            config,
            human: Player::new(human_name),
            computer: Player::new(persona.name()),
            persona,
            rng,
            phase: Phase::AwaitingMoves,
            rounds: Vec::new(),
        }
    }

    /// Start a match to `threshold` wins
    pub fn new_match(
        threshold: u32,
        human_name: impl Into<String>,
        persona: Persona,
        rng: R,
    ) -> Result<Self, MatchError> {
        let config = MatchConfig::new(threshold)?;
        Ok(Self::new(config, human_name, persona, rng))
    }

    /// Play one round: the human's move against a fresh draw from the persona
    pub fn play_round(&mut self, human_move: Move) -> Result<RoundResult, MatchError> {
        if self.is_complete() {
            return Err(MatchError::MatchOver);
        }
        self.phase = Phase::AwaitingMoves;
        self.human.record(human_move);
        let computer_move = self.persona.select(&mut self.rng);
        self.computer.record(computer_move);
        Ok(self.settle(human_move, computer_move))
    }

    /// Score a round whose moves are already recorded
    fn settle(&mut self, human_move: Move, computer_move: Move) -> RoundResult {
        let outcome = resolve(human_move, computer_move);
        match outcome.winner() {
            Some(Side::Human) => self.human.award(),
            Some(Side::Computer) => self.computer.award(),
            None => {}
        }

        let champion = self.champion();
        self.phase = match champion {
            Some(_) => Phase::MatchComplete,
            None => Phase::RoundResolved,
        };

        let result = RoundResult {
            round: self.rounds.len() as u32 + 1,
            human_move,
            computer_move,
            outcome,
            human_score: self.human.score(),
            computer_score: self.computer.score(),
            champion,
        };
        log::debug!(
            "round {}: {} vs {} -> {:?} ({}-{})",
            result.round,
            human_move,
            computer_move,
            outcome,
            result.human_score,
            result.computer_score
        );
        if let Some(side) = champion {
            log::info!(
                "match complete after {} rounds, {:?} wins {}-{}",
                result.round,
                side,
                result.human_score,
                result.computer_score
            );
        }
        self.rounds.push(result.clone());
        result
    }

    /// Start a fresh match: scores zeroed, histories cleared, names kept
    pub fn reset(&mut self) {
        self.human.reset();
        self.computer.reset();
        self.rounds.clear();
        self.phase = Phase::AwaitingMoves;
        log::info!("new match to {} wins", self.config.win_threshold);
    }

    /// Replace the random source, e.g. with a per-match seed
    pub fn reseed(&mut self, rng: R) {
        self.rng = rng;
    }
}

impl<R> MatchController<R> {
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::MatchComplete
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whoever has reached the threshold. Scores move one at a time, so
    /// at most one side can qualify.
    pub fn champion(&self) -> Option<Side> {
        let threshold = self.config.win_threshold;
        if self.human.score() >= threshold {
            Some(Side::Human)
        } else if self.computer.score() >= threshold {
            Some(Side::Computer)
        } else {
            None
        }
    }

    pub fn config(&self) -> MatchConfig {
        self.config
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Summary of the match, once it is complete
    pub fn record(&self) -> Option<MatchRecord> {
        let champion = self.champion()?;
        Some(MatchRecord {
            win_threshold: self.config.win_threshold,
            human: self.human.name().to_string(),
            computer: self.computer.name().to_string(),
            rounds: self.rounds.clone(),
            human_score: self.human.score(),
            computer_score: self.computer.score(),
            champion,
        })
    }
}
