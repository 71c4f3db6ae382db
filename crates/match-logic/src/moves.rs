//! The five-symbol alphabet and its beats-relation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// A move in Rock, Paper, Scissors, Lizard, Spock
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    /// Every move, in prompt order.
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// The two moves this one defeats.
    pub fn defeats(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Scissors, Move::Lizard],
            Move::Paper => [Move::Rock, Move::Spock],
            Move::Scissors => [Move::Paper, Move::Lizard],
            Move::Lizard => [Move::Paper, Move::Spock],
            Move::Spock => [Move::Rock, Move::Scissors],
        }
    }

    /// True iff `self` defeats `other`.
    pub fn beats(self, other: Move) -> bool {
        self.defeats().contains(&other)
    }

    /// True iff both sides threw the same move.
    pub fn ties(self, other: Move) -> bool {
        self == other
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact lowercase tokens. Anything else is a contract
/// violation by the input collaborator, so no trimming or case folding.
impl FromStr for Move {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| MatchError::InvalidMove(s.to_string()))
    }
}

/// Comma-separated token list, for prompts and history lines.
pub fn join(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
