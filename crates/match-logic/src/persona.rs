//! Opponent personas and weighted move selection

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::moves::Move;

/// A named weighting over moves.
///
/// The pool is a multiset: a move listed `n` times is drawn with weight `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Persona {
    name: String,
    pool: Vec<Move>,
}

impl Persona {
    /// Create a persona from a non-empty candidate pool
    pub fn new(name: impl Into<String>, pool: Vec<Move>) -> Result<Self, MatchError> {
        let name = name.into();
        if pool.is_empty() {
            return Err(MatchError::EmptyPersona(name));
        }
        Ok(Self { name, pool })
    }

    /// A persona that always throws `m`
    pub fn fixed(name: impl Into<String>, m: Move) -> Self {
        Self {
            name: name.into(),
            pool: vec![m],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pool(&self) -> &[Move] {
        &self.pool
    }

    /// Draw one move, uniformly over the pool entries
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        let m = self.pool[rng.gen_range(0..self.pool.len())];
        log::trace!("{} drew {}", self.name, m);
        m
    }

    /// Probability of drawing `m`
    pub fn weight_of(&self, m: Move) -> f64 {
        let hits = self.pool.iter().filter(|c| **c == m).count();
        hits as f64 / self.pool.len() as f64
    }
}

/// The droid roster the terminal program offers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Droid {
    /// Uniform over all five moves.
    R2D2,
    /// Rock, every time.
    C3PO,
    /// Mostly lizard, sometimes paper.
    BB8,
    /// Uniform over everything except scissors.
    K2SO,
    /// Heavy rock with a thin tail of paper, scissors and lizard.
    B2EMO,
}

impl Droid {
    pub const ALL: [Droid; 5] = [Droid::R2D2, Droid::C3PO, Droid::BB8, Droid::K2SO, Droid::B2EMO];

    pub fn name(self) -> &'static str {
        match self {
            Droid::R2D2 => "R2D2",
            Droid::C3PO => "C3PO",
            Droid::BB8 => "BB8",
            Droid::K2SO => "K2SO",
            Droid::B2EMO => "B2EMO",
        }
    }

    fn pool(self) -> Vec<Move> {
        use Move::*;
        match self {
            Droid::R2D2 => Move::ALL.to_vec(),
            Droid::C3PO => vec![Rock],
            Droid::BB8 => vec![Lizard, Lizard, Lizard, Paper, Lizard, Paper],
            Droid::K2SO => vec![Rock, Paper, Lizard, Spock],
            Droid::B2EMO => vec![Rock, Rock, Rock, Rock, Paper, Scissors, Lizard],
        }
    }

    pub fn persona(self) -> Persona {
        Persona {
            name: self.name().to_string(),
            pool: self.pool(),
        }
    }

    /// Pick a roster droid when the player does not choose one
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Human-readable summary of how the droid plays
    pub fn describe(self) -> &'static str {
        match self {
            Droid::R2D2 => "Plays anything, no favourites.",
            Droid::C3PO => "Never throws anything but rock.",
            Droid::BB8 => "Loves lizard, falls back on paper.",
            Droid::K2SO => "Refuses to touch scissors.",
            Droid::B2EMO => "Rock most of the time, rarely anything else.",
        }
    }
}

impl fmt::Display for Droid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive, surrounding whitespace ignored
impl FromStr for Droid {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Droid::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| MatchError::UnknownPersona(s.to_string()))
    }
}

impl From<Droid> for Persona {
    fn from(droid: Droid) -> Self {
        droid.persona()
    }
}
