//! One side of a match

use crate::moves::Move;

/// Identity, current move, score and move history for a single match
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    current: Option<Move>,
    score: u32,
    history: Vec<Move>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current: None,
            score: 0,
            history: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Move thrown this round, `None` before the first round of a match
    pub fn current(&self) -> Option<Move> {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Every move thrown this match, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Set this round's move and append it to the history
    pub(crate) fn record(&mut self, m: Move) {
        self.current = Some(m);
        self.history.push(m);
    }

    pub(crate) fn award(&mut self) {
        self.score += 1;
    }

    /// Fresh match: everything but the name is cleared
    pub(crate) fn reset(&mut self) {
        self.current = None;
        self.score = 0;
        self.history.clear();
    }
}
