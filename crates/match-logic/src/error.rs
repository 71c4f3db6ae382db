//! Error taxonomy for match configuration and play

use thiserror::Error;

/// Contract violations raised by the core.
///
/// None of these are user-input errors: collaborators filter raw input
/// before it reaches the core, so every variant signals a caller bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("invalid move {0:?}: expected one of rock, paper, scissors, lizard, spock")]
    InvalidMove(String),

    #[error("invalid win threshold {0:?}: must be a positive integer")]
    InvalidThreshold(String),

    #[error("persona {0:?} has no candidate moves")]
    EmptyPersona(String),

    #[error("unknown persona {0:?}")]
    UnknownPersona(String),

    #[error("match is already complete")]
    MatchOver,
}
