//! Error types.
//!
//! Running out of cards is not an error: it is the designed end of the game
//! and surfaces as `RoundOutcome::Aborted`. The variants here cover inputs
//! that cannot produce a valid game at all.

use thiserror::Error;

use crate::cards::Card;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WarError {
    #[error("Malformed deck: expected {expected} cards, got {actual}")]
    MalformedDeck { expected: usize, actual: usize },

    #[error("Duplicate card in deck: {0}")]
    DuplicateCard(Card),

    #[error("Invalid card: {0:?}")]
    InvalidCard(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, WarError>;
