//! Setup-time and input errors.
//!
//! Move operations on the board never fail loudly; these errors cover the
//! places where bad input can be reported: building a deck, validating a
//! configuration and parsing player commands.

use thiserror::Error;

/// A card sequence that cannot be dealt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck must hold {expected} cards, got {actual}")]
    WrongSize { expected: usize, actual: usize },
    #[error("invalid rank {0} (expected 1..=13)")]
    InvalidRank(u8),
    #[error("invalid suit index {0} (expected 0..=3)")]
    InvalidSuit(u8),
    #[error("duplicate card {0}")]
    Duplicate(String),
}

/// A deal layout or game configuration that does not describe Yukon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("layout deals {actual} cards, the deck has {expected}")]
    CardCount { expected: usize, actual: usize },
    #[error("tableau {0} would be dealt no face-up card")]
    NoFaceUpCard(usize),
}

/// A line of player input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' takes {expected} numbers, got {actual}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("could not parse '{0}' as a number")]
    NotANumber(String),
    #[error("pile numbers start at 1")]
    ZeroPile,
}

/// Anything that can stop a game from being set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
