//! Core types: cards, moves, RNG, configuration and errors.
//!
//! Everything here is a plain value with no knowledge of piles or the
//! board. The rest of the crate builds on these.

pub mod card;
pub mod action;
pub mod rng;
pub mod config;
pub mod error;

pub use card::{Card, Color, Suit, ACE, DECK_SIZE, JACK, KING, NUM_RANKS, NUM_SUITS, QUEEN};
pub use action::Move;
pub use rng::{GameRng, GameRngState};
pub use config::{DealLayout, GameConfig, NUM_TABLEAUS};
pub use error::{CommandError, ConfigError, DeckError, SetupError};
