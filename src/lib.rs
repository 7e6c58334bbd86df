//! # rust-yukon
//!
//! A Yukon Solitaire engine: piles, move validation, rollback and win
//! detection.
//!
//! ## Design Principles
//!
//! 1. **Atomic Moves**: A move is pick-up, validate, then commit or roll
//!    back. A refused move leaves the board exactly as it was.
//!
//! 2. **Silent Refusal**: Engine operations never return errors. They
//!    report what happened as a plain status that callers may ignore; the
//!    board is the source of truth.
//!
//! 3. **Injected Randomness**: The engine holds no RNG. Shuffling happens
//!    in the deck supplier through a caller-owned `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Cards, moves, RNG, configuration, errors
//! - `piles`: Foundation, tableau and hand
//! - `rules`: Legality predicates and the `RulesEngine` trait
//! - `board`: The board, its move engine and the deal
//! - `deck`: Standard deck, shuffling and deck validation
//! - `render`: Plain-text board view
//! - `session`: Command parsing and the prompt loop
//!
//! ## Example
//!
//! ```
//! use rust_yukon::{Board, GameRng, Placement, RulesEngine, YukonRules};
//!
//! let mut board = Board::deal_shuffled(&mut GameRng::new(42));
//! let rules = YukonRules::new();
//!
//! if let Some(mv) = rules.legal_moves(&board).first().copied() {
//!     assert_eq!(board.apply(&mv), Placement::Placed);
//! }
//! assert_eq!(board.card_count(), 52);
//! ```

pub mod core;
pub mod piles;
pub mod rules;
pub mod board;
pub mod deck;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Suit,
    Move,
    GameRng, GameRngState,
    DealLayout, GameConfig,
    CommandError, ConfigError, DeckError, SetupError,
};

pub use crate::piles::{Foundation, Hand, HandOrigin, Tableau};

pub use crate::rules::{GameResult, RulesEngine, YukonRules};

pub use crate::board::{Board, Placement};

pub use crate::deck::{shuffled_deck, standard_deck, validate_deck};

pub use crate::session::{Command, GameSession, SessionEvent};
