//! Playing cards: suit, rank and face state.
//!
//! A `Card` is a plain value. Ranks are stored as integers (Ace = 1,
//! King = 13) so that adjacency checks are simple arithmetic. Color is
//! derived from the suit and never stored.
//!
//! ## Usage
//!
//! ```
//! use rust_yukon::core::{Card, Color, Suit};
//!
//! let queen = Card::new(12, Suit::Clubs);
//! assert_eq!(queen.color(), Color::Black);
//! assert!(queen.is_valid());
//! assert_eq!(queen.to_string(), "QC");
//!
//! let hidden = queen.turned_down();
//! assert!(hidden.face_down);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DeckError;

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;

/// Number of suits (and foundations).
pub const NUM_SUITS: usize = 4;
/// Number of ranks per suit.
pub const NUM_RANKS: usize = 13;
/// Cards in a standard deck.
pub const DECK_SIZE: usize = NUM_SUITS * NUM_RANKS;

/// The four suits, in foundation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in foundation order: foundation `i` holds `Suit::ALL[i]`.
    pub const ALL: [Suit; NUM_SUITS] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Position of this suit in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color shared by every card of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-character code: 'H', 'D', 'C' or 'S'.
    #[must_use]
    pub const fn short_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = DeckError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Suit::ALL
            .get(value as usize)
            .copied()
            .ok_or(DeckError::InvalidSuit(value))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_char())
    }
}

/// Red or black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// A single playing card.
///
/// `rank` is public so that positions can be built by hand in tests and by
/// collaborators; use `is_valid` before trusting a card from outside the
/// crate's own deck supplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// 1 (Ace) through 13 (King).
    pub rank: u8,
    pub suit: Suit,
    /// Hidden cards sit at the bottom of a tableau until revealed.
    pub face_down: bool,
}

impl Card {
    /// Create a face-up card.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_down: false,
        }
    }

    /// Create a face-up card, rejecting ranks outside 1..=13.
    pub fn try_new(rank: u8, suit: Suit) -> Result<Self, DeckError> {
        let card = Self::new(rank, suit);
        if card.is_valid() {
            Ok(card)
        } else {
            Err(DeckError::InvalidRank(rank))
        }
    }

    /// Copy of this card, face-down.
    #[must_use]
    pub const fn turned_down(mut self) -> Self {
        self.face_down = true;
        self
    }

    /// Copy of this card, face-up.
    #[must_use]
    pub const fn turned_up(mut self) -> Self {
        self.face_down = false;
        self
    }

    /// Rank in 1..=13. The suit is always valid by construction.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rank >= ACE && self.rank <= KING
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_king(&self) -> bool {
        self.rank == KING
    }

    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Same rank and suit, ignoring face state.
    #[must_use]
    pub const fn same_as(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit as u8 == other.suit as u8
    }

    /// Rank character: 'A', '2'..'9', 'T', 'J', 'Q', 'K' ('?' if invalid).
    #[must_use]
    pub const fn rank_char(&self) -> char {
        match self.rank {
            1 => 'A',
            2..=9 => (b'0' + self.rank) as char,
            10 => 'T',
            JACK => 'J',
            QUEEN => 'Q',
            KING => 'K',
            _ => '?',
        }
    }
}

impl fmt::Display for Card {
    /// Face value ("AH", "TD", "KS"), regardless of face state.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit.short_char())
    }
}
