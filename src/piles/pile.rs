//! Foundation and tableau piles.
//!
//! Both piles are ordered bottom-to-top: index 0 is the bottom card and the
//! last element is the top. An empty pile has no top card (`None`), never a
//! placeholder card.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Suit, ACE, NUM_RANKS};

/// A per-suit pile built Ace to King.
///
/// The foundation always holds a gap-free prefix Ace, 2, 3, ... of its suit.
/// Cards only arrive through the board engine, which checks each one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Foundation {
    suit: Suit,
    cards: Vec<Card>,
}

impl Foundation {
    /// Create an empty foundation for a suit.
    #[must_use]
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            cards: Vec::with_capacity(NUM_RANKS),
        }
    }

    /// Create a foundation already built from Ace up to `height` cards.
    ///
    /// `height` is clamped to 13.
    #[must_use]
    pub fn filled(suit: Suit, height: usize) -> Self {
        let height = height.min(NUM_RANKS);
        let cards = (0..height)
            .map(|offset| Card::new(ACE + offset as u8, suit))
            .collect();
        Self { suit, cards }
    }

    /// The suit this foundation accepts.
    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Index of the top card (0 for a lone Ace, 12 when complete).
    #[must_use]
    pub fn top_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Holds Ace through King.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.top_index() == Some(NUM_RANKS - 1)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn push(&mut self, card: Card) {
        debug_assert_eq!(card.suit, self.suit);
        self.cards.push(card.turned_up());
    }
}

/// A mixed pile: a face-down prefix under a face-up remainder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tableau {
    cards: Vec<Card>,
}

impl Tableau {
    /// Create an empty tableau.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tableau from cards listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of hidden cards at the bottom.
    #[must_use]
    pub fn face_down_count(&self) -> usize {
        self.cards.iter().take_while(|c| c.face_down).count()
    }

    /// Number of visible cards above the hidden prefix.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.cards.len() - self.face_down_count()
    }

    /// Put a card on top, keeping its face state.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Whether the top `count` cards exist and are all face-up.
    #[must_use]
    pub fn has_face_up_run(&self, count: usize) -> bool {
        count > 0
            && count <= self.cards.len()
            && self.cards[self.cards.len() - count..]
                .iter()
                .all(|c| !c.face_down)
    }

    /// The top `count` cards, bottom-most first.
    #[must_use]
    pub fn top_run(&self, count: usize) -> Option<&[Card]> {
        let start = self.cards.len().checked_sub(count)?;
        Some(&self.cards[start..])
    }

    /// Remove the top `count` cards, returning them bottom-most first.
    pub(crate) fn take_top(&mut self, count: usize) -> Vec<Card> {
        let start = self.cards.len() - count;
        self.cards.split_off(start)
    }

    /// Append cards in order on top.
    pub(crate) fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Insert cards in order starting at `position`.
    pub(crate) fn insert_at<I: IntoIterator<Item = Card>>(&mut self, position: usize, cards: I) {
        let position = position.min(self.cards.len());
        self.cards.splice(position..position, cards);
    }

    /// Flip a face-down top card face-up. Returns true if a card turned.
    pub(crate) fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if card.face_down => {
                card.face_down = false;
                true
            }
            _ => false,
        }
    }

    /// Turn the card at `index` face-down again.
    pub(crate) fn hide_at(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.face_down = true;
        }
    }
}
