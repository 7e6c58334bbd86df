//! Deck supplier.
//!
//! Builds the standard 52-card deck, shuffles it through an injected
//! `GameRng` and checks externally supplied decks before they are dealt.

use rustc_hash::FxHashSet;

use crate::core::card::{Card, Suit, ACE, DECK_SIZE, KING};
use crate::core::error::DeckError;
use crate::core::rng::GameRng;

/// All 52 cards, face-up, suits in foundation order and ranks Ace to King.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (ACE..=KING).map(move |rank| Card::new(rank, suit)))
        .collect()
}

/// A standard deck in random order. The same seed yields the same deck.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}

/// Check that `deck` holds each of the 52 cards exactly once.
///
/// Face state is ignored; the deal sets it.
pub fn validate_deck(deck: &[Card]) -> Result<(), DeckError> {
    if deck.len() != DECK_SIZE {
        return Err(DeckError::WrongSize {
            expected: DECK_SIZE,
            actual: deck.len(),
        });
    }

    let mut seen = FxHashSet::default();
    for card in deck {
        if !card.is_valid() {
            return Err(DeckError::InvalidRank(card.rank));
        }
        if !seen.insert((card.rank, card.suit)) {
            return Err(DeckError::Duplicate(card.to_string()));
        }
    }
    Ok(())
}
