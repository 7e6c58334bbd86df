//! Pure legality predicates.
//!
//! These functions are the single source of truth for what may land where.
//! They look only at the cards passed in: face state, pile contents below
//! the top and whose turn it is are the board engine's concern.

use crate::core::card::{Card, Color, Suit, KING};

/// Rank in 1..=13 and a known suit.
#[inline]
#[must_use]
pub fn is_valid(card: &Card) -> bool {
    card.is_valid()
}

/// Equal rank and suit.
#[inline]
#[must_use]
pub fn same(a: &Card, b: &Card) -> bool {
    a.same_as(b)
}

/// `a` is exactly one rank below `b`.
#[inline]
#[must_use]
pub fn is_one_below(a: &Card, b: &Card) -> bool {
    b.rank.checked_sub(1) == Some(a.rank)
}

#[inline]
#[must_use]
pub fn color(card: &Card) -> Color {
    card.color()
}

/// Next card of the same suit, or `None` after a King.
#[must_use]
pub fn successor(card: &Card) -> Option<Card> {
    (card.rank < KING).then(|| Card::new(card.rank + 1, card.suit))
}

/// Can `candidate` be placed on a tableau whose top is `destination_top`?
///
/// Empty tableaus take only Kings. Otherwise the candidate must be one rank
/// lower and the opposite color; suit does not matter.
#[must_use]
pub fn can_place_on_tableau(candidate: &Card, destination_top: Option<&Card>) -> bool {
    match destination_top {
        None => candidate.is_king(),
        Some(top) => is_one_below(candidate, top) && color(candidate) != color(top),
    }
}

/// Can `candidate` be placed on a foundation of `foundation_suit` whose top
/// is `destination_top`?
///
/// The suit must match. Empty foundations take only Aces; otherwise the
/// candidate must be the successor of the top card.
#[must_use]
pub fn can_place_on_foundation(
    candidate: &Card,
    destination_top: Option<&Card>,
    foundation_suit: Suit,
) -> bool {
    if candidate.suit != foundation_suit {
        return false;
    }
    match destination_top {
        None => candidate.is_ace(),
        Some(top) => successor(top).is_some_and(|next| same(candidate, &next)),
    }
}
