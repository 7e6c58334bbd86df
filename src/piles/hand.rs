//! The hand: cards in flight between pick-up and placement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;

/// Where the hand's cards came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandOrigin {
    /// Source tableau index.
    pub tableau: usize,
    /// Offset of the first lifted card within the source tableau.
    pub position: usize,
    /// Whether lifting the run turned the card beneath it face-up.
    pub revealed: bool,
}

/// Transient buffer for a lifted run.
///
/// Non-empty only between a successful pick-up and the placement or
/// rollback that follows it. The hand owns its cards outright; they are no
/// longer in the source tableau.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 16]>,
    origin: Option<HandOrigin>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Cards in their original pile order, lead card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The bottom-most lifted card; the only one checked on placement.
    #[must_use]
    pub fn lead(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Origin of the cards, `None` while empty.
    #[must_use]
    pub fn origin(&self) -> Option<HandOrigin> {
        self.origin
    }

    pub(crate) fn fill(&mut self, cards: impl IntoIterator<Item = Card>, origin: HandOrigin) {
        debug_assert!(self.is_empty(), "hand already holds cards");
        self.cards.extend(cards);
        self.origin = Some(origin);
    }

    /// Empty the hand, returning its cards and origin.
    pub(crate) fn take(&mut self) -> (SmallVec<[Card; 16]>, Option<HandOrigin>) {
        (std::mem::take(&mut self.cards), self.origin.take())
    }
}
