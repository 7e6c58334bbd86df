//! Dealing a deck onto the board.

use log::info;

use super::engine::Board;
use crate::core::card::Card;
use crate::core::config::{DealLayout, NUM_TABLEAUS};
use crate::core::error::{DeckError, SetupError};
use crate::core::rng::GameRng;
use crate::deck::{shuffled_deck, validate_deck};

impl Board {
    /// Deal a 52-card deck in the standard Yukon layout.
    ///
    /// Cards are taken from the front of `deck` in order. Tableau `i` gets
    /// `i` face-down cards and then one (tableau 0) or five face-up cards.
    /// Foundations and hand start empty.
    pub fn deal(deck: &[Card]) -> Result<Self, DeckError> {
        let mut board = Self::new();
        board.initialize(deck)?;
        Ok(board)
    }

    /// Shuffle a fresh deck with `rng` and deal it.
    #[must_use]
    pub fn deal_shuffled(rng: &mut GameRng) -> Self {
        let deck = shuffled_deck(rng);
        let mut board = Self::new();
        board.lay_out(&deck, &DealLayout::yukon());
        info!("dealt shuffled deck (seed {})", rng.seed());
        board
    }

    /// Deal with a custom layout. The layout must still place all 52 cards.
    pub fn deal_with_layout(deck: &[Card], layout: &DealLayout) -> Result<Self, SetupError> {
        layout.validate()?;
        validate_deck(deck)?;
        let mut board = Self::new();
        board.lay_out(deck, layout);
        Ok(board)
    }

    /// Clear the board and deal `deck` onto it. On error the board is left
    /// untouched.
    pub fn initialize(&mut self, deck: &[Card]) -> Result<(), DeckError> {
        validate_deck(deck)?;
        self.clear();
        self.lay_out(deck, &DealLayout::yukon());
        Ok(())
    }

    /// Place cards onto an empty board. Face flags on the input are
    /// overwritten by the layout.
    fn lay_out(&mut self, deck: &[Card], layout: &DealLayout) {
        let mut cards = deck.iter().copied();
        for index in 0..NUM_TABLEAUS {
            let Some(tableau) = self.tableau_mut(index) else {
                continue;
            };
            tableau.extend(
                cards
                    .by_ref()
                    .take(layout.face_down[index])
                    .map(Card::turned_down),
            );
            tableau.extend(cards.by_ref().take(layout.face_up[index]).map(Card::turned_up));
        }
        info!("dealt {} cards onto {NUM_TABLEAUS} tableaus", deck.len());
    }
}
