//! The board and its move engine.
//!
//! `Board` owns every pile plus the hand. Moves go through a fixed cycle:
//!
//! 1. `pick_up` lifts a face-up run off a tableau into the hand
//! 2. `place_on_tableau` / `place_on_foundation` checks the hand's lead card
//!    against the destination top and either commits the whole hand or
//!    rolls it back with `return_to_origin`
//!
//! Rejected requests never leave a partial change behind: either the move
//! happens or the board is exactly as it was before the pick-up. None of
//! the operations return an error; the returned status only says which of
//! those outcomes happened.
//!
//! ## Usage
//!
//! ```
//! use rust_yukon::board::{Board, Placement};
//! use rust_yukon::core::{Card, Suit, KING};
//!
//! let mut board = Board::new();
//! board.tableau_mut(1).unwrap().push(Card::new(KING, Suit::Hearts));
//!
//! assert!(board.pick_up(1, 1));
//! assert_eq!(board.place_on_tableau(0), Placement::Placed);
//! assert_eq!(board.tableau(0).unwrap().top(), Some(&Card::new(KING, Suit::Hearts)));
//! ```

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::core::action::Move;
use crate::core::card::{Suit, NUM_SUITS};
use crate::core::config::NUM_TABLEAUS;
use crate::piles::{Foundation, Hand, HandOrigin, Tableau};
use crate::rules::predicates::{can_place_on_foundation, can_place_on_tableau};

/// What a placement request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// The hand was committed to the destination.
    Placed,
    /// The placement broke a rule; the hand went back to its origin.
    RolledBack,
    /// Nothing happened (bad index, empty hand, wrong hand size, or a
    /// refused hand whose origin is unknown and so stays held).
    Ignored,
}

impl Placement {
    #[must_use]
    pub fn is_placed(self) -> bool {
        self == Placement::Placed
    }
}

/// Foundations, tableaus and the hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    foundations: [Foundation; NUM_SUITS],
    tableaus: [Tableau; NUM_TABLEAUS],
    hand: Hand,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board: four empty foundations in `Suit::ALL` order,
    /// seven empty tableaus, empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            foundations: Suit::ALL.map(Foundation::new),
            tableaus: std::array::from_fn(|_| Tableau::new()),
            hand: Hand::new(),
        }
    }

    // === Read-only views ===

    #[must_use]
    pub fn tableau(&self, index: usize) -> Option<&Tableau> {
        self.tableaus.get(index)
    }

    #[must_use]
    pub fn tableaus(&self) -> &[Tableau] {
        &self.tableaus
    }

    #[must_use]
    pub fn foundation(&self, index: usize) -> Option<&Foundation> {
        self.foundations.get(index)
    }

    #[must_use]
    pub fn foundations(&self) -> &[Foundation] {
        &self.foundations
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Cards on the board and in the hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.foundations.iter().map(Foundation::len).sum::<usize>()
            + self.tableaus.iter().map(Tableau::len).sum::<usize>()
            + self.hand.len()
    }

    // === Position setup ===

    /// Mutable access to a tableau, for laying out positions by hand.
    ///
    /// Only meant for setup while the hand is empty; editing the origin
    /// tableau of a lifted run breaks its rollback.
    pub fn tableau_mut(&mut self, index: usize) -> Option<&mut Tableau> {
        self.tableaus.get_mut(index)
    }

    /// Replace a foundation with Ace through `height` of its own suit.
    ///
    /// Returns false for an out-of-range index.
    pub fn set_foundation_height(&mut self, index: usize, height: usize) -> bool {
        match self.foundations.get_mut(index) {
            Some(foundation) => {
                *foundation = Foundation::filled(foundation.suit(), height);
                true
            }
            None => false,
        }
    }

    /// Drop every card and empty the hand.
    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }

    // === Move engine ===

    /// Lift the top `count` cards of a tableau into the hand.
    ///
    /// No-op (returns false) when the index is out of range, `count` is 0
    /// or larger than the pile, any card of the run is face-down, or the
    /// hand already holds cards. On success the run leaves the tableau and,
    /// if the newly exposed top card is face-down, it is turned face-up.
    pub fn pick_up(&mut self, tableau_index: usize, count: usize) -> bool {
        if !self.hand.is_empty() {
            debug!("pick_up({tableau_index}, {count}) ignored: hand already holds cards");
            return false;
        }
        let Some(tableau) = self.tableaus.get_mut(tableau_index) else {
            debug!("pick_up ignored: no tableau {tableau_index}");
            return false;
        };
        if !tableau.has_face_up_run(count) {
            debug!(
                "pick_up ignored: tableau {tableau_index} has no face-up run of {count} (len {})",
                tableau.len()
            );
            return false;
        }

        let position = tableau.len() - count;
        let run = tableau.take_top(count);
        let revealed = tableau.reveal_top();
        if revealed {
            trace!("revealed {:?} on tableau {tableau_index}", tableau.top());
        }
        trace!("picked up {count} card(s) from tableau {tableau_index} at {position}");

        self.hand.fill(
            run,
            HandOrigin {
                tableau: tableau_index,
                position,
                revealed,
            },
        );
        true
    }

    /// Drop the hand onto a tableau.
    ///
    /// Only the hand's lead card is checked: it must be a King for an
    /// empty tableau, or one rank below and opposite in color to the top
    /// card otherwise. A face-down top card refuses everything. Rule
    /// failures roll the hand back.
    pub fn place_on_tableau(&mut self, destination_index: usize) -> Placement {
        let Some(lead) = self.hand.lead().copied() else {
            return Placement::Ignored;
        };
        let Some(destination) = self.tableaus.get(destination_index) else {
            debug!("place_on_tableau ignored: no tableau {destination_index}");
            return Placement::Ignored;
        };

        let legal = match destination.top() {
            Some(top) if top.face_down => false,
            top => can_place_on_tableau(&lead, top),
        };
        if !legal {
            debug!(
                "{lead} cannot go on tableau {destination_index} (top {:?}); rolling back",
                destination.top()
            );
            return self.roll_back();
        }

        let (cards, _) = self.hand.take();
        self.tableaus[destination_index].extend(cards);
        Placement::Placed
    }

    /// Drop a single-card hand onto a foundation.
    ///
    /// No-op unless the hand holds exactly one card. The card must match
    /// the foundation's suit and follow its top card (Ace on empty). Rule
    /// failures roll the hand back.
    pub fn place_on_foundation(&mut self, foundation_index: usize) -> Placement {
        let Some(foundation) = self.foundations.get(foundation_index) else {
            debug!("place_on_foundation ignored: no foundation {foundation_index}");
            return Placement::Ignored;
        };
        if self.hand.len() != 1 {
            debug!(
                "place_on_foundation ignored: hand holds {} card(s)",
                self.hand.len()
            );
            return Placement::Ignored;
        }

        let card = self.hand.cards()[0];
        if !can_place_on_foundation(&card, foundation.top(), foundation.suit()) {
            debug!("{card} cannot go on foundation {foundation_index}; rolling back");
            return self.roll_back();
        }

        self.hand.take();
        let foundation = &mut self.foundations[foundation_index];
        foundation.push(card);
        if foundation.is_complete() {
            info!("foundation {} complete", foundation.suit());
        }
        Placement::Placed
    }

    /// Put the hand back exactly where it came from.
    ///
    /// The cards go back in at the recorded origin position, and a card
    /// that the pick-up turned face-up is turned back down, so the origin
    /// tableau matches its pre-pick-up state. Returns false if the hand was
    /// empty, or if its origin is missing or names no tableau; the hand is
    /// then left as it was.
    pub fn return_to_origin(&mut self) -> bool {
        let Some(origin) = self.hand.origin() else {
            if !self.hand.is_empty() {
                debug!("hand of {} card(s) has no origin; keeping it", self.hand.len());
            }
            return false;
        };
        let Some(tableau) = self.tableaus.get_mut(origin.tableau) else {
            debug!("hand origin names no tableau {}; keeping it", origin.tableau);
            return false;
        };

        let (cards, _) = self.hand.take();
        if origin.revealed {
            if let Some(below) = origin.position.checked_sub(1) {
                tableau.hide_at(below);
            }
        }
        trace!(
            "returned {} card(s) to tableau {} at {}",
            cards.len(),
            origin.tableau,
            origin.position
        );
        tableau.insert_at(origin.position, cards);
        true
    }

    fn roll_back(&mut self) -> Placement {
        if self.return_to_origin() {
            Placement::RolledBack
        } else {
            Placement::Ignored
        }
    }

    /// Run a complete move: pick up, then place.
    ///
    /// If the placement does not commit, the hand is returned to its
    /// origin, so the board is either moved or untouched. Returns `Ignored` when the
    /// pick-up itself was refused.
    pub fn apply(&mut self, mv: &Move) -> Placement {
        if !self.pick_up(mv.source(), mv.count()) {
            return Placement::Ignored;
        }
        let placement = match *mv {
            Move::ToTableau { to, .. } => self.place_on_tableau(to),
            Move::ToFoundation { to, .. } => self.place_on_foundation(to),
        };
        if !self.hand.is_empty() {
            self.return_to_origin();
        }
        placement
    }

    // === Win condition ===

    /// Every foundation holds Ace through King.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(Foundation::is_complete)
    }
}
