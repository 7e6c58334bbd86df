//! Rules engine trait and the Yukon rules.
//!
//! The board engine answers "does this move work?" by trying it. The rules
//! engine answers "which moves would work?" without touching the board, so
//! front ends and solvers can list options and detect a stuck game.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::action::Move;
use crate::core::card::Card;
use crate::piles::Tableau;
use crate::rules::predicates::{can_place_on_foundation, can_place_on_tableau};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// All four foundations are complete.
    Won,
    /// Cards remain on the tableaus and no move can be made.
    NoMovesLeft,
}

impl GameResult {
    #[must_use]
    pub fn is_win(self) -> bool {
        self == GameResult::Won
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: must not mutate the board; empty when stuck
/// - `apply`: goes through the board's pick-up/place cycle, so a refused
///   move leaves the board unchanged
/// - `is_terminal`: return `None` while the game continues, including
///   while the hand holds cards
pub trait RulesEngine {
    /// Every move that would be accepted from this position.
    fn legal_moves(&self, board: &Board) -> Vec<Move>;

    /// Apply a move. Returns true if it was committed.
    fn apply(&self, board: &mut Board, mv: &Move) -> bool;

    /// Check if the game is over.
    fn is_terminal(&self, board: &Board) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `mv` is among the legal moves.
    fn is_legal(&self, board: &Board, mv: &Move) -> bool {
        self.legal_moves(board).contains(mv)
    }
}

/// Standard Yukon rules.
///
/// Moves that change nothing are not listed: a run going back onto its own
/// tableau, or a whole King-led pile moving to another empty tableau.
#[derive(Clone, Copy, Debug, Default)]
pub struct YukonRules;

impl YukonRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn tableau_moves(board: &Board, from: usize, source: &Tableau, out: &mut Vec<Move>) {
        let runs = (1..=source.len()).take_while(|&count| source.has_face_up_run(count));
        for count in runs {
            let Some(&lead) = source.top_run(count).and_then(|run| run.first()) else {
                continue;
            };
            let whole_pile = count == source.len();

            for (to, destination) in board.tableaus().iter().enumerate() {
                if to == from || (whole_pile && destination.is_empty()) {
                    continue;
                }
                if accepts_on_tableau(&lead, destination) {
                    out.push(Move::ToTableau { from, count, to });
                }
            }
        }
    }

    fn foundation_move(board: &Board, from: usize, source: &Tableau) -> Option<Move> {
        let top = source.top().filter(|c| !c.face_down)?;
        let to = top.suit.index();
        let foundation = board.foundation(to)?;
        can_place_on_foundation(top, foundation.top(), foundation.suit())
            .then_some(Move::ToFoundation { from, count: 1, to })
    }
}

fn accepts_on_tableau(lead: &Card, destination: &Tableau) -> bool {
    match destination.top() {
        Some(top) if top.face_down => false,
        top => can_place_on_tableau(lead, top),
    }
}

impl RulesEngine for YukonRules {
    fn legal_moves(&self, board: &Board) -> Vec<Move> {
        if !board.hand().is_empty() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for (from, source) in board.tableaus().iter().enumerate() {
            moves.extend(Self::foundation_move(board, from, source));
            Self::tableau_moves(board, from, source, &mut moves);
        }
        moves
    }

    fn apply(&self, board: &mut Board, mv: &Move) -> bool {
        board.apply(mv).is_placed()
    }

    fn is_terminal(&self, board: &Board) -> Option<GameResult> {
        if !board.hand().is_empty() {
            None
        } else if board.is_won() {
            Some(GameResult::Won)
        } else if self.legal_moves(board).is_empty() {
            Some(GameResult::NoMovesLeft)
        } else {
            None
        }
    }
}
