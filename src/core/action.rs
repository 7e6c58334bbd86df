//! Move requests.
//!
//! Every Yukon move lifts a run of cards off one tableau and drops it on a
//! tableau or foundation. A `Move` names the source, the run length and the
//! destination; the board engine decides whether it is legal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A complete move request. All indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Move the top `count` cards of tableau `from` onto tableau `to`.
    ToTableau { from: usize, count: usize, to: usize },
    /// Move the top `count` cards of tableau `from` onto foundation `to`.
    /// Only `count == 1` can ever succeed.
    ToFoundation { from: usize, count: usize, to: usize },
}

impl Move {
    /// Source tableau index.
    #[must_use]
    pub fn source(&self) -> usize {
        match *self {
            Move::ToTableau { from, .. } | Move::ToFoundation { from, .. } => from,
        }
    }

    /// Number of cards lifted.
    #[must_use]
    pub fn count(&self) -> usize {
        match *self {
            Move::ToTableau { count, .. } | Move::ToFoundation { count, .. } => count,
        }
    }
}

impl fmt::Display for Move {
    /// Rendered with 1-based pile numbers, in the same form the command
    /// parser accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::ToTableau { from, count, to } => {
                write!(f, "move {} {} {}", from + 1, count, to + 1)
            }
            Move::ToFoundation { from, count, to } => {
                write!(f, "movef {} {} {}", from + 1, count, to + 1)
            }
        }
    }
}
