//! Plain-text rendering of a board.
//!
//! Face-up cards use their two-character code (`"AH"`, `"TD"`, `"KS"`),
//! face-down cards render as `"##"`. Tableau columns are top-justified with
//! 1-based headers so that the numbers match what a player types.
//!
//! ```text
//! Foundations: [AH] [..D] [..C] [..S]
//!
//!   1   2   3   4   5   6   7
//!  QC  ##  ##  ##  ##  ##  ##
//!      7H  ##  ##  ##  ##  ##
//! ```

use std::fmt::{self, Write};

use crate::board::Board;
use crate::core::card::Card;
use crate::core::config::NUM_TABLEAUS;

const FACE_DOWN: &str = "##";
const EMPTY_FOUNDATION: &str = "..";

/// Two-character code for a card as a player sees it.
#[must_use]
pub fn format_card(card: &Card) -> String {
    if card.face_down {
        FACE_DOWN.to_string()
    } else {
        card.to_string()
    }
}

/// The foundation row: each foundation's top card, or `..` with its suit
/// letter while empty.
#[must_use]
pub fn render_foundations(board: &Board) -> String {
    let cells: Vec<String> = board
        .foundations()
        .iter()
        .map(|f| match f.top() {
            Some(top) => format!("[{top}]"),
            None => format!("[{EMPTY_FOUNDATION}{}]", f.suit().short_char()),
        })
        .collect();
    format!("Foundations: {}", cells.join(" "))
}

/// All tableau columns, top-justified under 1-based headers.
#[must_use]
pub fn render_tableaus(board: &Board) -> String {
    let mut s = String::new();
    for index in 0..NUM_TABLEAUS {
        let _ = write!(s, "{:>3} ", index + 1);
    }
    s.truncate(s.trim_end().len());
    s.push('\n');

    let max_height = board.tableaus().iter().map(|t| t.len()).max().unwrap_or(0);
    for row in 0..max_height {
        let mut line = String::new();
        for tableau in board.tableaus() {
            match tableau.cards().get(row) {
                Some(card) => {
                    let _ = write!(line, "{:>3} ", format_card(card));
                }
                None => line.push_str("    "),
            }
        }
        s.push_str(line.trim_end());
        s.push('\n');
    }
    s
}

/// The hand line, or `None` while the hand is empty.
#[must_use]
pub fn render_hand(board: &Board) -> Option<String> {
    let hand = board.hand();
    if hand.is_empty() {
        return None;
    }
    let cards: Vec<String> = hand.cards().iter().map(format_card).collect();
    let origin = hand
        .origin()
        .map(|o| format!(" (from {})", o.tableau + 1))
        .unwrap_or_default();
    Some(format!("Hand: {}{origin}", cards.join(" ")))
}

/// Foundations, tableaus and (if non-empty) the hand.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut s = render_foundations(board);
    s.push_str("\n\n");
    s.push_str(&render_tableaus(board));
    if let Some(hand) = render_hand(board) {
        s.push('\n');
        s.push_str(&hand);
        s.push('\n');
    }
    s
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Suit, ACE, QUEEN};
    use crate::deck::standard_deck;
    use crate::piles::Tableau;

    #[test]
    fn test_format_card() {
        assert_eq!(format_card(&Card::new(QUEEN, Suit::Clubs)), "QC");
        assert_eq!(format_card(&Card::new(10, Suit::Diamonds)), "TD");
        assert_eq!(format_card(&Card::new(QUEEN, Suit::Clubs).turned_down()), "##");
    }

    #[test]
    fn test_render_foundations() {
        let mut board = Board::new();
        assert_eq!(
            render_foundations(&board),
            "Foundations: [..H] [..D] [..C] [..S]"
        );

        board.set_foundation_height(2, 3);
        assert_eq!(
            render_foundations(&board),
            "Foundations: [..H] [..D] [3C] [..S]"
        );
    }

    #[test]
    fn test_render_dealt_tableaus() {
        let board = Board::deal(&standard_deck()).unwrap();
        let text = render_tableaus(&board);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "  1   2   3   4   5   6   7");
        // Row 0: AH face-up on tableau 1, everything else hidden
        assert_eq!(lines[1], " AH  ##  ##  ##  ##  ##  ##");
        // Tallest column is tableau 7 with 11 cards
        assert_eq!(lines.len(), 1 + 11);
        assert!(lines[11].trim_start().starts_with("KS"));
    }

    #[test]
    fn test_render_hand() {
        let mut board = Board::new();
        assert_eq!(render_hand(&board), None);

        *board.tableau_mut(4).unwrap() = Tableau::from_cards(vec![
            Card::new(ACE, Suit::Spades).turned_down(),
            Card::new(9, Suit::Hearts),
        ]);
        board.pick_up(4, 1);

        assert_eq!(render_hand(&board).as_deref(), Some("Hand: 9H (from 5)"));
        assert!(board.to_string().contains("Hand: 9H"));
    }
}
