//! Board engine integration tests.
//!
//! These tests drive the pick-up / place / rollback cycle through the
//! public API only and check the observable board afterwards.

use rust_yukon::core::{ACE, KING, QUEEN};
use rust_yukon::{standard_deck, Board, Card, Move, Placement, Suit, Tableau};

fn c(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn set(board: &mut Board, index: usize, cards: Vec<Card>) {
    *board.tableau_mut(index).unwrap() = Tableau::from_cards(cards);
}

// =============================================================================
// Dealing
// =============================================================================

/// Test that the deal places every card exactly once in the Yukon layout.
#[test]
fn test_deal_completeness() {
    let deck = standard_deck();
    let board = Board::deal(&deck).unwrap();

    let total: usize = board.tableaus().iter().map(Tableau::len).sum();
    assert_eq!(total, 52);

    let mut dealt: Vec<Card> = board
        .tableaus()
        .iter()
        .flat_map(|t| t.cards().iter().map(|c| c.turned_up()))
        .collect();
    dealt.sort_by_key(|c| (c.suit, c.rank));
    let mut expected = deck.clone();
    expected.sort_by_key(|c| (c.suit, c.rank));
    assert_eq!(dealt, expected);

    let t0 = board.tableau(0).unwrap();
    assert_eq!(t0.len(), 1);
    assert!(!t0.cards()[0].face_down);

    for i in 1..7 {
        let t = board.tableau(i).unwrap();
        assert_eq!(t.len(), i + 5);
        assert!(t.cards()[..i].iter().all(|c| c.face_down));
        assert!(t.cards()[i..].iter().all(|c| !c.face_down));
    }
}

// =============================================================================
// Move atomicity
// =============================================================================

/// Test that a rejected tableau placement restores both piles exactly.
#[test]
fn test_rejected_tableau_move_is_atomic() {
    let mut board = Board::new();
    set(&mut board, 0, vec![c(8, Suit::Diamonds)]);
    set(
        &mut board,
        1,
        vec![
            c(2, Suit::Clubs).turned_down(),
            c(9, Suit::Spades),
            c(8, Suit::Hearts),
        ],
    );
    let before = board.clone();

    assert!(board.pick_up(1, 2));
    assert_eq!(board.place_on_tableau(0), Placement::RolledBack);

    assert_eq!(board, before);
    assert!(board.hand().is_empty());
}

/// Test that a rejected foundation placement restores the origin.
#[test]
fn test_rejected_foundation_move_is_atomic() {
    let mut board = Board::new();
    set(&mut board, 3, vec![c(KING, Suit::Clubs).turned_down(), c(2, Suit::Clubs)]);
    let before = board.clone();

    assert!(board.pick_up(3, 1));
    assert_eq!(board.place_on_foundation(2), Placement::RolledBack);

    assert_eq!(board, before);
}

/// Test that refused pick-ups leave the board untouched.
#[test]
fn test_refused_pick_ups() {
    let mut board = Board::deal(&standard_deck()).unwrap();
    let before = board.clone();

    assert!(!board.pick_up(0, 0));
    assert!(!board.pick_up(0, 2));
    assert!(!board.pick_up(3, 6)); // one face-down card in the run
    assert!(!board.pick_up(7, 1));

    assert_eq!(board, before);
}

// =============================================================================
// Tableau rules
// =============================================================================

/// Test that any King can go onto an empty tableau.
#[test]
fn test_king_to_empty() {
    for suit in Suit::ALL {
        let mut board = Board::new();
        set(&mut board, 1, vec![c(KING, suit)]);

        assert!(board.pick_up(1, 1));
        assert_eq!(board.place_on_tableau(0), Placement::Placed);
        assert_eq!(board.tableau(0).unwrap().cards(), &[c(KING, suit)]);
    }
}

/// Test that nothing but a King can go onto an empty tableau.
#[test]
fn test_non_king_to_empty_fails() {
    let mut board = Board::new();
    set(&mut board, 1, vec![c(QUEEN, Suit::Hearts)]);

    assert!(board.pick_up(1, 1));
    assert_eq!(board.place_on_tableau(0), Placement::RolledBack);

    assert!(board.tableau(0).unwrap().is_empty());
    assert_eq!(board.tableau(1).unwrap().cards(), &[c(QUEEN, Suit::Hearts)]);
}

/// Test alternating color descent.
#[test]
fn test_alternating_color_descent() {
    let cases = [
        (c(4, Suit::Clubs), c(5, Suit::Hearts), true),
        (c(4, Suit::Spades), c(5, Suit::Diamonds), true),
        (c(4, Suit::Diamonds), c(5, Suit::Hearts), false),
        (c(4, Suit::Clubs), c(6, Suit::Spades), false),
        (c(4, Suit::Clubs), c(3, Suit::Hearts), false),
    ];

    for (card, top, ok) in cases {
        let mut board = Board::new();
        set(&mut board, 0, vec![top]);
        set(&mut board, 1, vec![card]);

        assert!(board.pick_up(1, 1));
        let expected = if ok { Placement::Placed } else { Placement::RolledBack };
        assert_eq!(board.place_on_tableau(0), expected, "{card} onto {top}");
    }
}

/// Test that only the lead card of a run is checked.
#[test]
fn test_only_lead_card_is_checked() {
    // 3H, 7S, 2D is not a valid sequence, but the lead 3H fits on 4C.
    let mut board = Board::new();
    set(&mut board, 0, vec![c(4, Suit::Clubs)]);
    set(
        &mut board,
        1,
        vec![c(3, Suit::Hearts), c(7, Suit::Spades), c(2, Suit::Diamonds)],
    );

    assert!(board.pick_up(1, 3));
    assert_eq!(board.place_on_tableau(0), Placement::Placed);

    assert_eq!(board.tableau(0).unwrap().len(), 4);
    assert_eq!(board.tableau(0).unwrap().top(), Some(&c(2, Suit::Diamonds)));
    assert!(board.tableau(1).unwrap().is_empty());
}

/// Test that a face-down destination top refuses even a matching card.
#[test]
fn test_face_down_destination_guard() {
    let mut board = Board::new();
    set(&mut board, 0, vec![c(5, Suit::Hearts).turned_down()]);
    set(&mut board, 1, vec![c(4, Suit::Clubs)]);
    let before = board.clone();

    assert!(board.pick_up(1, 1));
    assert_eq!(board.place_on_tableau(0), Placement::RolledBack);
    assert_eq!(board, before);
}

// =============================================================================
// Foundations
// =============================================================================

/// Test that a foundation builds Ace upward, one card at a time.
#[test]
fn test_foundation_sequencing() {
    let mut board = Board::new();
    set(
        &mut board,
        0,
        vec![
            c(3, Suit::Diamonds),
            c(2, Suit::Diamonds),
            c(4, Suit::Diamonds),
            c(ACE, Suit::Diamonds),
        ],
    );

    // Ace first
    assert_eq!(board.apply(&Move::ToFoundation { from: 0, count: 1, to: 1 }), Placement::Placed);
    // 4 is out of order
    assert_eq!(
        board.apply(&Move::ToFoundation { from: 0, count: 1, to: 1 }),
        Placement::RolledBack
    );
    assert_eq!(board.foundation(1).unwrap().len(), 1);
    assert_eq!(board.tableau(0).unwrap().top(), Some(&c(4, Suit::Diamonds)));

    // Move the 4 aside and continue
    set(&mut board, 0, vec![c(3, Suit::Diamonds), c(2, Suit::Diamonds)]);
    assert_eq!(board.apply(&Move::ToFoundation { from: 0, count: 1, to: 1 }), Placement::Placed);
    assert_eq!(board.apply(&Move::ToFoundation { from: 0, count: 1, to: 1 }), Placement::Placed);
    assert_eq!(board.foundation(1).unwrap().top(), Some(&c(3, Suit::Diamonds)));
}

/// Test that cards of the wrong suit are rolled back.
#[test]
fn test_foundation_wrong_suit() {
    let mut board = Board::new();
    set(&mut board, 0, vec![c(ACE, Suit::Clubs)]);

    assert_eq!(
        board.apply(&Move::ToFoundation { from: 0, count: 1, to: 3 }),
        Placement::RolledBack
    );
    assert!(board.foundation(3).unwrap().is_empty());
    assert_eq!(board.tableau(0).unwrap().len(), 1);
}

/// Test that two cards never go to a foundation in one move.
#[test]
fn test_foundation_refuses_multiple_cards() {
    let mut board = Board::new();
    set(&mut board, 0, vec![c(2, Suit::Hearts), c(ACE, Suit::Hearts)]);
    let before = board.clone();

    assert!(board.pick_up(0, 2));
    assert_eq!(board.place_on_foundation(0), Placement::Ignored);
    assert!(board.return_to_origin());

    assert_eq!(board, before);
}

// =============================================================================
// Reveal and win
// =============================================================================

/// Test that lifting a run reveals the card beneath, and it stays revealed
/// after the move commits.
#[test]
fn test_auto_reveal() {
    let mut board = Board::new();
    set(&mut board, 0, vec![c(6, Suit::Clubs)]);
    set(
        &mut board,
        2,
        vec![c(9, Suit::Spades).turned_down(), c(5, Suit::Hearts)],
    );

    assert!(board.pick_up(2, 1));
    assert!(!board.tableau(2).unwrap().top().unwrap().face_down);

    assert_eq!(board.place_on_tableau(0), Placement::Placed);
    assert_eq!(board.tableau(2).unwrap().cards(), &[c(9, Suit::Spades)]);
}

/// Test the win condition.
#[test]
fn test_win_condition() {
    let mut board = Board::new();
    for i in 0..4 {
        board.set_foundation_height(i, 13);
    }
    assert!(board.is_won());

    for i in 0..4 {
        let mut partial = board.clone();
        partial.set_foundation_height(i, 12);
        assert!(!partial.is_won());
    }
}

// =============================================================================
// End-to-end
// =============================================================================

/// Test King of Hearts then Queen of Clubs onto an empty tableau.
#[test]
fn test_king_then_queen_scenario() {
    let mut board = Board::new();
    set(&mut board, 1, vec![c(KING, Suit::Hearts)]);

    assert!(board.pick_up(1, 1));
    assert_eq!(board.hand().cards(), &[c(KING, Suit::Hearts)]);
    assert!(board.tableau(1).unwrap().is_empty());

    assert_eq!(board.place_on_tableau(0), Placement::Placed);
    assert_eq!(board.tableau(0).unwrap().cards(), &[c(KING, Suit::Hearts)]);
    assert!(board.hand().is_empty());

    board.tableau_mut(1).unwrap().push(c(QUEEN, Suit::Clubs));
    assert!(board.pick_up(1, 1));
    assert_eq!(board.place_on_tableau(0), Placement::Placed);

    assert_eq!(
        board.tableau(0).unwrap().cards(),
        &[c(KING, Suit::Hearts), c(QUEEN, Suit::Clubs)]
    );
}
