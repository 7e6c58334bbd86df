//! Piles that hold cards on the board.
//!
//! ## Key Types
//!
//! - `Foundation`: per-suit pile built Ace to King
//! - `Tableau`: face-down prefix under a face-up run
//! - `Hand`: cards lifted off a tableau, waiting to be placed

pub mod pile;
pub mod hand;

pub use pile::{Foundation, Tableau};
pub use hand::{Hand, HandOrigin};
