//! The Yukon board: foundations, tableaus, the hand and the move engine.

pub mod engine;
pub mod deal;

pub use engine::{Board, Placement};
