//! Text command front end.
//!
//! - `Command`: one parsed line of player input
//! - `GameSession`: owns a board, dispatches commands, runs the prompt loop

pub mod command;
pub mod game;

pub use command::Command;
pub use game::{GameSession, SessionEvent, HELP_TEXT};
