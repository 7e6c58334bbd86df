//! Yukon rules.
//!
//! - `predicates`: pure card-on-card legality checks
//! - `engine`: the `RulesEngine` trait and `YukonRules`, which enumerate
//!   legal moves and detect the end of a game
//!
//! The board engine and the rules engine share the predicates, so there is
//! one definition of what may land where.

pub mod predicates;
pub mod engine;

pub use engine::{GameResult, RulesEngine, YukonRules};
