//! Game rules: the round/game state machine and the round transition.
//!
//! Move legality itself lives on [`crate::board::Board`]; this module decides
//! what a legal move means for the round and the game.

pub mod engine;
pub mod transition;

pub use engine::{new_game, GameStatus, MoveResult, RoundEngine, RoundResult};
pub use transition::redeal;
