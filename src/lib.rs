//! # interference
//!
//! Rule engine for Interference, a single-player patience game played on
//! four lanes of thirteen slots.
//!
//! ## The Game
//!
//! A standard deck is dealt across the lanes with the four Aces turned into
//! gaps. A card may move into a gap when it continues the card before the
//! gap (same suit, one rank higher); a gap at the start of a lane takes any
//! 2. When every lane is stuck, solved prefixes stay put and everything else
//! is reshuffled and redealt, up to three rounds. Four complete 2..K runs
//! win.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The crate knows nothing about drawing or
//!    input devices. Callers attempt moves, advance rounds and read
//!    snapshots.
//!
//! 2. **Deterministic**: Every shuffle draws from an injected, seeded
//!    `GameRng`; the same seed replays the same game.
//!
//! 3. **Loud Invariants**: Rejected moves are ordinary values; a broken
//!    board invariant is an `EngineError` or a panic, never a silent fix.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Cards, ranks, suits, the deck
//! - `board`: Lanes and the four-lane board
//! - `rules`: Round/game state machine and round transition
//! - `view`: Snapshots and the two-click selection

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use crate::core::{ConfigError, EngineError, GameConfig, GameRng, Rejection, MAX_ROUNDS};

pub use crate::cards::{Card, CardId, Deck, Rank, Suit};

pub use crate::board::{Board, Lane, Move, SlotAddr, LANE_COUNT, LANE_LEN, SLOT_COUNT};

pub use crate::rules::{new_game, GameStatus, MoveResult, RoundEngine, RoundResult};

pub use crate::view::{CardView, Selection, SelectionStep, Snapshot};
