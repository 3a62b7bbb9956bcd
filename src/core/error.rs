//! Error and rejection types.
//!
//! Two very different failure classes live here:
//!
//! - [`Rejection`]: an expected "no" to a player gesture or a mistimed call.
//!   Nothing changes on the board; the message can be shown to the player.
//! - [`EngineError`]: a broken board invariant (wrong lane length, duplicate
//!   card, exhausted pool). Returned by the building blocks so callers can
//!   report it; the engine itself treats it as fatal.
//!
//! [`ConfigError`] covers a [`crate::core::GameConfig`] that could never be
//! played; it is refused before any engine exists.

use thiserror::Error;

use crate::cards::{Card, CardId};

/// Why a move or a round advance was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("card {0} is not on the board")]
    UnknownCard(CardId),
    #[error("a gap cannot be moved")]
    SourceIsGap,
    #[error("cards can only be moved into a gap")]
    TargetNotGap,
    #[error("only a 2 can start a lane")]
    LaneStartNeedsTwo,
    #[error("{moving} cannot follow {preceding}")]
    OutOfSequence { moving: Card, preceding: Card },
    #[error("the round is over")]
    RoundOver,
    #[error("the game is over")]
    GameOver,
    #[error("the round is still in progress")]
    RoundInProgress,
}

/// A game configuration that cannot be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one round")]
    NoRounds,
}

/// A violated board invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("card pool ran dry with the lane at {len} of 13 slots")]
    EmptyPool { len: usize },
    #[error("lane {lane} holds {len} cards, expected 13")]
    LaneLength { lane: usize, len: usize },
    #[error("expected 4 lanes, found {found}")]
    LaneCount { found: usize },
    #[error("card {0} appears more than once")]
    DuplicateCard(CardId),
    #[error("expected 4 gaps between rounds, found {found}")]
    GapCount { found: usize },
    #[error("{count} cards left over after refilling the lanes")]
    LeftoverCards { count: usize },
    #[error("cannot parse card: {0}")]
    ParseCard(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_rejection_messages() {
        let moving = Card::of(Suit::Diamonds, Rank::Five);
        let preceding = Card::of(Suit::Diamonds, Rank::Three);
        let rejection = Rejection::OutOfSequence { moving, preceding };

        assert_eq!(rejection.to_string(), "5D cannot follow 3D");
        assert_eq!(Rejection::LaneStartNeedsTwo.to_string(), "only a 2 can start a lane");
    }

    #[test]
    fn test_engine_error_messages() {
        let err = EngineError::LaneLength { lane: 2, len: 12 };
        assert_eq!(err.to_string(), "lane 2 holds 12 cards, expected 13");
    }
}
