//! Round and game state machine.
//!
//! ```text
//! Active(r) --move, board stuck, all ordered--------------> Won
//! Active(r) --move, board stuck, r == max_rounds-----------> Lost
//! Active(r) --move, board stuck----------------------------> RoundOver(r)
//! RoundOver(r) --advance_round----------------------------> Active(r + 1)
//! ```
//!
//! The same stuck/solved evaluation runs right after the deal and right
//! after each redeal, so a board dealt already stuck skips straight ahead.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::transition::redeal;
use crate::board::{Board, Move};
use crate::cards::{CardId, Deck};
use crate::core::{GameConfig, GameRng, Rejection};
use crate::view::Snapshot;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    Active,
    /// Every lane is stuck; waiting for `advance_round`.
    RoundOver,
    /// Every lane holds its full run. Terminal.
    Won,
    /// Stuck on the last round without a full solve. Terminal.
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }

    /// `Some` once the game is over.
    #[must_use]
    pub const fn success(self) -> Option<bool> {
        match self {
            GameStatus::Won => Some(true),
            GameStatus::Lost => Some(false),
            GameStatus::Active | GameStatus::RoundOver => None,
        }
    }
}

/// Outcome of [`RoundEngine::attempt_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was made; carries the status after re-evaluation.
    Accepted(GameStatus),
    Rejected(Rejection),
}

impl MoveResult {
    #[must_use]
    pub const fn accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveResult::Rejected(rejection) => Some(*rejection),
            MoveResult::Accepted(_) => None,
        }
    }
}

/// Outcome of [`RoundEngine::advance_round`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundResult {
    /// The board was redealt; carries the new round number.
    Advanced { round: u32 },
    Rejected(Rejection),
}

impl RoundResult {
    #[must_use]
    pub const fn accepted(&self) -> bool {
        matches!(self, RoundResult::Advanced { .. })
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            RoundResult::Rejected(rejection) => Some(*rejection),
            RoundResult::Advanced { .. } => None,
        }
    }
}

/// One game of Interference: the board plus round bookkeeping.
///
/// ## Example
///
/// ```
/// use interference::core::{GameConfig, GameRng};
/// use interference::rules::{GameStatus, RoundEngine};
///
/// let mut engine = RoundEngine::new_game(GameConfig::default(), GameRng::new(7));
/// assert_eq!(engine.round(), 1);
///
/// if let Some(mv) = engine.legal_moves().first().copied() {
///     assert!(engine.attempt_move(mv.source, mv.target).accepted());
/// }
///
/// // A gap can never be moved
/// let gap = engine.board().cards().find(|c| c.is_gap()).unwrap().id();
/// assert!(!engine.attempt_move(gap, gap).accepted());
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: GameConfig,
    board: Board,
    /// Redeal stream.
    rng: GameRng,
    round: u32,
    status: GameStatus,
}

impl RoundEngine {
    /// Shuffle a standard deck, deal it, and start round 1.
    ///
    /// Dealing and redealing use separate streams derived from `rng`.
    #[must_use]
    pub fn new_game(config: GameConfig, rng: GameRng) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng.for_context("deal"));
        let board = match deck.deal() {
            Ok(board) => board,
            Err(err) => panic!("standard deck failed to deal: {err}"),
        };

        info!(seed = rng.seed(), max_rounds = config.max_rounds(), "dealt new game");
        Self::from_board(config, board, rng.for_context("redeal"), 1)
    }

    /// Start from a given board at a given round.
    ///
    /// `rng` is used for redeals. The board is evaluated immediately, so a
    /// stuck board starts in `RoundOver`, `Won` or `Lost`.
    ///
    /// # Panics
    ///
    /// Panics if `round` is not in `1..=config.max_rounds()`.
    #[must_use]
    pub fn from_board(config: GameConfig, board: Board, rng: GameRng, round: u32) -> Self {
        assert!(
            (1..=config.max_rounds()).contains(&round),
            "Round {round} outside 1..={}",
            config.max_rounds()
        );

        let mut engine = Self {
            config,
            board,
            rng,
            round,
            status: GameStatus::Active,
        };
        engine.settle();
        engine
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once every lane is stuck, including at game end.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.status != GameStatus::Active
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    #[must_use]
    pub fn success(&self) -> Option<bool> {
        self.status.success()
    }

    /// Legal moves right now; empty unless the round is active.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.status {
            GameStatus::Active => self.board.legal_moves(),
            _ => Vec::new(),
        }
    }

    /// Try to move `source` into the gap `target`.
    ///
    /// A rejected attempt changes nothing.
    pub fn attempt_move(&mut self, source: CardId, target: CardId) -> MoveResult {
        let checked = match self.status {
            GameStatus::Active => self.board.check_move(source, target),
            GameStatus::RoundOver => Err(Rejection::RoundOver),
            GameStatus::Won | GameStatus::Lost => Err(Rejection::GameOver),
        };
        if let Err(rejection) = checked {
            debug!(%source, %target, %rejection, "move rejected");
            return MoveResult::Rejected(rejection);
        }

        self.board.swap(source, target);
        debug!(%source, %target, round = self.round, "move accepted");

        self.settle();
        MoveResult::Accepted(self.status)
    }

    /// Redeal the unsolved cards and start the next round.
    ///
    /// # Panics
    ///
    /// Panics if the redeal breaks a board invariant; the game state would
    /// be corrupt past that point.
    pub fn advance_round(&mut self) -> RoundResult {
        let rejection = match self.status {
            GameStatus::RoundOver if self.round < self.config.max_rounds() => None,
            GameStatus::Active => Some(Rejection::RoundInProgress),
            GameStatus::RoundOver | GameStatus::Won | GameStatus::Lost => Some(Rejection::GameOver),
        };
        if let Some(rejection) = rejection {
            debug!(round = self.round, %rejection, "round advance rejected");
            return RoundResult::Rejected(rejection);
        }

        self.board = match redeal(&self.board, &mut self.rng) {
            Ok(board) => board,
            Err(err) => panic!("round transition broke a board invariant: {err}"),
        };
        self.round += 1;
        info!(round = self.round, "round started");

        self.settle();
        RoundResult::Advanced { round: self.round }
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    fn settle(&mut self) {
        if !self.board.all_stuck() {
            self.status = GameStatus::Active;
            return;
        }

        self.status = if self.board.all_ordered() {
            GameStatus::Won
        } else if self.round >= self.config.max_rounds() {
            GameStatus::Lost
        } else {
            GameStatus::RoundOver
        };

        match self.status {
            GameStatus::Won => info!(round = self.round, "game won"),
            GameStatus::Lost => info!(round = self.round, "game lost"),
            _ => info!(round = self.round, "round over"),
        }
    }
}

/// Start a default game (three rounds) from `rng`.
#[must_use]
pub fn new_game(rng: GameRng) -> RoundEngine {
    RoundEngine::new_game(GameConfig::default(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    const ONE_MOVE_LEFT: &str = "
        2C 3C 4C 5C 6C 7C 8C 9C 10C JC QC __ KC
        2H 3H 4H 5H 6H 7H 8H 9H 10H JH QH KH __
        2S 3S 4S 5S 6S 7S 8S 9S 10S JS QS KS __
        2D 3D 4D 5D 6D 7D 8D 9D 10D JD QD KD __
    ";

    fn engine_at(round: u32) -> RoundEngine {
        let board = Board::from_layout(ONE_MOVE_LEFT).unwrap();
        RoundEngine::from_board(GameConfig::default(), board, GameRng::new(1), round)
    }

    fn id(text: &str) -> CardId {
        text.parse::<Card>().unwrap().id()
    }

    #[test]
    fn test_new_game() {
        let engine = new_game(GameRng::new(42));
        assert_eq!(engine.round(), 1);
        assert_eq!(engine.board().cards().count(), 52);
        assert_eq!(engine.success(), None);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = new_game(GameRng::new(42));
        let b = new_game(GameRng::new(42));
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_winning_move() {
        let mut engine = engine_at(1);
        assert_eq!(engine.status(), GameStatus::Active);

        let result = engine.attempt_move(id("KC"), Card::gap(Suit::Clubs).id());

        assert_eq!(result, MoveResult::Accepted(GameStatus::Won));
        assert!(engine.is_game_over());
        assert_eq!(engine.success(), Some(true));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut engine = engine_at(1);
        let before = engine.board().clone();

        let result = engine.attempt_move(id("KH"), Card::gap(Suit::Clubs).id());

        assert!(!result.accepted());
        assert!(matches!(result.rejection(), Some(Rejection::OutOfSequence { .. })));
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.status(), GameStatus::Active);
    }

    #[test]
    fn test_advance_while_active_rejected() {
        let mut engine = engine_at(1);
        assert_eq!(
            engine.advance_round(),
            RoundResult::Rejected(Rejection::RoundInProgress)
        );
        assert_eq!(engine.round(), 1);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut engine = engine_at(2);
        engine.attempt_move(id("KC"), Card::gap(Suit::Clubs).id());

        let result = engine.attempt_move(id("2C"), Card::gap(Suit::Hearts).id());
        assert_eq!(result, MoveResult::Rejected(Rejection::GameOver));
        assert_eq!(engine.advance_round(), RoundResult::Rejected(Rejection::GameOver));
        assert!(engine.legal_moves().is_empty());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_round_out_of_range_panics() {
        let _ = engine_at(4);
    }
}
