//! Render-friendly snapshot of a game.

use serde::{Deserialize, Serialize};

use crate::board::{LANE_COUNT, LANE_LEN};
use crate::cards::{Card, CardId, Rank, Suit};
use crate::rules::{GameStatus, RoundEngine};

/// One slot as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    /// `None` for a gap.
    pub suit: Option<Suit>,
    pub rank: Rank,
    pub rank_value: u8,
    pub is_gap: bool,
    /// Short text form, e.g. `"10H"` or `"__"`.
    pub label: String,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            suit: card.suit(),
            rank: card.rank(),
            rank_value: card.rank_value(),
            is_gap: card.is_gap(),
            label: card.to_string(),
        }
    }
}

/// Everything needed to draw the table and its status line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub lanes: [[CardView; LANE_LEN]; LANE_COUNT],
    pub round: u32,
    pub max_rounds: u32,
    pub status: GameStatus,
    pub round_over: bool,
    pub game_over: bool,
    /// `Some` only once the game is over.
    pub success: Option<bool>,
}

impl Snapshot {
    #[must_use]
    pub fn capture(engine: &RoundEngine) -> Self {
        let lanes = engine.board().lanes();
        Self {
            lanes: std::array::from_fn(|i| {
                std::array::from_fn(|j| CardView::from(&lanes[i].cards()[j]))
            }),
            round: engine.round(),
            max_rounds: engine.config().max_rounds(),
            status: engine.status(),
            round_over: engine.is_round_over(),
            game_over: engine.is_game_over(),
            success: engine.success(),
        }
    }
}
