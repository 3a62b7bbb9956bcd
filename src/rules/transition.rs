//! Round transition: keep what is solved, reshuffle what is not.
//!
//! Each lane keeps its solved prefix, gets exactly one gap appended, and is
//! topped up to thirteen slots from the shuffled unsolved value cards.

use tracing::debug;

use crate::board::{Board, Lane, LANE_COUNT};
use crate::cards::Card;
use crate::core::{EngineError, GameRng};

/// Build the next round's board from `board`.
///
/// Does not require `board` to be stuck; the engine only calls it at a
/// round boundary.
///
/// # Errors
///
/// [`EngineError::GapCount`] and [`EngineError::LeftoverCards`] guard the
/// card count. Neither can occur for a board built by
/// [`Board::from_lanes`], which holds each of the four gap ids exactly once
/// among 52 distinct cards; they only report a broken invariant. An
/// [`EngineError`] from the final [`Board::from_lanes`] is likewise
/// unreachable from a valid board.
pub fn redeal(board: &Board, rng: &mut GameRng) -> Result<Board, EngineError> {
    let (prefixes, pool) = board.ordered_unordered();
    let (gaps, mut values): (Vec<Card>, Vec<Card>) = pool.into_iter().partition(Card::is_gap);

    // A solved prefix never holds a gap, so all four are in the pool.
    if gaps.len() != LANE_COUNT {
        return Err(EngineError::GapCount { found: gaps.len() });
    }

    rng.shuffle(&mut values);
    debug!(
        kept = ?prefixes.iter().map(Vec::len).collect::<Vec<_>>(),
        reshuffled = values.len(),
        "redealing unsolved cards"
    );

    let mut lanes: [Lane; LANE_COUNT] = Default::default();
    for ((lane, prefix), gap) in lanes.iter_mut().zip(prefixes).zip(gaps) {
        *lane = Lane::from_cards(prefix);
        lane.push(gap);
        lane.fill_to_13(&mut values)?;
    }

    if !values.is_empty() {
        return Err(EngineError::LeftoverCards { count: values.len() });
    }

    Board::from_lanes(lanes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{LANE_LEN, SLOT_COUNT};
    use crate::cards::Deck;

    const SOLVED_CLUBS: &str = "
        2C 3C 4C 5C 6C 7C 8C 9C 10C JC QC KC __
        3H 2H 4H 5H 6H 7H 8H 9H 10H JH QH KH __
        3S 2S 4S 5S 6S 7S 8S 9S 10S JS QS KS __
        3D 2D 4D 5D 6D 7D 8D 9D 10D JD QD KD __
    ";

    fn sorted_ids(board: &Board) -> Vec<u8> {
        let mut ids: Vec<_> = board.cards().map(|c| c.id().raw()).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_solved_lane_is_kept() {
        let board = Board::from_layout(SOLVED_CLUBS).unwrap();
        let next = redeal(&board, &mut GameRng::new(3)).unwrap();

        assert_eq!(next.lanes()[0], board.lanes()[0]);
        for lane in &next.lanes()[1..] {
            assert_eq!(lane.len(), LANE_LEN);
            assert!(lane.cards()[0].is_gap());
            assert_eq!(lane.cards().iter().filter(|c| c.is_gap()).count(), 1);
        }
        assert_eq!(sorted_ids(&next), sorted_ids(&board));
    }

    #[test]
    fn test_redeal_is_deterministic() {
        let board = Board::from_layout(SOLVED_CLUBS).unwrap();
        let a = redeal(&board, &mut GameRng::new(11)).unwrap();
        let b = redeal(&board, &mut GameRng::new(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_redeal_dealt_board() {
        let mut deck = Deck::standard();
        deck.shuffle(&mut GameRng::new(5));
        let board = deck.deal().unwrap();

        let next = redeal(&board, &mut GameRng::new(6)).unwrap();

        assert_eq!(next.cards().count(), SLOT_COUNT);
        assert_eq!(sorted_ids(&next), sorted_ids(&board));
        for (old, new) in board.lanes().iter().zip(next.lanes()) {
            let kept = old.split_index();
            assert_eq!(&new.cards()[..kept], &old.cards()[..kept]);
            assert!(new.cards()[kept].is_gap());
        }
    }
}
