//! The 52-card deck and the initial deal.

use crate::board::{Board, Lane, LANE_COUNT, LANE_LEN};
use crate::core::{EngineError, GameRng};

use super::card::{Card, Rank, Suit};

/// An ordered supply of cards, consumed by [`Deck::deal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full deck in suit-major order, Aces already turned into gaps.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::of(suit, rank)))
            .collect();
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Deal thirteen consecutive cards into each lane.
    pub fn deal(self) -> Result<Board, EngineError> {
        let mut lanes: [Lane; LANE_COUNT] = Default::default();
        for (lane, chunk) in lanes.iter_mut().zip(self.cards.chunks(LANE_LEN)) {
            *lane = Lane::from_cards(chunk.iter().copied());
        }
        Board::from_lanes(lanes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 52);

        let gaps = deck.cards().iter().filter(|c| c.is_gap()).count();
        assert_eq!(gaps, 4);
        assert!(deck.cards().iter().all(|c| c.rank() != Rank::Ace));
    }

    #[test]
    fn test_deal_unshuffled() {
        let board = Deck::standard().deal().unwrap();

        // Suit-major order: each lane is one suit, gap first
        for (i, lane) in board.lanes().iter().enumerate() {
            assert_eq!(lane.len(), 13);
            assert!(lane.cards()[0].is_gap());
            assert_eq!(lane.cards()[1].suit(), Some(Suit::ALL[i]));
        }
    }

    #[test]
    fn test_shuffle_changes_order() {
        let mut deck = Deck::standard();
        deck.shuffle(&mut GameRng::new(42));
        assert_ne!(deck, Deck::standard());
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn test_short_deck_fails_to_deal() {
        let mut deck = Deck::standard();
        deck.cards.pop();
        assert_eq!(deck.deal().unwrap_err(), EngineError::LaneLength { lane: 3, len: 12 });
    }
}
