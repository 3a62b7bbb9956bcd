//! A single lane of thirteen slots.

use smallvec::SmallVec;

use crate::cards::{Card, Rank};
use crate::core::EngineError;

/// Slots per lane.
pub const LANE_LEN: usize = 13;

/// Split index of a lane holding the complete 2..K run.
///
/// The run fills slots 0..=11; slot 12 always holds something else.
pub const ORDERED_SPLIT: usize = LANE_LEN - 1;

/// An ordered row of cards.
///
/// Outside of a round transition a lane always holds [`LANE_LEN`] cards;
/// [`crate::board::Board`] refuses to be built otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lane {
    slots: SmallVec<[Card; LANE_LEN]>,
}

impl Lane {
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            slots: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.slots
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.slots.get(index)
    }

    pub fn push(&mut self, card: Card) {
        self.slots.push(card);
    }

    /// True when no gap in this lane can ever be filled again this round.
    ///
    /// A gap right after a King is dead, and so is every gap in a run that
    /// starts right after a King. Any other gap can take some card.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        let mut after_king = false;

        for card in &self.slots {
            match card.rank() {
                Rank::King => after_king = true,
                Rank::Gap => {
                    if !after_king {
                        return false;
                    }
                }
                _ => after_king = false,
            }
        }

        true
    }

    /// Length of the solved prefix: a same-suit run climbing from a 2.
    ///
    /// Returns [`ORDERED_SPLIT`] when the whole 2..K run is in place.
    #[must_use]
    pub fn split_index(&self) -> usize {
        match self.slots.first() {
            Some(first) if first.rank() == Rank::Two => {}
            _ => return 0,
        }

        for i in 1..self.slots.len() {
            if !self.slots[i].follows(&self.slots[i - 1]) {
                return i;
            }
        }

        // Only reachable for a lane shorter than LANE_LEN.
        self.slots.len().min(ORDERED_SPLIT)
    }

    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.split_index() == ORDERED_SPLIT
    }

    /// Split into `(prefix, suffix)` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    #[must_use]
    pub fn split(&self, index: usize) -> (&[Card], &[Card]) {
        self.slots.split_at(index)
    }

    /// Pop cards from `pool` until the lane holds [`LANE_LEN`] cards.
    pub fn fill_to_13(&mut self, pool: &mut Vec<Card>) -> Result<(), EngineError> {
        while self.slots.len() < LANE_LEN {
            let card = pool.pop().ok_or(EngineError::EmptyPool {
                len: self.slots.len(),
            })?;
            self.slots.push(card);
        }
        Ok(())
    }

    pub(crate) fn set(&mut self, index: usize, card: Card) -> Card {
        std::mem::replace(&mut self.slots[index], card)
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }
}
