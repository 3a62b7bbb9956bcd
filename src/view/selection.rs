//! Two-click move gesture.
//!
//! The first click picks a value card, the second click on a gap completes
//! the move. The caller owns the `Selection` and hands the finished `Move`
//! to [`crate::rules::RoundEngine::attempt_move`], which does the checking.

use crate::board::Move;
use crate::cards::{Card, CardId};

/// Pending source card between the two clicks of a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    source: Option<CardId>,
}

/// What a click did to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionStep {
    /// A value card is now the pending source (replacing any earlier one).
    Picked(CardId),
    /// Source and gap chosen; the selection is cleared.
    Ready(Move),
    /// A gap was clicked with nothing picked.
    Ignored,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn source(&self) -> Option<CardId> {
        self.source
    }

    pub fn pick(&mut self, card: &Card) -> SelectionStep {
        if !card.is_gap() {
            self.source = Some(card.id());
            return SelectionStep::Picked(card.id());
        }

        match self.source.take() {
            Some(source) => SelectionStep::Ready(Move::new(source, card.id())),
            None => SelectionStep::Ignored,
        }
    }

    pub fn clear(&mut self) {
        self.source = None;
    }
}
