//! The four-lane board.
//!
//! The board keeps its lanes plus a location table mapping every
//! [`CardId`] to its current [`SlotAddr`]. Moving a card rewrites two slots
//! and two table entries; lanes never change length.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::lane::{Lane, LANE_LEN};
use crate::cards::{Card, CardId, Rank, Suit};
use crate::core::{EngineError, Rejection};

/// Lanes on the board.
pub const LANE_COUNT: usize = 4;

/// Slots on the board, one per card.
pub const SLOT_COUNT: usize = LANE_COUNT * LANE_LEN;

/// Address of a slot: lane index and index within the lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotAddr {
    pub lane: usize,
    pub slot: usize,
}

/// A move gesture: put `source` where the gap `target` is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: CardId,
    pub target: CardId,
}

impl Move {
    #[must_use]
    pub const fn new(source: CardId, target: CardId) -> Self {
        Self { source, target }
    }
}

/// Four lanes of thirteen cards, every card exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    lanes: [Lane; LANE_COUNT],
    /// card -> current slot, kept in step with `lanes`
    locations: FxHashMap<CardId, SlotAddr>,
}

impl Board {
    /// Build a board, checking lane lengths and card uniqueness.
    pub fn from_lanes(lanes: [Lane; LANE_COUNT]) -> Result<Self, EngineError> {
        for (i, lane) in lanes.iter().enumerate() {
            if lane.len() != LANE_LEN {
                return Err(EngineError::LaneLength { lane: i, len: lane.len() });
            }
        }

        let mut locations = FxHashMap::default();
        locations.reserve(SLOT_COUNT);
        for (lane_idx, lane) in lanes.iter().enumerate() {
            for (slot, card) in lane.cards().iter().enumerate() {
                let addr = SlotAddr { lane: lane_idx, slot };
                if locations.insert(card.id(), addr).is_some() {
                    return Err(EngineError::DuplicateCard(card.id()));
                }
            }
        }

        Ok(Self { lanes, locations })
    }

    /// Parse the text layout produced by `Display`: one lane per line,
    /// lane 0 first, cards separated by whitespace.
    ///
    /// `__` gaps take the Ace ids of Clubs, Hearts, Spades and Diamonds in
    /// order of appearance.
    ///
    /// ```
    /// use interference::board::Board;
    /// use interference::cards::Deck;
    ///
    /// let board = Deck::standard().deal().unwrap();
    /// let text = board.to_string();
    /// assert_eq!(Board::from_layout(&text).unwrap(), board);
    /// ```
    pub fn from_layout(text: &str) -> Result<Self, EngineError> {
        let mut gaps = Suit::ALL.into_iter();
        let mut lanes = Vec::with_capacity(LANE_COUNT);

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let cards = line
                .split_whitespace()
                .map(|token| match token {
                    "__" => gaps
                        .next()
                        .map(Card::gap)
                        .ok_or_else(|| EngineError::ParseCard("more than four gaps".to_string())),
                    _ => token.parse(),
                })
                .collect::<Result<Vec<Card>, _>>()?;
            lanes.push(Lane::from_cards(cards));
        }

        let lanes: [Lane; LANE_COUNT] = lanes
            .try_into()
            .map_err(|lanes: Vec<Lane>| EngineError::LaneCount { found: lanes.len() })?;
        Self::from_lanes(lanes)
    }

    #[must_use]
    pub fn lanes(&self) -> &[Lane; LANE_COUNT] {
        &self.lanes
    }

    /// All cards, lane by lane.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.lanes.iter().flat_map(|lane| lane.cards())
    }

    #[must_use]
    pub fn locate(&self, card: CardId) -> Option<SlotAddr> {
        self.locations.get(&card).copied()
    }

    #[must_use]
    pub fn card_at(&self, addr: SlotAddr) -> Option<&Card> {
        self.lanes.get(addr.lane)?.get(addr.slot)
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.card_at(self.locate(id)?)
    }

    /// The card just before `gap` in its lane, `None` at slot 0.
    #[must_use]
    pub fn preceding_card(&self, gap: CardId) -> Option<&Card> {
        let addr = self.locate(gap)?;
        let slot = addr.slot.checked_sub(1)?;
        self.card_at(SlotAddr { lane: addr.lane, slot })
    }

    /// Check a move, saying why it is refused.
    ///
    /// - `source` must be a value card and `target` a gap
    /// - at slot 0 only a 2 fits
    /// - otherwise `source` must follow the card before the gap
    pub fn check_move(&self, source: CardId, target: CardId) -> Result<(), Rejection> {
        let moving = *self.card(source).ok_or(Rejection::UnknownCard(source))?;
        let target_card = self.card(target).ok_or(Rejection::UnknownCard(target))?;

        if moving.is_gap() {
            return Err(Rejection::SourceIsGap);
        }
        if !target_card.is_gap() {
            return Err(Rejection::TargetNotGap);
        }

        match self.preceding_card(target) {
            None if moving.rank() == Rank::Two => Ok(()),
            None => Err(Rejection::LaneStartNeedsTwo),
            Some(preceding) if moving.follows(preceding) => Ok(()),
            Some(&preceding) => Err(Rejection::OutOfSequence { moving, preceding }),
        }
    }

    #[must_use]
    pub fn is_valid_move(&self, source: CardId, target: CardId) -> bool {
        self.check_move(source, target).is_ok()
    }

    /// Exchange the slots of `source` and `target`.
    ///
    /// Does not re-check legality; callers check first.
    ///
    /// # Panics
    ///
    /// Panics if either card is not on the board.
    pub fn swap(&mut self, source: CardId, target: CardId) {
        let Some(from) = self.locate(source) else {
            panic!("card {source} is not on the board");
        };
        let Some(to) = self.locate(target) else {
            panic!("card {target} is not on the board");
        };

        if from.lane == to.lane {
            self.lanes[from.lane].swap(from.slot, to.slot);
        } else {
            let moving = self.lanes[from.lane].cards()[from.slot];
            let displaced = self.lanes[to.lane].set(to.slot, moving);
            self.lanes[from.lane].set(from.slot, displaced);
        }

        self.locations.insert(source, to);
        self.locations.insert(target, from);
    }

    /// Round-over predicate.
    #[must_use]
    pub fn all_stuck(&self) -> bool {
        self.lanes.iter().all(Lane::is_stuck)
    }

    /// Win predicate.
    #[must_use]
    pub fn all_ordered(&self) -> bool {
        self.lanes.iter().all(Lane::is_ordered)
    }

    /// Split every lane at its solved prefix.
    ///
    /// Returns the four prefixes (kept into the next round) and one pool
    /// made of all four suffixes.
    #[must_use]
    pub fn ordered_unordered(&self) -> ([Vec<Card>; LANE_COUNT], Vec<Card>) {
        let mut pool = Vec::with_capacity(SLOT_COUNT);
        let prefixes = std::array::from_fn(|i| {
            let lane = &self.lanes[i];
            let (prefix, suffix) = lane.split(lane.split_index());
            pool.extend_from_slice(suffix);
            prefix.to_vec()
        });
        (prefixes, pool)
    }

    /// Every legal move on the board.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        for lane in &self.lanes {
            let cards = lane.cards();
            for (slot, gap) in cards.iter().enumerate().filter(|(_, card)| card.is_gap()) {
                match slot.checked_sub(1).map(|prev| cards[prev]) {
                    None => moves.extend(
                        Suit::ALL
                            .into_iter()
                            .map(|suit| Move::new(CardId::of(suit, Rank::Two), gap.id())),
                    ),
                    Some(preceding) => {
                        let next = Rank::from_value(preceding.rank_value() + 1);
                        if let (Some(suit), Some(rank)) = (preceding.suit(), next) {
                            moves.push(Move::new(CardId::of(suit, rank), gap.id()));
                        }
                    }
                }
            }
        }

        moves
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lane in &self.lanes {
            let line: Vec<String> = lane.cards().iter().map(Card::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;

    const LAYOUT: &str = "
        2C 3C 4C 5C 6C 7C 8C 9C 10C JC QC __ KC
        3H 2H 4H 5H 6H 7H 8H 9H 10H JH QH KH __
        __ 2S 3S 4S 5S 6S 7S 8S 9S 10S JS QS KS
        2D 3D __ 4D 5D 6D 7D 8D 9D 10D JD QD KD
    ";

    fn board() -> Board {
        Board::from_layout(LAYOUT).unwrap()
    }

    fn id(text: &str) -> CardId {
        text.parse::<Card>().unwrap().id()
    }

    #[test]
    fn test_layout_roundtrip() {
        let board = board();
        assert_eq!(Board::from_layout(&board.to_string()).unwrap(), board);
        assert_eq!(board.cards().count(), SLOT_COUNT);
    }

    #[test]
    fn test_layout_errors() {
        assert_eq!(
            Board::from_layout("2C 3C").unwrap_err(),
            EngineError::LaneCount { found: 1 }
        );
        let short = LAYOUT.replace(" KD", "");
        assert_eq!(
            Board::from_layout(&short).unwrap_err(),
            EngineError::LaneLength { lane: 3, len: 12 }
        );
        let doubled = LAYOUT.replace("QD", "QC");
        assert_eq!(
            Board::from_layout(&doubled).unwrap_err(),
            EngineError::DuplicateCard(id("QC"))
        );
    }

    #[test]
    fn test_locate() {
        let board = board();
        assert_eq!(board.locate(id("2C")), Some(SlotAddr { lane: 0, slot: 0 }));
        assert_eq!(board.locate(id("KS")), Some(SlotAddr { lane: 2, slot: 12 }));
        assert_eq!(board.locate(CardId(99)), None);
    }

    #[test]
    fn test_preceding_card() {
        let board = board();
        let gap0 = Card::gap(Suit::Clubs).id();
        let gap2 = Card::gap(Suit::Spades).id();

        assert_eq!(board.preceding_card(gap0).map(Card::to_string), Some("QC".to_string()));
        assert_eq!(board.preceding_card(gap2), None);
    }

    #[test]
    fn test_check_move() {
        let board = board();
        let gap0 = Card::gap(Suit::Clubs).id();
        let gap2 = Card::gap(Suit::Spades).id();
        let gap3 = Card::gap(Suit::Diamonds).id();

        assert_eq!(board.check_move(id("KC"), gap0), Ok(()));
        assert_eq!(board.check_move(id("4D"), gap3), Ok(()));
        assert_eq!(board.check_move(id("2H"), gap2), Ok(()));

        assert_eq!(board.check_move(gap2, gap0), Err(Rejection::SourceIsGap));
        assert_eq!(board.check_move(id("KC"), id("2H")), Err(Rejection::TargetNotGap));
        assert_eq!(board.check_move(id("3H"), gap2), Err(Rejection::LaneStartNeedsTwo));
        assert_eq!(
            board.check_move(id("KH"), gap0),
            Err(Rejection::OutOfSequence {
                moving: Card::of(Suit::Hearts, Rank::King),
                preceding: Card::of(Suit::Clubs, Rank::Queen),
            })
        );
        assert_eq!(board.check_move(CardId(77), gap0), Err(Rejection::UnknownCard(CardId(77))));
    }

    #[test]
    fn test_swap_same_lane() {
        let mut board = board();
        let gap0 = Card::gap(Suit::Clubs).id();

        board.swap(id("KC"), gap0);

        assert!(board.lanes()[0].is_ordered());
        assert_eq!(board.locate(id("KC")), Some(SlotAddr { lane: 0, slot: 11 }));
        assert_eq!(board.locate(gap0), Some(SlotAddr { lane: 0, slot: 12 }));
    }

    #[test]
    fn test_swap_across_lanes() {
        let mut board = board();
        let gap2 = Card::gap(Suit::Spades).id();

        board.swap(id("2H"), gap2);

        assert_eq!(board.locate(id("2H")), Some(SlotAddr { lane: 2, slot: 0 }));
        assert_eq!(board.locate(gap2), Some(SlotAddr { lane: 1, slot: 1 }));
        assert!(board.lanes().iter().all(|lane| lane.len() == LANE_LEN));
        assert_eq!(board.card_at(SlotAddr { lane: 1, slot: 1 }).map(Card::is_gap), Some(true));
    }

    #[test]
    #[should_panic(expected = "not on the board")]
    fn test_swap_unknown_card_panics() {
        let mut board = board();
        board.swap(CardId(200), id("2C"));
    }

    #[test]
    fn test_stuck_and_ordered() {
        let mut board = board();
        assert!(!board.all_stuck());

        board.swap(id("KC"), Card::gap(Suit::Clubs).id());
        assert!(board.lanes()[0].is_stuck());
        assert!(board.lanes()[1].is_stuck());
        assert!(!board.all_stuck());
        assert!(!board.all_ordered());
    }

    #[test]
    fn test_ordered_unordered() {
        let (prefixes, pool) = board().ordered_unordered();

        let lens: Vec<_> = prefixes.iter().map(Vec::len).collect();
        assert_eq!(lens, vec![11, 0, 0, 2]);
        assert_eq!(pool.len(), SLOT_COUNT - 13);
        assert_eq!(pool.iter().filter(|c| c.is_gap()).count(), 4);
    }

    #[test]
    fn test_legal_moves() {
        let board = board();
        let mut moves = board.legal_moves();
        moves.sort_by_key(|mv| (mv.target, mv.source));

        let gap0 = Card::gap(Suit::Clubs).id();
        let gap2 = Card::gap(Suit::Spades).id();
        let gap3 = Card::gap(Suit::Diamonds).id();
        let mut expected = vec![
            Move::new(id("KC"), gap0),
            Move::new(id("2C"), gap2),
            Move::new(id("2H"), gap2),
            Move::new(id("2S"), gap2),
            Move::new(id("2D"), gap2),
            Move::new(id("4D"), gap3),
        ];
        expected.sort_by_key(|mv| (mv.target, mv.source));

        assert_eq!(moves, expected);
        assert!(moves.iter().all(|mv| board.is_valid_move(mv.source, mv.target)));
    }

    #[test]
    fn test_dealt_board_has_every_card() {
        let mut deck = Deck::standard();
        deck.shuffle(&mut crate::core::GameRng::new(9));
        let board = deck.deal().unwrap();

        let mut ids: Vec<_> = board.cards().map(Card::id).collect();
        ids.sort();
        assert_eq!(ids, (0..52).map(CardId).collect::<Vec<_>>());
    }
}
