//! Card, Suit, and Rank types.
//!
//! A [`Card`] is a small `Copy` value carrying its own identity. The four
//! Aces never appear as Aces: they are turned into gaps when created, and a
//! gap keeps the [`CardId`] of the Ace it replaced so every slot on the board
//! still holds a distinct card.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// The four suits, in deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Hearts,
    Spades,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds];

    /// Position in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Single-letter code used in text layouts.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            _ => None,
        }
    }
}

/// Card rank as an integer enumeration.
///
/// `Gap` is the reserved zero value. `Ace` exists only so a standard deck can
/// be described; an Ace becomes a gap the moment it is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Gap = 0,
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 13
}

impl Rank {
    /// The thirteen ranks of a standard suit, Ace to King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Integer value used for sequence arithmetic (Gap = 0, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::value`].
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Rank::Gap),
            1..=13 => Some(Rank::ALL[usize::from(value) - 1]),
            _ => None,
        }
    }

    /// Short label used in text layouts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Gap => "__",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(label))
    }
}

/// Stable identity of one of the 52 cards.
///
/// Derived from the card's original suit and rank, so `0..52` in suit-major
/// order. A gap carries the id of the Ace it replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    #[must_use]
    pub const fn of(suit: Suit, rank: Rank) -> Self {
        let offset = match rank {
            Rank::Gap => 0,
            _ => rank.value() - 1,
        };
        Self(suit.index() * 13 + offset)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A card on the board: either a value card or a gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    id: CardId,
    suit: Option<Suit>,
    rank: Rank,
}

impl Card {
    /// Create the card for `suit` and `rank`. Aces come back as gaps.
    #[must_use]
    pub const fn of(suit: Suit, rank: Rank) -> Self {
        match rank {
            Rank::Gap | Rank::Ace => Self::gap(suit),
            _ => Self {
                id: CardId::of(suit, rank),
                suit: Some(suit),
                rank,
            },
        }
    }

    /// The gap that replaced the Ace of `suit`.
    #[must_use]
    pub const fn gap(suit: Suit) -> Self {
        Self {
            id: CardId::of(suit, Rank::Ace),
            suit: None,
            rank: Rank::Gap,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Suit of a value card; `None` for a gap.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn rank_value(&self) -> u8 {
        self.rank.value()
    }

    #[must_use]
    pub const fn is_gap(&self) -> bool {
        matches!(self.rank, Rank::Gap)
    }

    #[must_use]
    pub const fn is_king(&self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// True if `self` may sit directly after `preceding` in a run:
    /// same suit, rank exactly one higher. Gaps never follow or get followed.
    #[must_use]
    pub fn follows(&self, preceding: &Card) -> bool {
        match (self.suit, preceding.suit) {
            (Some(suit), Some(prev_suit)) => {
                suit == prev_suit && self.rank_value() == preceding.rank_value() + 1
            }
            _ => false,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{}{}", self.rank.label(), suit.letter()),
            None => f.write_str(Rank::Gap.label()),
        }
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parse `"2C"`, `"10H"`, `"KD"`. `"AS"` names the gap left by the Ace
    /// of Spades. A bare `"__"` is rejected since it does not say which gap.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || EngineError::ParseCard(s.to_string());
        let s = s.trim();
        let letter = s.chars().last().ok_or_else(bad)?;
        let suit = Suit::from_letter(letter).ok_or_else(bad)?;
        let rank = Rank::from_label(&s[..s.len() - letter.len_utf8()]).ok_or_else(bad)?;
        Ok(Card::of(suit, rank))
    }
}
