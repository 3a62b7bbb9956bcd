//! Card system: suits, ranks, card identity, and the deck.
//!
//! ## Key Types
//!
//! - `Card`: A value card or a gap, with a stable `CardId`
//! - `Rank`: Integer rank enumeration, `Gap` = 0
//! - `Deck`: The 52-card deck, shuffled and dealt into a `Board`

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::Deck;
