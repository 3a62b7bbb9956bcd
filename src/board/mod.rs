//! Board system: lanes, slot addresses, and cross-lane queries.
//!
//! ## Key Types
//!
//! - `Lane`: Thirteen slots with stuck and solved-prefix detection
//! - `Board`: Four lanes plus a card location table
//! - `SlotAddr`: `(lane, slot)` address of a card
//! - `Move`: A source card and a target gap

pub mod grid;
pub mod lane;

pub use grid::{Board, Move, SlotAddr, LANE_COUNT, SLOT_COUNT};
pub use lane::{Lane, LANE_LEN, ORDERED_SPLIT};
