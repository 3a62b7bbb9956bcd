//! Presentation-facing types.
//!
//! - `Snapshot` / `CardView`: a read-only, serializable picture of the game
//! - `Selection`: the two-click gesture that turns into one move
//!
//! Rendering and input mapping stay with the caller; these types only carry
//! what a renderer or an input handler needs from the engine.

pub mod selection;
pub mod snapshot;

pub use selection::{Selection, SelectionStep};
pub use snapshot::{CardView, Snapshot};
