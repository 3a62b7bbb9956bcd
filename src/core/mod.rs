//! Core engine types: RNG, configuration, errors.
//!
//! These are the pieces every other module leans on and that carry no
//! card-game rules of their own.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, MAX_ROUNDS};
pub use error::{ConfigError, EngineError, Rejection};
pub use rng::GameRng;
