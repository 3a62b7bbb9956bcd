//! Game configuration.
//!
//! The board geometry is fixed by the deck (four suits, thirteen ranks), so
//! the only tunable is how many rounds a game may last.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of rounds before an unsolved game is lost.
pub const MAX_ROUNDS: u32 = 3;

/// Configuration for a single game.
///
/// Deserialization goes through the same check as
/// [`GameConfig::try_with_max_rounds`], so a loaded config always allows at
/// least one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    max_rounds: u32,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawGameConfig {
    max_rounds: u32,
}

impl Default for RawGameConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        GameConfig::new().try_with_max_rounds(raw.max_rounds)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds allowed (deal plus redeals). Always at least 1.
    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Set the number of rounds, refusing zero.
    pub fn try_with_max_rounds(mut self, rounds: u32) -> Result<Self, ConfigError> {
        if rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        self.max_rounds = rounds;
        Ok(self)
    }

    /// Set the number of rounds.
    ///
    /// # Panics
    ///
    /// Panics if `rounds` is zero.
    #[must_use]
    pub fn with_max_rounds(self, rounds: u32) -> Self {
        match self.try_with_max_rounds(rounds) {
            Ok(config) => config,
            Err(err) => panic!("{err}"),
        }
    }
}
