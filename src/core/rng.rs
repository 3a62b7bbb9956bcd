//! Deterministic random number generation for dealing and redealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deal and the same redeals
//! - **Context streams**: Independent sequences for different purposes
//! - **Injectable**: The engine never reaches for global randomness
//!
//! ## Usage
//!
//! ```
//! use interference::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Dealing and redealing draw from separate streams
//! let mut deal = rng.for_context("deal");
//! let mut redeal = rng.for_context("redeal");
//!
//! let mut a: Vec<u8> = (0..20).collect();
//! let mut b = a.clone();
//! deal.shuffle(&mut a);
//! redeal.shuffle(&mut b);
//! assert_ne!(a, b);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Seedable RNG used for every shuffle in a game.
///
/// Uses ChaCha8 for speed while keeping shuffles uniform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh OS-provided seed.
    ///
    /// The seed is still recorded, so a game started this way can be
    /// replayed with [`GameRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on any toolchain: the derivation uses `FxHasher`, whose algorithm is
    /// fixed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
