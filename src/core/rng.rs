//! Seedable randomness behind a single injected source.
//!
//! Every random decision in a match (deck shuffles, mulligan reshuffles,
//! coin flips, random discard and retrieve picks) goes through one
//! `RandomSource` owned by the match. Swapping the source swaps all of them.
//!
//! - `GameRng`: ChaCha8-backed, deterministic per seed.
//! - `SequenceRng`: replays a fixed list of floats, for scripted tests.
//!
//! ```
//! use tcg_lite::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_index(60), b.gen_index(60));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Face of a flipped coin, also used for a player's call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl std::fmt::Display for CoinSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoinSide::Heads => write!(f, "heads"),
            CoinSide::Tails => write!(f, "tails"),
        }
    }
}

/// Source of randomness injected into a match.
///
/// Implementors only need `next_f64`; the remaining operations are derived
/// from it so a stub source controls every outcome.
pub trait RandomSource {
    /// Next float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn gen_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "gen_index on empty range");
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }

    /// Flip a fair coin. Values below one half are heads.
    fn flip_coin(&mut self) -> CoinSide {
        if self.next_f64() < 0.5 {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        }
    }

    /// Fisher-Yates shuffle in place.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.gen_index(i + 1);
            items.swap(i, j);
        }
    }
}

/// Deterministic match RNG.
///
/// Uses ChaCha8 for speed while keeping the sequence reproducible from the
/// seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for GameRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Replays a fixed cycle of floats.
///
/// Pins coin flips and random picks in tests: `SequenceRng::constant(0.9)`
/// always flips tails.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    /// Create a source cycling over `values`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "SequenceRng values must lie in [0, 1)"
        );
        Self { values, cursor: 0 }
    }

    /// A source that always yields the same value.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
