//! Injectable random source used by every generator and the tick engine.
//!
//! Production code uses [`RngDice::from_entropy`]; tests wrap a seeded
//! `ChaCha8Rng` via [`RngDice::seeded`] or use [`LcgDice`], which reproduces
//! the fixed linear-congruential stream of the batch harness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform integer draws plus the biased helpers built on top.
pub trait Dice {
    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn below(&mut self, n: u64) -> u64;

    /// Minimum of two uniform draws in `[0, n)`, skewed toward 0.
    fn below_low(&mut self, n: u64) -> u64 {
        let a = self.below(n);
        let b = self.below(n);
        a.min(b)
    }

    /// True with probability `chance / out_of`.
    fn odds(&mut self, chance: u64, out_of: u64) -> bool {
        self.below(out_of) < chance
    }

    /// -1 or +1 with equal probability.
    fn rand_sign(&mut self) -> i64 {
        self.below(2) as i64 * 2 - 1
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        &items[self.below(items.len() as u64) as usize]
    }

    fn pick_low<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        &items[self.below_low(items.len() as u64) as usize]
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn below(&mut self, n: u64) -> u64 {
        (**self).below(n)
    }
}

/// [`Dice`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDice<R = StdRng> {
    rng: R,
}

impl RngDice<StdRng> {
    /// Unseeded dice for normal play sessions.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl RngDice<ChaCha8Rng> {
    /// Reproducible dice for tests and seeded harness runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "below() called with an empty range");
        self.rng.gen_range(0..n)
    }
}

pub const LCG_MULTIPLIER: u64 = 1_664_525;
pub const LCG_INCREMENT: u64 = 1_013_904_223;
pub const LCG_INITIAL_STATE: u64 = 2141;

/// Deterministic linear-congruential dice (modulus 2^32).
///
/// Each draw advances `state = (A * state + C) mod 2^32` and returns
/// `state % n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcgDice {
    state: u64,
}

impl Default for LcgDice {
    fn default() -> Self {
        Self::new()
    }
}

impl LcgDice {
    pub fn new() -> Self {
        Self::with_state(LCG_INITIAL_STATE)
    }

    pub fn with_state(state: u64) -> Self {
        Self {
            state: state & 0xFFFF_FFFF,
        }
    }

    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Dice for LcgDice {
    fn below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "below() called with an empty range");
        self.state = (LCG_MULTIPLIER * self.state + LCG_INCREMENT) % 0x1_0000_0000;
        self.state % n
    }
}
