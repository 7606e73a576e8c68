//! Deterministic sequence generator.
//!
//! A small linear congruential generator whose recurrence is fixed so that
//! layouts are reproducible across runs and across implementations:
//!
//! ```text
//! state = (state * 9301 + 49297) mod 233280
//! value = state / 233280
//! ```
//!
//! Each layout computation owns one [`SeededSequence`]. Cloning it duplicates
//! both the seed and the current state, so the clone and its source continue
//! with the exact same draws.

use rand::{Error as RandError, RngCore, SeedableRng};

/// Multiplier of the recurrence.
pub const MULTIPLIER: u64 = 9301;

/// Increment of the recurrence.
pub const INCREMENT: u64 = 49297;

/// Modulus of the recurrence.
pub const MODULUS: u64 = 233_280;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 12345;

/// Smallest stone dimension the jitter can produce.
///
/// Widths at or below this size are also discarded by the row packer.
pub const MIN_STONE_SIZE: f64 = 20.0;

/// Seeded generator of uniform values in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededSequence {
    seed: u64,
    state: u64,
    draws: u64,
}

impl SeededSequence {
    /// Creates a generator from a seed.
    pub fn new(seed: u64) -> Self {
        // (seed mod M) * A + C has the same residue as seed * A + C, and
        // keeps the product far away from u64 overflow.
        Self {
            seed,
            state: seed % MODULUS,
            draws: 0,
        }
    }

    /// Returns the seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the current raw state.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Returns how many values have been drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Advances the recurrence and returns the next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.draws += 1;
        self.state as f64 / MODULUS as f64
    }

    /// Draws one value and interpolates it between `min` and `max`.
    pub fn lerp_draw(&mut self, min: f64, max: f64) -> f64 {
        let t = self.next_unit();
        lerp(min, max, t)
    }

    /// Applies randomness jitter to `value`.
    ///
    /// Always consumes exactly one draw, even when `randomness` is zero.
    /// The result never drops below [`MIN_STONE_SIZE`].
    pub fn jitter(&mut self, value: f64, randomness: f64) -> f64 {
        let t = self.next_unit();
        let variation = value * randomness * (t * 2.0 - 1.0);
        (value + variation).max(MIN_STONE_SIZE)
    }
}

impl Default for SeededSequence {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Linear interpolation. A reversed range (`min > max`) is not an error.
#[inline]
pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * t
}

impl RngCore for SeededSequence {
    fn next_u32(&mut self) -> u32 {
        (self.next_unit() * (u32::MAX as f64 + 1.0)) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeededSequence {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
