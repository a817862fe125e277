//! 48-bit linear congruential generator with caller-owned state.

use rand::rngs::OsRng;
use rand::{Error, RngCore, SeedableRng};

use crate::error::SamplerError;

/// `erand48` recurrence constants: `s' = (a * s + c) mod 2^48`.
const MULTIPLIER: u64 = 0x5DEE_CE66D;
const INCREMENT: u64 = 0xB;
const STATE_MASK: u64 = 0xFFFF_FFFF_FFFF;
const TWO_POW_48: f64 = 281_474_976_710_656.0;

/// A 48-bit linear congruential generator (`rand48` family).
///
/// The state is three 16-bit words, mutated in place on every draw.
/// [`Rand48::next_f64`] yields the full 48 bits of state scaled into
/// `[0, 1)`, which is the uniform draw the distribution samplers build
/// on. The generator also implements [`RngCore`], so it plugs into any
/// API that is generic over [`rand::Rng`].
///
/// Create instances with [`Rand48::from_os_entropy`] (or the module
/// level [`seed_state`](crate::rng::seed_state)) for unpredictable
/// seeding, or with [`SeedableRng::seed_from_u64`] for deterministic
/// sequences in tests and reproducible demos.
#[derive(Debug, Clone)]
pub struct Rand48 {
    xseed: [u16; 3],
}

impl Rand48 {
    /// Creates a state seeded from the operating system's entropy source.
    ///
    /// The low 48 bits of an 8-byte OS draw become the three state
    /// words, matching the [`seed_from_u64`](SeedableRng::seed_from_u64)
    /// split. An all-zero 48-bit state opens with a visibly non-random
    /// sequence, so the draw is repeated in that (2^-48) case.
    ///
    /// # Errors
    ///
    /// [`SamplerError::SeedingFailed`] if the entropy source is
    /// unavailable. There is no fixed-seed fallback.
    pub fn from_os_entropy() -> Result<Self, SamplerError> {
        loop {
            let mut bytes = [0u8; 8];
            OsRng
                .try_fill_bytes(&mut bytes)
                .map_err(|e| SamplerError::SeedingFailed(e.to_string()))?;
            let entropy = u64::from_le_bytes(bytes);
            if entropy & STATE_MASK != 0 {
                return Ok(Self::seed_from_u64(entropy));
            }
        }
    }

    /// Returns a uniform draw in `[0, 1)`, advancing the state.
    ///
    /// This is the `erand48` contract: the full 48 bits of the advanced
    /// state divided by `2^48`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.step() as f64 / TWO_POW_48
    }

    /// Advances the recurrence once and returns the new 48-bit state.
    #[inline]
    fn step(&mut self) -> u64 {
        let state = (self.xseed[2] as u64) << 32 | (self.xseed[1] as u64) << 16 | self.xseed[0] as u64;
        let next = state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & STATE_MASK;
        self.xseed = split_words(next);
        next
    }
}

/// Splits the low 48 bits of `value` into the three state words.
#[inline]
fn split_words(value: u64) -> [u16; 3] {
    [
        (value & 0xFFFF) as u16,
        ((value >> 16) & 0xFFFF) as u16,
        ((value >> 32) & 0xFFFF) as u16,
    ]
}

impl SeedableRng for Rand48 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seed_from_u64(u64::from_le_bytes(seed))
    }

    /// Seeds by splitting the low-order bits of `state` into the three
    /// 16-bit state words; bits 48..64 are ignored.
    fn seed_from_u64(state: u64) -> Self {
        Self {
            xseed: split_words(state & STATE_MASK),
        }
    }
}

impl RngCore for Rand48 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // Top 32 of the 48 state bits; the low bits of an LCG are the weakest.
        (self.step() >> 16) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = self.step() >> 16;
        let lo = self.step() >> 16;
        hi << 32 | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
