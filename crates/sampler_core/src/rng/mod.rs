//! # Uniform Random Source
//!
//! The uniform source behind every distribution sampler in this crate:
//! a 48-bit linear congruential generator ([`Rand48`]) held as three
//! 16-bit words, advanced in place on every draw.
//!
//! ## Design Rationale
//!
//! - **Explicit state**: no global seed; each caller owns a `Rand48` and
//!   passes it `&mut` into the samplers. Sharing across threads without
//!   synchronisation is a data race the type system rules out.
//! - **Ecosystem traits**: `Rand48` implements [`rand::RngCore`] and
//!   [`rand::SeedableRng`], so the samplers stay generic over any `Rng`
//!   while `Rand48` remains the reference source.
//! - **Fallible seeding**: [`seed_state`] draws from the operating
//!   system's entropy source and surfaces failure as
//!   [`SamplerError::SeedingFailed`] rather than falling back to a
//!   fixed seed.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::seed_state;
//!
//! let mut rng = seed_state().expect("OS entropy available");
//! let u = rng.next_f64();
//! assert!((0.0..1.0).contains(&u));
//! ```

mod rand48;

pub use rand48::Rand48;

use crate::error::SamplerError;

/// Returns a freshly entropy-seeded random state.
///
/// Equivalent to [`Rand48::from_os_entropy`]; callers typically invoke
/// this once per session and reuse the state for every draw.
///
/// # Errors
///
/// [`SamplerError::SeedingFailed`] if the OS entropy source is
/// unavailable. Seeding is never silently downgraded to a fixed seed.
pub fn seed_state() -> Result<Rand48, SamplerError> {
    Rand48::from_os_entropy()
}
