//! # sampler_core: Bounded Non-uniform Integer Sampling
//!
//! This crate maps uniform pseudo-random draws onto integers in a closed
//! range `[min, max]` according to one of three distributions:
//!
//! - Exponential: inverse-CDF transform, mass concentrated towards `min`
//! - Gaussian: Box-Muller with rejection, mass around the range midpoint
//! - Zipfian: Devroye rejection sampling over ranks `1..=n`
//!
//! ## Caller-owned state
//!
//! All samplers are pure functions over an explicit `&mut` random state.
//! There is no process-wide seed: callers obtain a freshly entropy-seeded
//! [`rng::Rand48`] via [`rng::seed_state`] (or seed deterministically for
//! tests) and pass it into every draw. Concurrent callers create one state
//! each; exclusive access is enforced by the `&mut` borrow.
//!
//! ## Usage Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use sampler_core::dist::Exponential;
//! use sampler_core::rng::Rand48;
//!
//! let mut rng = Rand48::seed_from_u64(42);
//! let dist = Exponential::new(1, 10, 2.5).unwrap();
//! let value = dist.sample(&mut rng);
//! assert!((1..=10).contains(&value));
//! ```
//!
//! ## Validation contract
//!
//! Constructors validate both the range (`min <= max`) and the shape
//! parameter, so `sample` is infallible once a distribution value exists.
//! Single-shot callers can use the module-level [`dist::exponential`],
//! [`dist::gaussian`] and [`dist::zipfian`] functions, which validate and
//! draw in one call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod dist;
pub mod error;
pub mod rng;

pub use dist::{Exponential, Gaussian, Zipfian};
pub use error::SamplerError;
pub use rng::{seed_state, Rand48};
