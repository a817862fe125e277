//! # Distribution Samplers
//!
//! Three non-uniform integer samplers over a closed range `[min, max]`:
//!
//! - [`Exponential`]: single-draw inverse-CDF transform
//! - [`Gaussian`]: Box-Muller with a bounded-output rejection loop
//! - [`Zipfian`]: Devroye rejection sampling over ranks
//!
//! Each distribution is a validated value type: `new` checks the range
//! and the shape parameter and returns [`SamplerError`] on violation,
//! after which `sample` is infallible. All samplers are generic over
//! [`rand::Rng`]; [`Rand48`](crate::rng::Rand48) is the reference
//! uniform source.
//!
//! The module-level [`exponential`], [`gaussian`] and [`zipfian`]
//! functions validate and draw in a single call, for hosts that sample
//! once per configuration.

mod exponential;
mod gaussian;
mod zipfian;

pub use exponential::Exponential;
pub use gaussian::{Gaussian, MIN_GAUSSIAN_PARAM};
pub use zipfian::{Zipfian, MAX_ZIPFIAN_PARAM, MIN_ZIPFIAN_PARAM};

use rand::Rng;

use crate::error::SamplerError;

/// Validates `min <= max` and returns the range width `max - min + 1`.
///
/// A width that overflows `i64` (only possible for near-full-domain
/// ranges) is reported as `InvalidRange` as well, which discharges the
/// overflow obligation inside the validated constructors.
pub(crate) fn range_width(min: i64, max: i64) -> Result<i64, SamplerError> {
    if min > max {
        return Err(SamplerError::InvalidRange { min, max });
    }
    max.checked_sub(min)
        .and_then(|d| d.checked_add(1))
        .ok_or(SamplerError::InvalidRange { min, max })
}

/// Maps a normalised value in `[0, 1)` onto `[min, min + width - 1]`.
///
/// Truncation after the multiply is intentional: it biases towards
/// `min` and never rounds past the top of the range.
pub(crate) fn map_to_range(min: i64, width: i64, unit: f64) -> i64 {
    // unit == 1.0 can occur when an accepted deviate normalises within
    // one ulp of the upper bound.
    debug_assert!((0.0..=1.0).contains(&unit));
    let offset = (width as f64 * unit) as i64;
    // Rounding (unit at 1.0, or `width as f64` rounded upward on very
    // wide ranges) can land the product on `width` itself; pin inside
    // the closed range.
    min + offset.min(width - 1)
}

/// Draws one exponentially distributed integer in `[min, max]`.
///
/// Requires `parameter > 0`; larger parameters concentrate mass near
/// `min`, and `max` stays reachable with residual probability
/// `exp(-parameter)`.
///
/// # Errors
///
/// [`SamplerError::InvalidRange`] if `min > max`,
/// [`SamplerError::InvalidParameter`] if the parameter is out of
/// domain. No uniform draw is consumed on error.
pub fn exponential<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    parameter: f64,
) -> Result<i64, SamplerError> {
    Ok(Exponential::new(min, max, parameter)?.sample(rng))
}

/// Draws one Gaussian distributed integer in `[min, max]`.
///
/// Requires `parameter >= 2.0`; the parameter bounds the accepted
/// deviate to `(-parameter, parameter)` before normalisation, so larger
/// values tighten the spread around the range midpoint.
///
/// # Errors
///
/// [`SamplerError::InvalidRange`] if `min > max`,
/// [`SamplerError::InvalidParameter`] if the parameter is out of
/// domain. No uniform draw is consumed on error.
pub fn gaussian<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    parameter: f64,
) -> Result<i64, SamplerError> {
    Ok(Gaussian::new(min, max, parameter)?.sample(rng))
}

/// Draws one Zipfian distributed integer in `[min, max]`.
///
/// Requires `1.001 <= s <= 1000.0`. Rank 1 maps to `min`; the
/// probability of rank `k` is proportional to `k^-s`.
///
/// # Errors
///
/// [`SamplerError::InvalidRange`] if `min > max`,
/// [`SamplerError::InvalidParameter`] if the exponent is out of
/// domain. No uniform draw is consumed on error.
pub fn zipfian<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    s: f64,
) -> Result<i64, SamplerError> {
    Ok(Zipfian::new(min, max, s)?.sample(rng))
}
