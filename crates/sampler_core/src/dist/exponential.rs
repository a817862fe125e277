//! Exponential distribution over a bounded integer range.

use rand::distributions::Distribution;
use rand::Rng;

use super::{map_to_range, range_width};
use crate::error::SamplerError;

/// Exponentially distributed integers in `[min, max]`.
///
/// A single uniform draw is pushed through the inverse CDF, truncated
/// so every value of the range stays reachable: with `cut =
/// exp(-parameter)`, the transform `-ln(cut + (1 - cut) * u) /
/// parameter` lands in `[0, 1)` and leaves `max` a residual
/// probability of `exp(-parameter)`. Larger parameters concentrate
/// mass near `min`. No rejection loop; every sample costs exactly one
/// draw.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use sampler_core::dist::Exponential;
/// use sampler_core::rng::Rand48;
///
/// let mut rng = Rand48::seed_from_u64(42);
/// let dist = Exponential::new(1, 10, 2.5).unwrap();
/// assert!((1..=10).contains(&dist.sample(&mut rng)));
/// ```
#[derive(Debug, Clone)]
pub struct Exponential {
    min: i64,
    width: i64,
    parameter: f64,
    /// Residual probability of the cut-off `max` value: `exp(-parameter)`.
    cut: f64,
}

impl Exponential {
    /// Creates an exponential sampler over `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`SamplerError::InvalidRange`] if `min > max`;
    /// [`SamplerError::InvalidParameter`] unless `parameter > 0`
    /// (NaN is rejected as well).
    pub fn new(min: i64, max: i64, parameter: f64) -> Result<Self, SamplerError> {
        let width = range_width(min, max)?;
        if !(parameter > 0.0) {
            return Err(SamplerError::InvalidParameter {
                distribution: "exponential",
                value: parameter,
                expected: "greater than 0",
            });
        }
        Ok(Self {
            min,
            width,
            parameter,
            cut: (-parameter).exp(),
        })
    }

    /// Draws one value in `[min, max]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        // Draw in [0, 1), negated into (0, 1] so the logarithm argument
        // stays in (cut, 1] and the transform in [0, 1).
        let uniform = 1.0 - rng.gen::<f64>();
        let unit = -(self.cut + (1.0 - self.cut) * uniform).ln() / self.parameter;
        map_to_range(self.min, self.width, unit)
    }
}

impl Distribution<i64> for Exponential {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        Exponential::sample(self, rng)
    }
}
