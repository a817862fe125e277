//! Gaussian distribution over a bounded integer range.

use std::f64::consts::PI;

use rand::distributions::Distribution;
use rand::Rng;

use super::{map_to_range, range_width};
use crate::error::SamplerError;

/// Minimum meaningful shape parameter.
///
/// Below 2.0 the accepted band `(-parameter, parameter)` chops off so
/// much of the bell that the rejection loop degenerates, so smaller
/// values are rejected outright.
pub const MIN_GAUSSIAN_PARAM: f64 = 2.0;

/// Gaussian distributed integers in `[min, max]`.
///
/// Each sample runs the basic Box-Muller transform and keeps the
/// deviate only if it falls in `[-parameter, parameter)`; the accepted
/// deviate is normalised into `[0, 1)` and mapped onto the range, so
/// the mass centres on the midpoint and `parameter` controls the
/// spread.
///
/// The loop redraws *both* uniforms on rejection. Reusing the failed
/// angle draw with the cosine branch would bias the accepted
/// distribution. Looping probability is at most about 8.6% at
/// `parameter = 2.0` and about 0.43% at `5.0`, so the expected
/// iteration count stays close to 1.
#[derive(Debug, Clone)]
pub struct Gaussian {
    min: i64,
    width: i64,
    parameter: f64,
}

impl Gaussian {
    /// Creates a Gaussian sampler over `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`SamplerError::InvalidRange`] if `min > max`;
    /// [`SamplerError::InvalidParameter`] unless
    /// `parameter >= 2.0` (NaN is rejected as well).
    pub fn new(min: i64, max: i64, parameter: f64) -> Result<Self, SamplerError> {
        let width = range_width(min, max)?;
        if !(parameter >= MIN_GAUSSIAN_PARAM) {
            return Err(SamplerError::InvalidParameter {
                distribution: "gaussian",
                value: parameter,
                expected: "at least 2.0",
            });
        }
        Ok(Self {
            min,
            width,
            parameter,
        })
    }

    /// Draws one value in `[min, max]`.
    ///
    /// The rejection loop has no iteration cap; it terminates with
    /// probability 1. For a diagnostic bound see
    /// [`sample_with_budget`](Gaussian::sample_with_budget).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        loop {
            if let Some(stdev) = self.box_muller_attempt(rng) {
                return self.map_deviate(stdev);
            }
        }
    }

    /// Draws one value, failing once `max_attempts` attempts have all
    /// been rejected.
    ///
    /// Diagnostic variant of [`sample`](Gaussian::sample) for tests
    /// that want a hard bound instead of a probabilistic one; the cap
    /// is not expected to fire under valid parameters.
    ///
    /// # Errors
    ///
    /// [`SamplerError::RejectionLimitExceeded`] when no attempt was
    /// accepted within the budget.
    pub fn sample_with_budget<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_attempts: u32,
    ) -> Result<i64, SamplerError> {
        for _ in 0..max_attempts {
            if let Some(stdev) = self.box_muller_attempt(rng) {
                return Ok(self.map_deviate(stdev));
            }
        }
        Err(SamplerError::RejectionLimitExceeded {
            limit: max_attempts,
        })
    }

    /// One Box-Muller attempt: the deviate if accepted, `None` on
    /// rejection. Both uniforms are consumed either way.
    fn box_muller_attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<f64> {
        // Box-Muller expects draws in (0, 1]; negate the [0, 1) draws.
        let r1 = 1.0 - rng.gen::<f64>();
        let r2 = 1.0 - rng.gen::<f64>();

        let radius = (-2.0 * r1.ln()).sqrt();
        let stdev = radius * (2.0 * PI * r2).sin();

        (stdev >= -self.parameter && stdev < self.parameter).then_some(stdev)
    }

    /// Normalises an accepted deviate into `[0, 1)` and range-maps it.
    fn map_deviate(&self, stdev: f64) -> i64 {
        let unit = (stdev + self.parameter) / (self.parameter * 2.0);
        map_to_range(self.min, self.width, unit)
    }
}

impl Distribution<i64> for Gaussian {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        Gaussian::sample(self, rng)
    }
}
