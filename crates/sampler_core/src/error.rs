//! Sampler error taxonomy.

use thiserror::Error;

/// Errors reported by sampler construction and seeding.
///
/// All variants are raised synchronously before any sampling work begins;
/// nothing is retried internally and no partial result is ever produced.
/// Rejection loops inside the Gaussian and Zipfian samplers are expected
/// internal retries, not errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SamplerError {
    /// The requested range is empty (`min > max`) or its width does not
    /// fit the working integer type.
    #[error("invalid range: min {min} must not exceed max {max}")]
    InvalidRange {
        /// Lower bound of the requested range.
        min: i64,
        /// Upper bound of the requested range.
        max: i64,
    },

    /// The shape parameter lies outside the distribution's valid domain.
    #[error("invalid {distribution} parameter {value}: must be {expected}")]
    InvalidParameter {
        /// Name of the distribution that rejected the parameter.
        distribution: &'static str,
        /// The offending parameter value.
        value: f64,
        /// Human-readable description of the valid domain.
        expected: &'static str,
    },

    /// The OS entropy source was unavailable while seeding random state.
    #[error("could not generate random seed: {0}")]
    SeedingFailed(String),

    /// A diagnostic rejection budget was exhausted without acceptance.
    ///
    /// Only the `sample_with_budget` variants can report this; the plain
    /// `sample` paths loop until acceptance, which terminates with
    /// probability 1 under valid parameters.
    #[error("rejection sampling did not accept within {limit} iterations")]
    RejectionLimitExceeded {
        /// The iteration budget that was exhausted.
        limit: u32,
    },
}
