//! Zipfian distribution over a bounded integer range.

use rand::distributions::Distribution;
use rand::Rng;

use super::range_width;
use crate::error::SamplerError;

/// Lowest accepted Zipf exponent.
///
/// At `s <= 1.0` the closed-form rejection bound `2^(s-1) - 1`
/// vanishes and the algorithm degenerates, so the domain is cut
/// strictly above 1.
pub const MIN_ZIPFIAN_PARAM: f64 = 1.001;

/// Highest accepted Zipf exponent; beyond this the powers involved
/// lose numerical precision.
pub const MAX_ZIPFIAN_PARAM: f64 = 1000.0;

/// Zipfian distributed integers in `[min, max]`.
///
/// Rank `k` in `1..=n` (with `n = max - min + 1`) is drawn with
/// probability proportional to `k^-s`, then translated so rank 1 maps
/// to `min`. Ranks are produced by the rejection method of Devroye,
/// "Non-Uniform Random Variate Generation", p. 550-551, Springer 1986:
/// candidates `x = floor(u^(-1/(s-1)))` are accepted when
/// `v * x * (t - 1) / (b - 1) <= t / b`, with `b = 2^(s-1)` and
/// `t = (1 + 1/x)^(s-1)`. Candidates past `n` are rejected, never
/// clamped, so the accepted rank is exact.
///
/// Out-of-domain exponents fail construction; the sampler never
/// silently clamps them. Acceptance degrades as `s` approaches 1 from
/// above, which is why the domain floor sits at
/// [`MIN_ZIPFIAN_PARAM`].
#[derive(Debug, Clone)]
pub struct Zipfian {
    min: i64,
    n: i64,
    s: f64,
    /// Devroye's rejection bound `2^(s-1)`.
    b: f64,
}

impl Zipfian {
    /// Creates a Zipfian sampler over `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`SamplerError::InvalidRange`] if `min > max`;
    /// [`SamplerError::InvalidParameter`] unless
    /// `1.001 <= s <= 1000.0` (NaN is rejected as well).
    pub fn new(min: i64, max: i64, s: f64) -> Result<Self, SamplerError> {
        let n = range_width(min, max)?;
        if !(MIN_ZIPFIAN_PARAM..=MAX_ZIPFIAN_PARAM).contains(&s) {
            return Err(SamplerError::InvalidParameter {
                distribution: "zipfian",
                value: s,
                expected: "in [1.001, 1000.0]",
            });
        }
        Ok(Self {
            min,
            n,
            s,
            b: 2.0_f64.powf(s - 1.0),
        })
    }

    /// Draws one value in `[min, max]`.
    ///
    /// A single-value range returns `min` without consuming a draw.
    /// The rejection loop has no iteration cap; for a diagnostic bound
    /// see [`sample_with_budget`](Zipfian::sample_with_budget).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        if self.n <= 1 {
            return self.min;
        }
        loop {
            if let Some(rank) = self.rank_attempt(rng) {
                return self.translate(rank);
            }
        }
    }

    /// Draws one value, failing once `max_attempts` attempts have all
    /// been rejected.
    ///
    /// Diagnostic variant of [`sample`](Zipfian::sample); the cap is
    /// not expected to fire under valid parameters, though budgets
    /// must be generous for exponents near the domain floor, where
    /// most candidates overshoot `n`.
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
        if self.n <= 1 {
            return Ok(self.min);
        }
        for _ in 0..max_attempts {
            if let Some(rank) = self.rank_attempt(rng) {
                return Ok(self.translate(rank));
            }
        }
        Err(SamplerError::RejectionLimitExceeded {
            limit: max_attempts,
        })
    }

    /// Translates a rank in `1..=n` so rank 1 maps to `min`.
    ///
    /// Adds `rank - 1` (never negative) rather than computing
    /// `min - 1 + rank`, which would overflow at `min == i64::MIN`.
    #[inline]
    fn translate(&self, rank: i64) -> i64 {
        self.min + (rank - 1)
    }

    /// One rejection attempt: the accepted rank in `1..=n`, or `None`.
    /// Both uniforms are consumed either way.
    fn rank_attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<i64> {
        let u = rng.gen::<f64>();
        let v = rng.gen::<f64>();

        // A draw of u == 0 sends the candidate to infinity; the bound
        // test below evaluates to NaN and rejects it like any other
        // overshoot.
        let x = u.powf(-1.0 / (self.s - 1.0)).floor();
        let t = (1.0 + 1.0 / x).powf(self.s - 1.0);

        let accepted =
            v * x * (t - 1.0) / (self.b - 1.0) <= t / self.b && x <= self.n as f64;
        if !accepted {
            return None;
        }
        // For n past 2^53 the f64 bound test above can pass for a
        // candidate just beyond n (`n as f64` rounds upward there), so
        // re-check in integer space after the cast.
        let rank = x as i64;
        (rank >= 1 && rank <= self.n).then_some(rank)
    }
}

impl Distribution<i64> for Zipfian {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        Zipfian::sample(self, rng)
    }
}
