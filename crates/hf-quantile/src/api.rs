//! Percentile function interface
//!
//! Probabilities are percentages in `[0, 100]`; the result has the shape of
//! the request (scalar in, scalar out; sequence in, sequence out).

use crate::{HyndmanFan, Method, QuantileEstimator, UnifiedHyndmanFan};
use hf_core::{Numeric, Probabilities, ProbabilityScale, Result, Sample};

/// Type number used when the caller has no preference (matches R and NumPy)
pub const DEFAULT_METHOD: u8 = 7;

/// Percentiles of `sample` with Hyndman & Fan type `method` (1-9)
///
/// The sample may be unsorted and is left untouched. Errors are reported
/// before any computation: `InvalidMethod`, then `EmptySample` /
/// `NonFiniteSample`, then `InvalidProbability`.
///
/// # Example
///
/// ```rust
/// use hf_quantile::{percentile, DEFAULT_METHOD};
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// assert_eq!(percentile(&data, 25.0, DEFAULT_METHOD).unwrap(), 3.25);
/// assert_eq!(percentile(&data, 25.0, 6).unwrap(), 2.75);
/// assert_eq!(percentile(&data, [25.0, 75.0], 1).unwrap(), [3.0, 8.0]);
/// ```
pub fn percentile<T: Numeric, P: Probabilities>(
    sample: &[T],
    probabilities: P,
    method: u8,
) -> Result<P::Output> {
    let method = Method::from_type(method)?;
    estimate_with(
        &HyndmanFan::new(method),
        sample,
        probabilities,
        ProbabilityScale::Percent,
    )
}

/// Same contract as [`percentile`], computed with the unified rank formula
pub fn percentile_unified<T: Numeric, P: Probabilities>(
    sample: &[T],
    probabilities: P,
    method: u8,
) -> Result<P::Output> {
    let method = Method::from_type(method)?;
    estimate_with(
        &UnifiedHyndmanFan::new(method),
        sample,
        probabilities,
        ProbabilityScale::Percent,
    )
}

/// Run any estimator over a request on the given scale
pub fn estimate_with<E, T, P>(
    estimator: &E,
    data: &[T],
    probabilities: P,
    scale: ProbabilityScale,
) -> Result<P::Output>
where
    E: QuantileEstimator + ?Sized,
    T: Numeric,
    P: Probabilities,
{
    let sample = Sample::new(data)?;
    scale.validate(probabilities.values())?;
    Ok(probabilities.map_each(|p| estimator.estimate_fraction(&sample, scale.normalize(p))))
}
