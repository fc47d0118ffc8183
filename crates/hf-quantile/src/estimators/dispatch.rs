//! Dispatch-based Hyndman & Fan estimator
//!
//! Each method gets its own closed-form fractional rank. The discontinuous
//! types select order statistics directly; the continuous types share one
//! clamped linear interpolation.

use crate::{split_rank, Method, QuantileEstimator};
use hf_core::Sample;
use tracing::trace;

/// Fast Hyndman & Fan quantile estimator
///
/// ```rust
/// use hf_quantile::{hyndman_fan, Method, QuantileEstimator};
///
/// let data: Vec<f64> = (1..=10).map(f64::from).collect();
/// let q1 = hyndman_fan(Method::Linear).quantile(&data, 0.25).unwrap();
/// assert!((q1 - 3.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HyndmanFan {
    method: Method,
}

impl HyndmanFan {
    pub fn new(method: Method) -> Self {
        Self { method }
    }
}

/// Convenience constructor for the dispatch estimator
pub fn hyndman_fan(method: Method) -> HyndmanFan {
    HyndmanFan::new(method)
}

impl QuantileEstimator for HyndmanFan {
    fn method(&self) -> Method {
        self.method
    }

    fn name(&self) -> &str {
        "Hyndman-Fan"
    }

    fn estimate_fraction(&self, sample: &Sample, p: f64) -> f64 {
        let n = sample.len() as f64;
        let np = n * p;

        let h = match self.method {
            Method::InvertedCdf => return inverted_cdf(sample, np),
            Method::AveragedInvertedCdf => return averaged_inverted_cdf(sample, np),
            Method::ClosestObservation => return closest_observation(sample, np - 0.5),
            Method::InterpolatedInvertedCdf => np,
            Method::Hazen => np + 0.5,
            Method::Weibull => (n + 1.0) * p,
            Method::Linear => (n - 1.0) * p + 1.0,
            Method::MedianUnbiased => (n + 1.0 / 3.0) * p + 1.0 / 3.0,
            Method::NormalUnbiased => (n + 0.25) * p + 0.375,
        };
        trace!(method = %self.method, p, h, "fractional rank");
        interpolate(sample, h)
    }
}

/// Convert a rank that may fall below the sample to a 1-based index
///
/// The upper end is clamped by `Sample::order_statistic`.
fn rank(h: f64) -> usize {
    if h <= 1.0 {
        1
    } else {
        h as usize
    }
}

/// Type 1: smallest order statistic whose rank reaches `n·p`
fn inverted_cdf(sample: &Sample, np: f64) -> f64 {
    let (j, g) = split_rank(np);
    if g == 0.0 {
        sample.order_statistic(rank(j))
    } else {
        sample.order_statistic(rank(j + 1.0))
    }
}

/// Type 2: mean of the two neighbouring order statistics when `n·p` is whole
fn averaged_inverted_cdf(sample: &Sample, np: f64) -> f64 {
    let (j, g) = split_rank(np);
    if g == 0.0 {
        sample.order_statistic(rank(j)) / 2.0 + sample.order_statistic(rank(j + 1.0)) / 2.0
    } else {
        sample.order_statistic(rank(j + 1.0))
    }
}

/// Type 3: nearest order statistic to `n·p`, even rank when halfway
fn closest_observation(sample: &Sample, h: f64) -> f64 {
    let (j, g) = split_rank(h);
    if g == 0.0 && j.rem_euclid(2.0) == 0.0 {
        sample.order_statistic(rank(j))
    } else {
        sample.order_statistic(rank(j + 1.0))
    }
}

/// Linear interpolation at fractional rank `h`, clamped to `[1, n]`
fn interpolate(sample: &Sample, h: f64) -> f64 {
    let n = sample.len();
    let h = h.clamp(1.0, n as f64);
    let lo = h.floor();
    let frac = h - lo;
    let lo = lo as usize;
    let hi = (lo + 1).min(n);

    let x_lo = sample.order_statistic(lo);
    if frac == 0.0 || lo == hi {
        return x_lo;
    }
    let x_hi = sample.order_statistic(hi);
    let gap = x_hi - x_lo;
    if gap.is_finite() {
        x_lo + frac * gap
    } else {
        // Neighbours more than f64::MAX apart
        (1.0 - frac) * x_lo + frac * x_hi
    }
}
