//! Core traits for quantile estimation

use crate::Method;
use hf_core::{Error, Numeric, Result, Sample};
use tracing::debug;

/// Main trait for Hyndman & Fan quantile estimation
///
/// Probabilities are fractions in `[0, 1]` throughout this trait; the
/// percentage interface lives in [`crate::percentile`].
///
/// # API Convention
///
/// - Methods without suffix take raw caller data and build a private sorted
///   copy; the caller's slice is never reordered
/// - Methods with `_sorted` suffix take an already validated [`Sample`]
///
/// Every check (sample, then probabilities) runs before any estimate is
/// computed, so a batch either succeeds completely or fails.
pub trait QuantileEstimator: Send + Sync {
    /// Method this estimator implements
    fn method(&self) -> Method;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Estimate the quantile at fraction `p` of a validated sample
    ///
    /// `p` must already lie in `[0, 1]`; callers go through
    /// [`quantile_sorted`](Self::quantile_sorted) to get that check.
    fn estimate_fraction(&self, sample: &Sample, p: f64) -> f64;

    /// Estimate a single quantile from a validated sample
    ///
    /// # Arguments
    /// * `sample` - Sorted order statistics
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted(&self, sample: &Sample, p: f64) -> Result<f64> {
        Error::check_probability(p, 1.0)?;
        Ok(self.estimate_fraction(sample, p))
    }

    /// Estimate multiple quantiles from a validated sample, in request order
    fn quantiles_sorted(&self, sample: &Sample, ps: &[f64]) -> Result<Vec<f64>> {
        for &p in ps {
            Error::check_probability(p, 1.0)?;
        }
        debug!(
            method = %self.method(),
            n = sample.len(),
            requests = ps.len(),
            "estimating quantiles"
        );
        Ok(ps
            .iter()
            .map(|&p| self.estimate_fraction(sample, p))
            .collect())
    }

    /// Estimate a single quantile of unsorted data
    ///
    /// # Arguments
    /// * `data` - The data sample (left untouched)
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile<T: Numeric>(&self, data: &[T], p: f64) -> Result<f64>
    where
        Self: Sized,
    {
        let sample = Sample::new(data)?;
        self.quantile_sorted(&sample, p)
    }

    /// Estimate multiple quantiles of unsorted data
    fn quantiles<T: Numeric>(&self, data: &[T], ps: &[f64]) -> Result<Vec<f64>>
    where
        Self: Sized,
    {
        let sample = Sample::new(data)?;
        self.quantiles_sorted(&sample, ps)
    }

    /// Median (p = 0.5)
    fn median<T: Numeric>(&self, data: &[T]) -> Result<f64>
    where
        Self: Sized,
    {
        self.quantile(data, 0.5)
    }
}
