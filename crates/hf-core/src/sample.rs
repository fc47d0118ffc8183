//! Validated, sorted copies of caller data
//!
//! Every estimate starts by building a [`Sample`]: the caller's slice is
//! widened to `f64`, checked for non-finite values and sorted into a private
//! buffer. The caller's data is never reordered.

use crate::{Error, Numeric, Result};

/// Ascending order statistics of a finite, non-empty sample
///
/// # Examples
///
/// ```rust
/// use hf_core::Sample;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// let sample = Sample::new(&data).unwrap();
/// assert_eq!(sample.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(sample.order_statistic(2), 2.0);
/// assert_eq!(data[0], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    sorted: Vec<f64>,
}

impl Sample {
    /// Copy and sort `data`
    ///
    /// Fails with `EmptySample` when `data` is empty and with
    /// `NonFiniteSample` when any element is NaN or infinite.
    pub fn new<T: Numeric>(data: &[T]) -> Result<Self> {
        let mut sorted = widen(data)?;
        sorted.sort_by(f64::total_cmp);
        Ok(Self { sorted })
    }

    /// Copy data the caller already sorted, verifying the order
    pub fn from_sorted<T: Numeric>(sorted_data: &[T]) -> Result<Self> {
        let sorted = widen(sorted_data)?;
        if let Some(index) = sorted.windows(2).position(|w| w[1] < w[0]) {
            log::debug!("rejecting pre-sorted sample: descent at index {}", index + 1);
            return Err(Error::UnsortedSample { index: index + 1 });
        }
        Ok(Self { sorted })
    }

    /// Number of observations `n`
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The `k`-th smallest value, 1-indexed
    ///
    /// `k` is clamped to `[1, n]`, which is how rank formulas that fall off
    /// either end of the sample resolve to the extreme observations.
    pub fn order_statistic(&self, k: usize) -> f64 {
        let k = k.clamp(1, self.sorted.len());
        self.sorted[k - 1]
    }

    /// Smallest observation
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    /// Largest observation
    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Sorted values
    pub fn as_slice(&self) -> &[f64] {
        &self.sorted
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.sorted
    }
}

fn widen<T: Numeric>(data: &[T]) -> Result<Vec<f64>> {
    Error::check_non_empty(data)?;
    data.iter()
        .enumerate()
        .map(|(index, value)| {
            if value.is_finite() {
                Ok(value.to_f64())
            } else {
                log::debug!("rejecting sample: non-finite element at index {index}");
                Err(Error::NonFiniteSample { index })
            }
        })
        .collect()
}
