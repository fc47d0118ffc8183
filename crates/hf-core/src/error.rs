//! Error types for sample quantile estimation
//!
//! Provides a unified error type for all hyndman-fan crates.

use thiserror::Error;

/// Errors that can occur while preparing or estimating sample quantiles
///
/// Every check runs before any computation, so a failed batch never
/// produces partial results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Method identifier outside the nine Hyndman & Fan types
    #[error("Invalid method {method}: must be an integer between 1 and 9")]
    InvalidMethod { method: String },

    /// Requested probability outside the accepted scale
    #[error("Probability {p} is outside the accepted range")]
    InvalidProbability { p: f64 },

    /// Empty sample provided
    #[error("Cannot compute quantile of empty sample")]
    EmptySample,

    /// Sample element is NaN or infinite
    #[error("Sample element at index {index} is NaN or infinite")]
    NonFiniteSample { index: usize },

    /// Data passed as pre-sorted is out of order
    #[error("Sample is not sorted: element at index {index} is smaller than its predecessor")]
    UnsortedSample { index: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns
impl Error {
    /// Check that a method identifier names one of the nine types
    pub fn check_method(method: u8) -> Result<()> {
        if !(1..=9).contains(&method) {
            return Err(Error::InvalidMethod {
                method: method.to_string(),
            });
        }
        Ok(())
    }

    /// Check that a probability lies within `[0, upper]`
    ///
    /// NaN is rejected as well since it fails the range test.
    pub fn check_probability(p: f64, upper: f64) -> Result<()> {
        if !(0.0..=upper).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }

    /// Check if data is non-empty
    pub fn check_non_empty<T>(data: &[T]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptySample);
        }
        Ok(())
    }
}
