//! Core types for sample quantile estimation
//!
//! This crate provides the pieces every Hyndman & Fan estimator shares:
//!
//! - [`Error`]: the error taxonomy surfaced to callers
//! - [`Numeric`]: element types a sample may be built from
//! - [`Sample`]: a validated, sorted private copy of the caller's data
//! - [`ProbabilityScale`] and [`Probabilities`]: how requests are expressed
//!   and what shape the results take
//!
//! # Example
//!
//! ```rust
//! use hf_core::{ProbabilityScale, Sample};
//!
//! let sample = Sample::new(&[4.0, 1.0, 3.0, 2.0]).unwrap();
//! assert_eq!(sample.min(), 1.0);
//!
//! let p = ProbabilityScale::Percent.to_fraction(25.0).unwrap();
//! assert_eq!(p, 0.25);
//! ```

pub mod error;
pub mod numeric;
pub mod probability;
pub mod sample;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::Numeric;
pub use probability::{Probabilities, ProbabilityScale};
pub use sample::Sample;
