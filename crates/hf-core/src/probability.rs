//! Probability requests
//!
//! A request is one or more probabilities on an explicit scale. The scale is
//! never guessed from the values: `1.0` means 1% on the percent scale and
//! 100% on the fraction scale.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Scale on which requested probabilities are expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityScale {
    /// Percentages in `[0, 100]`
    #[default]
    Percent,
    /// Fractions in `[0, 1]`
    Fraction,
}

impl ProbabilityScale {
    /// Largest accepted value on this scale
    pub fn upper(self) -> f64 {
        match self {
            ProbabilityScale::Percent => 100.0,
            ProbabilityScale::Fraction => 1.0,
        }
    }

    /// Validate `p` and convert it to a fraction in `[0, 1]`
    pub fn to_fraction(self, p: f64) -> Result<f64> {
        Error::check_probability(p, self.upper())?;
        Ok(self.normalize(p))
    }

    /// Convert an already validated `p` to a fraction
    pub fn normalize(self, p: f64) -> f64 {
        match self {
            ProbabilityScale::Percent => p / 100.0,
            ProbabilityScale::Fraction => p,
        }
    }

    /// Validate a whole request, failing on the first bad value
    pub fn validate(self, ps: &[f64]) -> Result<()> {
        ps.iter().try_for_each(|&p| Error::check_probability(p, self.upper()))
    }
}

/// Shape of a probability request
///
/// A scalar request yields a scalar result and a sequence request yields a
/// sequence of the same shape, in request order.
pub trait Probabilities {
    /// Result shape
    type Output;

    /// The requested values in order
    fn values(&self) -> &[f64];

    /// Build the output by applying `f` to each requested value in order
    fn map_each<F: FnMut(f64) -> f64>(&self, f: F) -> Self::Output;
}

impl Probabilities for f64 {
    type Output = f64;

    fn values(&self) -> &[f64] {
        std::slice::from_ref(self)
    }

    fn map_each<F: FnMut(f64) -> f64>(&self, mut f: F) -> f64 {
        f(*self)
    }
}

impl Probabilities for &[f64] {
    type Output = Vec<f64>;

    fn values(&self) -> &[f64] {
        self
    }

    fn map_each<F: FnMut(f64) -> f64>(&self, f: F) -> Vec<f64> {
        self.iter().copied().map(f).collect()
    }
}

impl Probabilities for Vec<f64> {
    type Output = Vec<f64>;

    fn values(&self) -> &[f64] {
        self
    }

    fn map_each<F: FnMut(f64) -> f64>(&self, f: F) -> Vec<f64> {
        self.iter().copied().map(f).collect()
    }
}

impl Probabilities for &Vec<f64> {
    type Output = Vec<f64>;

    fn values(&self) -> &[f64] {
        self
    }

    fn map_each<F: FnMut(f64) -> f64>(&self, f: F) -> Vec<f64> {
        self.iter().copied().map(f).collect()
    }
}

impl<const N: usize> Probabilities for [f64; N] {
    type Output = [f64; N];

    fn values(&self) -> &[f64] {
        self
    }

    fn map_each<F: FnMut(f64) -> f64>(&self, f: F) -> [f64; N] {
        (*self).map(f)
    }
}
