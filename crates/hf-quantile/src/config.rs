//! Configuration types for percentile computation

use crate::{estimate_with, HyndmanFan, Method, QuantileEstimator, UnifiedHyndmanFan};
use hf_core::{Numeric, Probabilities, ProbabilityScale, Result};
use serde::{Deserialize, Serialize};

/// Which implementation of the Hyndman & Fan definitions to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Per-method closed-form ranks ([`HyndmanFan`])
    #[default]
    Dispatch,
    /// Single generalized rank formula ([`UnifiedHyndmanFan`])
    Unified,
}

/// Settings for a percentile computation
///
/// The default matches common numeric libraries: type 7, percentages,
/// dispatch estimator. Missing fields fall back to their defaults when the
/// configuration is deserialized, so it can be embedded in a caller's
/// configuration file:
///
/// ```rust
/// use hf_quantile::{Method, PercentileConfig, ProbabilityScale};
///
/// let config: PercentileConfig =
///     serde_json::from_str(r#"{ "method": "weibull", "scale": "fraction" }"#).unwrap();
/// assert_eq!(config.method, Method::Weibull);
/// assert_eq!(config.scale, ProbabilityScale::Fraction);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentileConfig {
    pub method: Method,
    pub scale: ProbabilityScale,
    pub strategy: Strategy,
}

impl PercentileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_scale(mut self, scale: ProbabilityScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Build the configured estimator
    pub fn estimator(&self) -> Box<dyn QuantileEstimator> {
        match self.strategy {
            Strategy::Dispatch => Box::new(HyndmanFan::new(self.method)),
            Strategy::Unified => Box::new(UnifiedHyndmanFan::new(self.method)),
        }
    }

    /// Compute the requested percentiles of `data`
    pub fn compute<T: Numeric, P: Probabilities>(
        &self,
        data: &[T],
        probabilities: P,
    ) -> Result<P::Output> {
        estimate_with(self.estimator().as_ref(), data, probabilities, self.scale)
    }
}
