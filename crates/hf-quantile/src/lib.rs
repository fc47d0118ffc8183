//! Sample quantiles with all nine Hyndman & Fan (1996) definitions
//!
//! Common numeric libraries expose a single quantile definition (type 7).
//! This crate implements all nine, so results can be matched against any
//! statistical package that follows a specific convention.
//!
//! # Features
//!
//! - **Method table**: [`Method`] carries the plotting-position constants and
//!   the discontinuous/continuous classification of every type
//! - **Dispatch estimator**: [`HyndmanFan`] uses a closed-form rank per method
//! - **Unified estimator**: [`UnifiedHyndmanFan`] derives every method from
//!   one generalized rank formula; same results, fewer shortcuts
//! - **Percentile interface**: [`percentile`] takes percentages and mirrors
//!   the shape of the request
//! - **Configuration**: [`PercentileConfig`] selects method, probability
//!   scale and estimator, and deserializes with serde
//!
//! # Example
//!
//! ```rust
//! use hf_quantile::{hyndman_fan, percentile, Method, QuantileEstimator};
//!
//! let data = vec![7.5, -2.0, 3.25, 11.0, 0.5, 4.0, 9.75];
//!
//! // Percentages, method by type number
//! let quartiles = percentile(&data, [25.0, 50.0, 75.0], 6).unwrap();
//! assert_eq!(quartiles, [0.5, 4.0, 9.75]);
//!
//! // Fractions, through the estimator trait
//! let median = hyndman_fan(Method::MedianUnbiased).median(&data).unwrap();
//! assert_eq!(median, 4.0);
//! ```

pub mod api;
pub mod config;
pub mod estimators;
pub mod method;
pub mod traits;

// Re-export main types
pub use api::{estimate_with, percentile, percentile_unified, DEFAULT_METHOD};
pub use config::{PercentileConfig, Strategy};
pub use estimators::{hyndman_fan, unified_hyndman_fan, HyndmanFan, UnifiedHyndmanFan};
pub use method::{split_rank, Method, MethodKind, PlottingConstants, TieRule, RANK_FUZZ};
pub use traits::QuantileEstimator;

// Re-export from hf-core
pub use hf_core::{Error, Numeric, Probabilities, ProbabilityScale, Result, Sample};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        percentile, Error, HyndmanFan, Method, PercentileConfig, ProbabilityScale,
        QuantileEstimator, Result, UnifiedHyndmanFan,
    };
}
