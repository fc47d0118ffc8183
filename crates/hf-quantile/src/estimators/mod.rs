//! Concrete quantile estimator implementations

// Closed-form rank formula per method
mod dispatch;
// Single generalized rank formula for every method
mod unified;

pub use dispatch::{hyndman_fan, HyndmanFan};
pub use unified::{unified_hyndman_fan, UnifiedHyndmanFan};
