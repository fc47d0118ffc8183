//! Sample quantiles with all nine Hyndman & Fan (1996) definitions
//!
//! This crate re-exports the workspace crates:
//!
//! - [`hf_core`]: validated samples, probability scales and errors
//! - [`hf_quantile`]: the method table, both estimators and the percentile
//!   function interface
//!
//! ```rust
//! use hyndman_fan::prelude::*;
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! assert_eq!(percentile(&data, 25.0, 7).unwrap(), 3.25);
//! ```

pub use hf_core;
pub use hf_quantile;

pub use hf_core::{Error, Result, Sample};
pub use hf_quantile::{percentile, percentile_unified, Method, PercentileConfig};

pub mod prelude {
    pub use hf_quantile::prelude::*;
    pub use hf_quantile::{percentile_unified, Sample};
}
