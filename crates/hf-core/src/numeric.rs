//! Numeric element types accepted in a sample
//!
//! Quantile estimates are always computed in `f64`. The `Numeric` trait lets
//! callers hand over samples of narrower floats or integers without copying
//! them into a `Vec<f64>` first.

use std::fmt::Debug;

/// Base trait for values that can appear in a sample
pub trait Numeric: Copy + PartialOrd + Debug + Send + Sync {
    /// Convert to f64 for rank interpolation
    fn to_f64(&self) -> f64;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;
}

// =============================================================================
// Numeric implementations for concrete types
// =============================================================================

impl Numeric for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Numeric for f32 {
    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

macro_rules! impl_numeric_for_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_f64(&self) -> f64 {
                    // i64/u64 beyond 2^53 round to the nearest f64
                    *self as f64
                }

                fn is_finite(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_numeric_for_int!(i32, i64, u32, u64);
