//! Unified-formula Hyndman & Fan estimator
//!
//! All nine methods are derived from the single rank formula
//!
//! ```text
//! h = α + p·(n + 1 − α − β),   j = floor(h),   g = h − j
//! Q(p) = (1 − γ)·x[j] + γ·x[j + 1]
//! ```
//!
//! where `γ = g` for the continuous types and a [`TieRule`](crate::TieRule)
//! weight for types 1-3. This is slower than [`HyndmanFan`](crate::HyndmanFan)
//! for types 4-9, since it always evaluates the general formula and a
//! two-term weighted sum instead of the per-method closed forms (type 7's
//! `α = β = 1`, for instance, collapses to `1 + p·(n − 1)`). It exists to
//! show that one parametrization covers every method, and as an independent
//! reference the dispatch estimator is tested against.

use crate::{split_rank, Method, MethodKind, PlottingConstants, QuantileEstimator};
use hf_core::Sample;
use tracing::trace;

/// Educational Hyndman & Fan estimator using one formula for every method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnifiedHyndmanFan {
    method: Method,
}

impl UnifiedHyndmanFan {
    pub fn new(method: Method) -> Self {
        Self { method }
    }
}

/// Convenience constructor for the unified estimator
pub fn unified_hyndman_fan(method: Method) -> UnifiedHyndmanFan {
    UnifiedHyndmanFan::new(method)
}

impl QuantileEstimator for UnifiedHyndmanFan {
    fn method(&self) -> Method {
        self.method
    }

    fn name(&self) -> &str {
        "Hyndman-Fan (unified formula)"
    }

    fn estimate_fraction(&self, sample: &Sample, p: f64) -> f64 {
        let n = sample.len() as f64;
        let PlottingConstants { alpha, beta } = self.method.constants();

        let h = alpha + p * (n + 1.0 - alpha - beta);
        let (j, gamma) = match self.method.kind() {
            MethodKind::Discontinuous(rule) => {
                let (j, g) = split_rank(h);
                (j, rule.weight(j, g))
            }
            MethodKind::Continuous => {
                let j = h.floor();
                (j, h - j)
            }
        };
        trace!(method = %self.method, p, h, gamma, "unified rank");

        let lower = sample.order_statistic(index(j));
        let upper = sample.order_statistic(index(j + 1.0));
        (1.0 - gamma) * lower + gamma * upper
    }
}

/// 1-based index for rank `j`, raised to 1 when below the sample
fn index(j: f64) -> usize {
    if j < 1.0 {
        1
    } else {
        j as usize
    }
}
