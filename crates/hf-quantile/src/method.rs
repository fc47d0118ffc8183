//! The nine sample quantile definitions of Hyndman & Fan (1996)
//!
//! Every method is described by a pair of plotting-position constants
//! `(α, β)`. The fractional rank of probability `p` in a sample of size `n` is
//!
//! ```text
//! h = α + p·(n + 1 − α − β)
//! ```
//!
//! Types 1-3 are discontinuous: they pick an order statistic (type 2 averages
//! two at a tie) according to a [`TieRule`]. Types 4-9 are continuous and
//! interpolate linearly between the order statistics around `h`.
//!
//! # References
//!
//! Hyndman, R. J. and Fan, Y. (1996) Sample quantiles in statistical
//! packages, American Statistician 50, 361-365.

use hf_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Hyndman & Fan sample quantile definition
///
/// The discriminant is the type number used by R's `quantile(type = k)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Type 1: inverse of the empirical distribution function
    InvertedCdf = 1,
    /// Type 2: like type 1, averaging at discontinuities
    AveragedInvertedCdf = 2,
    /// Type 3: nearest order statistic, even rank on ties (SAS definition)
    ClosestObservation = 3,
    /// Type 4: `p_k = k/n`, linear interpolation of the empirical CDF
    InterpolatedInvertedCdf = 4,
    /// Type 5: `p_k = (k − 1/2)/n`, knots midway through the CDF steps
    Hazen = 5,
    /// Type 6: `p_k = k/(n + 1)`, expectations of uniform order statistics
    /// (Minitab, SPSS)
    Weibull = 6,
    /// Type 7: `p_k = (k − 1)/(n − 1)`, modes of uniform order statistics
    /// (default of R, S, NumPy and Excel)
    #[default]
    Linear = 7,
    /// Type 8: `p_k = (k − 1/3)/(n + 1/3)`, approximately median-unbiased
    /// whatever the distribution
    MedianUnbiased = 8,
    /// Type 9: `p_k = (k − 3/8)/(n + 1/4)`, approximately unbiased for
    /// normal samples (normal Q-Q plots)
    NormalUnbiased = 9,
}

/// Which order statistic a discontinuous method keeps at `h = j + g`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieRule {
    /// Type 1: `x[j]` when `g = 0`, otherwise `x[j + 1]`
    Lower,
    /// Type 2: mean of `x[j]` and `x[j + 1]` when `g = 0`, otherwise `x[j + 1]`
    Average,
    /// Type 3: `x[j]` when `g = 0` and `j` is even, otherwise `x[j + 1]`
    NearestEven,
}

impl TieRule {
    /// Weight `γ` given to `x[j + 1]`; `x[j]` receives `1 − γ`
    pub fn weight(self, j: f64, g: f64) -> f64 {
        if g != 0.0 {
            return 1.0;
        }
        match self {
            TieRule::Lower => 0.0,
            TieRule::Average => 0.5,
            TieRule::NearestEven if j.rem_euclid(2.0) == 0.0 => 0.0,
            TieRule::NearestEven => 1.0,
        }
    }
}

/// Relative tolerance under which a fractional rank counts as whole
///
/// `n·p` is rarely exact in binary: `50 × 0.14` evaluates to
/// `7.000000000000001`. Same factor as R's `quantile` (`4 × ε`), scaled by
/// the rank so it holds for any sample size.
pub const RANK_FUZZ: f64 = 4.0 * f64::EPSILON;

/// Split rank `h` into its whole part `j` and fraction `g` for the
/// discontinuous methods
///
/// A rank within rounding error of an integer snaps to it (`g = 0`), from
/// either side.
pub fn split_rank(h: f64) -> (f64, f64) {
    let fuzz = RANK_FUZZ * h.abs().max(1.0);
    let j = (h + fuzz).floor();
    let g = h - j;
    if g.abs() <= fuzz {
        (j, 0.0)
    } else {
        (j, g)
    }
}

/// Whether a method selects or interpolates order statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Step function of `p`: selects (or averages) order statistics
    Discontinuous(TieRule),
    /// Piecewise linear in `p`: interpolates between order statistics
    Continuous,
}

/// Plotting-position constants `(α, β)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottingConstants {
    pub alpha: f64,
    pub beta: f64,
}

impl Method {
    /// All methods in type order
    pub const ALL: [Method; 9] = [
        Method::InvertedCdf,
        Method::AveragedInvertedCdf,
        Method::ClosestObservation,
        Method::InterpolatedInvertedCdf,
        Method::Hazen,
        Method::Weibull,
        Method::Linear,
        Method::MedianUnbiased,
        Method::NormalUnbiased,
    ];

    /// Look up a method by its type number (1-9)
    pub fn from_type(method: u8) -> Result<Self> {
        Error::check_method(method)?;
        Ok(Self::ALL[usize::from(method) - 1])
    }

    /// Hyndman & Fan type number
    pub fn type_number(self) -> u8 {
        self as u8
    }

    /// snake_case name, matching the serde representation
    pub fn name(self) -> &'static str {
        match self {
            Method::InvertedCdf => "inverted_cdf",
            Method::AveragedInvertedCdf => "averaged_inverted_cdf",
            Method::ClosestObservation => "closest_observation",
            Method::InterpolatedInvertedCdf => "interpolated_inverted_cdf",
            Method::Hazen => "hazen",
            Method::Weibull => "weibull",
            Method::Linear => "linear",
            Method::MedianUnbiased => "median_unbiased",
            Method::NormalUnbiased => "normal_unbiased",
        }
    }

    pub fn kind(self) -> MethodKind {
        match self {
            Method::InvertedCdf => MethodKind::Discontinuous(TieRule::Lower),
            Method::AveragedInvertedCdf => MethodKind::Discontinuous(TieRule::Average),
            Method::ClosestObservation => MethodKind::Discontinuous(TieRule::NearestEven),
            _ => MethodKind::Continuous,
        }
    }

    pub fn is_continuous(self) -> bool {
        self.kind() == MethodKind::Continuous
    }

    /// Plotting-position constants `(α, β)`
    ///
    /// Types 1-3 reuse the same rank formula: types 1 and 2 share type 4's
    /// constants and type 3 is shifted half a rank down.
    pub fn constants(self) -> PlottingConstants {
        let (alpha, beta) = match self {
            Method::InvertedCdf | Method::AveragedInvertedCdf => (0.0, 1.0),
            Method::ClosestObservation => (-0.5, 1.5),
            Method::InterpolatedInvertedCdf => (0.0, 1.0),
            Method::Hazen => (0.5, 0.5),
            Method::Weibull => (0.0, 0.0),
            Method::Linear => (1.0, 1.0),
            Method::MedianUnbiased => (1.0 / 3.0, 1.0 / 3.0),
            Method::NormalUnbiased => (3.0 / 8.0, 3.0 / 8.0),
        };
        PlottingConstants { alpha, beta }
    }

    /// Offset `m` such that `h = n·p + m`
    ///
    /// `m = α + p·(1 − α − β)`; it depends on `p` for types 6-9.
    pub fn rank_offset(self, p: f64) -> f64 {
        let PlottingConstants { alpha, beta } = self.constants();
        alpha + p * (1.0 - alpha - beta)
    }

    /// Plotting position `p_k = (k − α)/(n + 1 − α − β)` of the `k`-th order
    /// statistic
    ///
    /// Only defined for the continuous methods; `None` for types 1-3 and when
    /// the denominator vanishes (type 7 with a single observation).
    pub fn plotting_position(self, k: usize, n: usize) -> Option<f64> {
        if !self.is_continuous() {
            return None;
        }
        let PlottingConstants { alpha, beta } = self.constants();
        let denominator = n as f64 + 1.0 - alpha - beta;
        if denominator == 0.0 {
            return None;
        }
        Some((k as f64 - alpha) / denominator)
    }
}

impl TryFrom<u8> for Method {
    type Error = Error;

    fn try_from(method: u8) -> Result<Self> {
        Method::from_type(method)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {}", self.type_number())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Accepts `"7"`, `"type7"`, `"type 7"`, `"type_7"` or a method name such
    /// as `"linear"` / `"median-unbiased"`
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let digits = normalized
            .strip_prefix("type")
            .map(|rest| rest.trim_start_matches([' ', '_']))
            .unwrap_or(normalized.as_str());

        if let Ok(number) = digits.parse::<u8>() {
            return Method::from_type(number).map_err(|_| Error::InvalidMethod {
                method: s.to_string(),
            });
        }

        Method::ALL
            .into_iter()
            .find(|method| method.name() == normalized)
            .ok_or_else(|| Error::InvalidMethod {
                method: s.to_string(),
            })
    }
}
