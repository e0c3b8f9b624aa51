//! Configuration for EL tests and interval searches.
//!
//! [`ELOptions`] groups the numeric-engine settings shared by every call;
//! [`MeanCiOptions`], [`VarCiBounds`] and [`NuisanceOptions`] are per-call
//! knobs of the mean interval, variance interval and shape tests.
use crate::optimization::{
    log_star::{LogStarSolver, NewtonOptions},
    profile_optimizer::ProfileOptions,
    scalar::{MinimizeOptions, RootOptions},
};
use crate::statistical_tests::errors::{ELError, ELResult};
use std::str::FromStr;

/// Numeric-engine settings.
///
/// - `newton`: log-star multiplier solve.
/// - `root`: Brent root searches (mean test, interval endpoints).
/// - `minimize`: bounded Brent search over the nuisance mean of the
///   variance test.
/// - `profile`: box-constrained search over `(μ, σ²)` for skewness and
///   kurtosis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ELOptions {
    pub newton: NewtonOptions,
    pub root: RootOptions,
    pub minimize: MinimizeOptions,
    pub profile: ProfileOptions,
}

impl ELOptions {
    pub fn solver(&self) -> LogStarSolver {
        LogStarSolver::new(self.newton)
    }
}

/// Search strategy for the mean confidence interval.
///
/// Parsing accepts `"nested-brent"`, `"gamma"` and `"bisect"`
/// (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiMethod {
    /// Brent root of `llr(μ) − r0` between the mean and each extreme.
    NestedBrent,
    /// Brent root in the dual variable `γ` outside the data range.
    Gamma,
    /// Interval halving between the mean and each extreme.
    Bisect,
}

impl FromStr for CiMethod {
    type Err = ELError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nested-brent" | "nested_brent" => Ok(CiMethod::NestedBrent),
            "gamma" => Ok(CiMethod::Gamma),
            "bisect" => Ok(CiMethod::Bisect),
            _ => Err(ELError::InvalidOption {
                name: "method".to_string(),
                reason: format!(
                    "unknown interval method '{s}'; expected 'nested-brent', 'gamma' or 'bisect'"
                ),
            }),
        }
    }
}

/// Mean confidence-interval settings.
///
/// - `epsilon`: fraction of the mean-to-extreme distance kept away from the
///   data extremes (nested Brent), or absolute offset of the `γ` bracket
///   from the extremes (gamma).
/// - `gamma_low`, `gamma_high`: outer `γ` bracket ends.
/// - `tol`: bisection stops once `|llr − r0| ≤ tol`.
/// - `max_bisect_iter`: bisection cap.
///
/// Default: `NestedBrent`, `epsilon = 1e-6`, `γ ∈ ∓1e10`, `tol = 1e-6`,
/// `max_bisect_iter = 200`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanCiOptions {
    pub method: CiMethod,
    pub epsilon: f64,
    pub gamma_low: f64,
    pub gamma_high: f64,
    pub tol: f64,
    pub max_bisect_iter: usize,
}

impl MeanCiOptions {
    /// # Errors
    /// - `ELError::InvalidOption` when `epsilon ∉ (0, 1)`, `tol ≤ 0`, the
    ///   `γ` ends are non-finite or unordered, or `max_bisect_iter == 0`.
    pub fn new(
        method: CiMethod, epsilon: f64, gamma_low: f64, gamma_high: f64, tol: f64,
        max_bisect_iter: usize,
    ) -> ELResult<Self> {
        if !(epsilon > 0.0 && epsilon < 1.0) {
            return Err(invalid("epsilon", format!("{epsilon} must lie in (0, 1)")));
        }
        if !(tol.is_finite() && tol > 0.0) {
            return Err(invalid("tol", format!("{tol} must be finite and positive")));
        }
        if !gamma_low.is_finite() || !gamma_high.is_finite() || gamma_low >= gamma_high {
            return Err(invalid(
                "gamma bounds",
                format!("[{gamma_low}, {gamma_high}] must be finite and ordered"),
            ));
        }
        if max_bisect_iter == 0 {
            return Err(invalid("max_bisect_iter", "must be positive".to_string()));
        }
        Ok(Self { method, epsilon, gamma_low, gamma_high, tol, max_bisect_iter })
    }

    pub fn with_method(mut self, method: CiMethod) -> Self {
        self.method = method;
        self
    }
}

impl Default for MeanCiOptions {
    fn default() -> Self {
        Self {
            method: CiMethod::NestedBrent,
            epsilon: 1e-6,
            gamma_low: -1e10,
            gamma_high: 1e10,
            tol: 1e-6,
            max_bisect_iter: 200,
        }
    }
}

/// Optional overrides of the variance-interval search bracket.
///
/// Unset ends default to `(n−1)s²/χ²_{n−1}(0.9999)` and
/// `(n−1)s²/χ²_{n−1}(0.0001)`, a normal-theory bracket that is only a
/// heuristic starting range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VarCiBounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

/// Optional start point and box for the `(μ, σ²)` search of the shape
/// tests. Unset boxes default to the 95% mean and variance intervals; the
/// start defaults to the sample mean and variance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NuisanceOptions {
    pub start: Option<(f64, f64)>,
    pub mu_bounds: Option<(f64, f64)>,
    pub var_bounds: Option<(f64, f64)>,
}

fn invalid(name: &str, reason: String) -> ELError {
    ELError::InvalidOption { name: name.to_string(), reason }
}
