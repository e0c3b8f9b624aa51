//! Result types returned to callers.
use crate::statistical_tests::{
    core::{estimating::Hypothesis, likelihood::{SolveResult, p_value}},
    errors::ELResult,
};
use ndarray::Array1;

/// HypothesisTest — outcome of an EL hypothesis test.
///
/// Fields
/// ------
/// - `p_value`: upper-tail χ² probability of `llr`, in `[0, 1]`.
/// - `llr`: `−2 log` likelihood ratio, `≥ 0` up to rounding.
/// - `weights`: EL weights at the solution; positive, summing to 1.
/// - `nuisance`: profiled nuisance values (`[μ]` for the variance test,
///   `[μ, σ²]` for skewness and kurtosis), `None` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct HypothesisTest {
    pub p_value: f64,
    pub llr: f64,
    pub weights: Array1<f64>,
    pub nuisance: Option<Array1<f64>>,
}

impl HypothesisTest {
    /// Calibrate a solve against χ² with the hypothesis' degrees of freedom.
    pub fn from_solve(
        solve: SolveResult, hypothesis: &Hypothesis, nuisance: Option<Array1<f64>>,
    ) -> ELResult<Self> {
        let p_value = p_value(solve.llr, hypothesis.df())?;
        Ok(Self { p_value, llr: solve.llr, weights: solve.weights, nuisance })
    }
}

/// ConfidenceInterval — `[lower, upper]` limits of an EL interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}
