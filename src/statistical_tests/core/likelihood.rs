//! Likelihood-ratio evaluation and χ² calibration.
//!
//! Given converged multipliers `η` for constraints `g`, the EL weights are
//! `w_i = (1/n) / (1 + η·g_i)` and the statistic is
//! `llr = −2 Σ log(n w_i) = 2 Σ log(1 + η·g_i)`. A non-positive denominator
//! is a numerical failure and is reported, never clamped.
use crate::optimization::{
    log_star::{LogStarSolver, derivatives::arguments},
    scalar::{RootOptions, find_root},
};
use crate::statistical_tests::{
    core::estimating::Constraints,
    errors::{ELError, ELResult},
};
use ndarray::{Array1, ArrayView1, ArrayView2};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Weights, statistic and multipliers of one constrained solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub weights: Array1<f64>,
    pub llr: f64,
    pub eta: Array1<f64>,
    /// Newton steps taken (0 for closed-form solves).
    pub iterations: usize,
}

/// EL weights `(1/n) / (1 + η·g_i)`.
///
/// # Errors
/// - `ELError::NonFiniteStatistic` at the first non-positive or non-finite
///   denominator.
pub fn weights_from_multipliers(g: ArrayView2<f64>, eta: ArrayView1<f64>) -> ELResult<Array1<f64>> {
    let n = g.nrows() as f64;
    let denom = arguments(g, eta);
    if let Some((index, &d)) = denom.iter().enumerate().find(|(_, d)| !d.is_finite() || **d <= 0.0)
    {
        return Err(ELError::NonFiniteStatistic { index, denom: d });
    }
    Ok(denom.mapv(|d| 1.0 / (n * d)))
}

/// `−2 Σ log(n w_i)`.
///
/// # Errors
/// - `ELError::NonFiniteStatistic` if any weight is non-positive or the
///   sum is not finite.
pub fn log_likelihood_ratio(weights: ArrayView1<f64>) -> ELResult<f64> {
    let n = weights.len() as f64;
    if let Some((index, &w)) = weights.iter().enumerate().find(|(_, w)| !(**w > 0.0)) {
        return Err(ELError::NonFiniteStatistic { index, denom: w });
    }
    let llr = -2.0 * weights.iter().map(|w| (n * w).ln()).sum::<f64>();
    if !llr.is_finite() {
        return Err(ELError::NonFiniteStatistic { index: 0, denom: llr });
    }
    Ok(llr)
}

/// Solve for the multipliers of `constraints` and evaluate the statistic.
pub fn evaluate(constraints: &Constraints, solver: &LogStarSolver) -> ELResult<SolveResult> {
    let outcome = solver.solve(constraints.matrix(), None)?;
    let weights = weights_from_multipliers(constraints.matrix(), outcome.eta.view())?;
    let llr = log_likelihood_ratio(weights.view())?;
    Ok(SolveResult { weights, llr, eta: outcome.eta, iterations: outcome.iterations })
}

fn chi_squared(df: usize) -> ELResult<ChiSquared> {
    ChiSquared::new(df as f64).map_err(|e| ELError::Distribution { text: e.to_string() })
}

/// Upper-tail χ²_df probability of `llr`, clamped to `[0, 1]`.
pub fn p_value(llr: f64, df: usize) -> ELResult<f64> {
    let dist = chi_squared(df)?;
    Ok((1.0 - dist.cdf(llr.max(0.0))).clamp(0.0, 1.0))
}

/// `q` such that `P(χ²_df ≤ q) = prob`.
///
/// The distribution's own inverse supplies a starting point that is then
/// polished with a Brent root search on the CDF, so confidence limits do
/// not inherit the coarse tolerance of the generic inverse.
pub fn chi_squared_quantile(prob: f64, df: usize) -> ELResult<f64> {
    if !(prob > 0.0 && prob < 1.0) {
        return Err(ELError::InvalidSignificance { sig: prob });
    }
    let dist = chi_squared(df)?;
    let guess = dist.inverse_cdf(prob).max(f64::MIN_POSITIVE);
    let gap = |q: f64| -> ELResult<f64> { Ok(dist.cdf(q) - prob) };

    let mut lower = guess * 0.5;
    while gap(lower)? > 0.0 && lower > 1e-300 {
        lower *= 0.5;
    }
    let mut upper = guess * 2.0 + 1.0;
    while gap(upper)? < 0.0 && upper < 1e300 {
        upper *= 2.0;
    }
    find_root(gap, lower, upper, &RootOptions::default())
        .map_err(|e: ELError| e.in_search("chi-squared quantile"))
}

/// Critical value `r0` of a level-`sig` test: the `(1 − sig)` quantile.
pub fn critical_value(sig: f64, df: usize) -> ELResult<f64> {
    chi_squared_quantile(1.0 - sig, df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistical_tests::core::{estimating::Hypothesis, sample::Sample};
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Zero multipliers give uniform weights and a zero statistic.
    //
    // Given
    // -----
    // - Any 4×1 g and η = 0.
    //
    // Expect
    // ------
    // - w = 1/4 everywhere, llr = 0.
    fn zero_multiplier_gives_uniform_weights() {
        // Arrange
        let g = array![[1.0], [-1.0], [2.0], [-2.0]];
        let eta = array![0.0];

        // Act
        let w = weights_from_multipliers(g.view(), eta.view()).unwrap();
        let llr = log_likelihood_ratio(w.view()).unwrap();

        // Assert
        assert_eq!(w, array![0.25, 0.25, 0.25, 0.25]);
        assert_eq!(llr, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // A multiplier that pushes a denominator through zero is a reportable
    // failure.
    //
    // Given
    // -----
    // - g = [[1], [-1]], η = 2 (denominator 1 − 2 = −1 at row 1).
    //
    // Expect
    // ------
    // - NonFiniteStatistic { index: 1, denom: -1 }.
    fn non_positive_denominator_is_reported() {
        let g = array![[1.0], [-1.0]];
        let eta = array![2.0];
        let err = weights_from_multipliers(g.view(), eta.view()).unwrap_err();
        assert_eq!(err, ELError::NonFiniteStatistic { index: 1, denom: -1.0 });
    }

    #[test]
    // Purpose
    // -------
    // A solved variance hypothesis yields positive weights summing to one
    // that satisfy both estimating equations.
    //
    // Given
    // -----
    // - x = [1..5], μ = 3, σ0² = 2.5.
    //
    // Expect
    // ------
    // - Σw ≈ 1, Σw(x−3) ≈ 0, Σw((x−3)² − 2.5) ≈ 0, llr > 0.
    fn evaluate_produces_constraint_satisfying_weights() {
        // Arrange
        let sample = Sample::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let c =
            Constraints::build(&sample, &Hypothesis::Variance { mu: 3.0, sigma2: 2.5 }).unwrap();

        // Act
        let res = evaluate(&c, &LogStarSolver::default()).unwrap();
        let moments = res.weights.dot(&c.matrix());

        // Assert
        assert!(res.weights.iter().all(|&w| w > 0.0));
        assert!((res.weights.sum() - 1.0).abs() < 1e-8, "sum = {}", res.weights.sum());
        assert!(moments.iter().all(|m| m.abs() < 1e-8), "moments = {moments}");
        assert!(res.llr > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Calibration helpers match textbook χ² values.
    //
    // Given
    // -----
    // - df = 1 critical value at sig = 0.05; p-value of 3.841458820694124.
    //
    // Expect
    // ------
    // - r0 ≈ 3.8414588 (to 1e-9); p ≈ 0.05; p(0) = 1.
    fn calibration_matches_reference_values() {
        let r0 = critical_value(0.05, 1).unwrap();
        assert!((r0 - 3.841458820694124).abs() < 1e-9, "r0 = {r0}");
        assert!((p_value(3.841458820694124, 1).unwrap() - 0.05).abs() < 1e-9);
        assert_eq!(p_value(0.0, 1).unwrap(), 1.0);
    }
}
