//! Multivariate mean test.
//!
//! The `d` equations `x_j − μ_j` go straight to the log-star Newton solver
//! (seeded at `1/n` per component), and the statistic is calibrated against
//! χ² with `d` degrees of freedom.
use crate::statistical_tests::{
    core::{Constraints, ELOptions, Hypothesis, HypothesisTest, Sample, evaluate},
    errors::ELResult,
};
use ndarray::Array1;

/// Test `H0: E[x] = mu` for an `n×d` sample.
///
/// Errors
/// ------
/// - `ELError::DimensionMismatch` when `mu.len() != d`.
/// - `ELError::DivergedOptimization` when `mu` lies outside the convex hull
///   of the observations.
pub fn mv_hy_test_mean(
    sample: &Sample, mu: &Array1<f64>, opts: &ELOptions,
) -> ELResult<HypothesisTest> {
    let hypothesis = Hypothesis::MultivariateMean { mu: mu.clone() };
    let constraints = Constraints::build(sample, &hypothesis)?;
    let solve = evaluate(&constraints, &opts.solver())?;
    log::debug!("multivariate mean test at {mu}: llr = {} ({} steps)", solve.llr, solve.iterations);
    HypothesisTest::from_solve(solve, &hypothesis, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistical_tests::errors::ELError;
    use ndarray::{Array2, array};

    fn square() -> Sample {
        let data: Array2<f64> = array![
            [0.0, 0.0],
            [1.0, 0.2],
            [0.1, 1.0],
            [0.9, 0.8],
            [0.5, 0.4],
            [0.3, 0.7],
            [0.7, 0.1],
            [0.2, 0.5]
        ];
        Sample::new(data).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // The column means are the saturated point of the bivariate test.
    //
    // Given
    // -----
    // - An 8×2 sample, μ = column means.
    //
    // Expect
    // ------
    // - llr ≈ 0, p ≈ 1.
    fn mv_hy_test_mean_at_column_means_is_null() {
        // Arrange
        let sample = square();
        let mu = sample.column_means();

        // Act
        let out = mv_hy_test_mean(&sample, &mu, &ELOptions::default()).unwrap();

        // Assert
        assert!(out.llr.abs() < 1e-10, "llr = {}", out.llr);
        assert!((out.p_value - 1.0).abs() < 1e-8);
    }

    #[test]
    // Purpose
    // -------
    // An interior point away from the means is penalized, and the weights
    // reproduce it.
    //
    // Given
    // -----
    // - μ = [0.6, 0.6].
    //
    // Expect
    // ------
    // - llr > 0, Σw = 1, Σw x ≈ μ.
    fn mv_hy_test_mean_weights_reproduce_hypothesis() {
        // Arrange
        let sample = square();
        let mu = array![0.6, 0.6];

        // Act
        let out = mv_hy_test_mean(&sample, &mu, &ELOptions::default()).unwrap();
        let implied = out.weights.dot(&sample.data());

        // Assert
        assert!(out.llr > 0.0);
        assert!((out.weights.sum() - 1.0).abs() < 1e-8);
        assert!((&implied - &mu).iter().all(|d| d.abs() < 1e-8), "implied = {implied}");
    }

    #[test]
    // Purpose
    // -------
    // A point outside the convex hull is reported as divergence.
    //
    // Given
    // -----
    // - μ = [2, 2].
    //
    // Expect
    // ------
    // - DivergedOptimization.
    fn mv_hy_test_mean_outside_hull_diverges() {
        let err = mv_hy_test_mean(&square(), &array![2.0, 2.0], &ELOptions::default()).unwrap_err();
        assert!(matches!(err, ELError::DivergedOptimization { .. }), "Got {err:?}");
    }

    #[test]
    // Purpose
    // -------
    // The hypothesized vector must match the sample dimension.
    //
    // Given
    // -----
    // - A length-3 μ on a bivariate sample.
    //
    // Expect
    // ------
    // - DimensionMismatch { expected: 2, found: 3 }.
    fn mv_hy_test_mean_checks_dimension() {
        let err = mv_hy_test_mean(&square(), &array![0.0, 0.0, 0.0], &ELOptions::default())
            .unwrap_err();
        assert_eq!(err, ELError::DimensionMismatch { expected: 2, found: 3 });
    }
}
