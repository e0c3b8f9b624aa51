//! Skewness and kurtosis tests with `(μ, σ²)` profiled out.
//!
//! Both tests solve three estimating equations: the mean and variance
//! rows at nuisance `(μ, σ²)` plus the standardized third or fourth
//! moment. The statistic is the minimum of the inner `llr` over a box of
//! nuisance values, found by the box-constrained profiler. Points whose
//! inner solve fails count as `+∞`, and the weights are recomputed at
//! the minimizer.
use crate::optimization::profile_optimizer::{BoxObjective, Cost, Theta, minimize_in_box};
use crate::statistical_tests::{
    core::{
        Constraints, ELOptions, Hypothesis, HypothesisTest, MeanCiOptions, NuisanceOptions,
        Sample, SolveResult, VarCiBounds, evaluate,
    },
    errors::{ELError, ELResult},
    moments::{
        mean::ci_mean,
        variance::{ci_var, is_infeasible},
    },
    validation::validate_hypothesis,
};
use ndarray::array;

/// Standardized moment under test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeMoment {
    Skewness(f64),
    Kurtosis(f64),
}

impl ShapeMoment {
    fn hypothesis(&self, mu: f64, sigma2: f64) -> Hypothesis {
        match *self {
            ShapeMoment::Skewness(skew0) => Hypothesis::Skewness { mu, sigma2, skew0 },
            ShapeMoment::Kurtosis(kurt0) => Hypothesis::Kurtosis { mu, sigma2, kurt0 },
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ShapeMoment::Skewness(_) => "skewness",
            ShapeMoment::Kurtosis(_) => "kurtosis",
        }
    }

    fn target(&self) -> f64 {
        match *self {
            ShapeMoment::Skewness(v) | ShapeMoment::Kurtosis(v) => v,
        }
    }
}

/// Inner three-equation solve at nuisance `(mu, sigma2)`.
pub fn opt_shape(
    sample: &Sample, moment: ShapeMoment, mu: f64, sigma2: f64, opts: &ELOptions,
) -> ELResult<SolveResult> {
    let constraints = Constraints::build(sample, &moment.hypothesis(mu, sigma2))?;
    evaluate(&constraints, &opts.solver())
}

/// Inner skewness solve at `(mu, sigma2)`.
pub fn opt_skew(
    sample: &Sample, mu: f64, sigma2: f64, skew0: f64, opts: &ELOptions,
) -> ELResult<SolveResult> {
    opt_shape(sample, ShapeMoment::Skewness(skew0), mu, sigma2, opts)
}

/// Inner kurtosis solve at `(mu, sigma2)`.
pub fn opt_kurt(
    sample: &Sample, mu: f64, sigma2: f64, kurt0: f64, opts: &ELOptions,
) -> ELResult<SolveResult> {
    opt_shape(sample, ShapeMoment::Kurtosis(kurt0), mu, sigma2, opts)
}

/// Inner `llr` as a function of `[μ, σ²]`, for the box profiler.
struct NuisanceProfile<'a> {
    sample: &'a Sample,
    moment: ShapeMoment,
    opts: &'a ELOptions,
}

impl BoxObjective for NuisanceProfile<'_> {
    type Error = ELError;

    fn value(&self, x: &Theta) -> Result<Cost, Self::Error> {
        match opt_shape(self.sample, self.moment, x[0], x[1], self.opts) {
            Ok(solve) => Ok(solve.llr),
            Err(e) if is_infeasible(&e) => Ok(f64::INFINITY),
            Err(e) => Err(e),
        }
    }
}

/// Nuisance box `([μ_lo, σ²_lo], [μ_hi, σ²_hi])`, defaulting each axis to
/// its 95% EL interval.
fn nuisance_box(
    sample: &Sample, nuisance: &NuisanceOptions, opts: &ELOptions,
) -> ELResult<(Theta, Theta)> {
    let (mu_lo, mu_hi) = match nuisance.mu_bounds {
        Some(b) => b,
        None => {
            let ci = ci_mean(sample, 0.05, &MeanCiOptions::default(), opts)?;
            (ci.lower, ci.upper)
        }
    };
    let (var_lo, var_hi) = match nuisance.var_bounds {
        Some(b) => b,
        None => {
            let ci = ci_var(sample, 0.05, &VarCiBounds::default(), opts)?;
            (ci.lower, ci.upper)
        }
    };
    Ok((array![mu_lo, var_lo], array![mu_hi, var_hi]))
}

/// Test a standardized moment with `(μ, σ²)` profiled out.
///
/// Returns
/// -------
/// `HypothesisTest` with `nuisance = [μ̂, σ̂²]` and one degree of freedom.
///
/// Errors
/// ------
/// - `ELError::InvalidHypothesis` for a non-finite target.
/// - `ELError::InvalidOption` for a malformed nuisance box.
/// - `ELError::DivergedOptimization` when neither the start nor any point of
///   the feasible-start grid over the box supports the hypothesis.
///
/// Notes
/// -----
/// - An infeasible start (the default `(x̄, s²)` often is for a strongly
///   rejected target) is replaced by the best feasible grid point before
///   the simplex is built.
pub fn hy_test_shape(
    sample: &Sample, moment: ShapeMoment, nuisance: &NuisanceOptions, opts: &ELOptions,
) -> ELResult<HypothesisTest> {
    validate_hypothesis(moment.name(), moment.target())?;
    let (lower, upper) = nuisance_box(sample, nuisance, opts)?;
    let start = match nuisance.start {
        Some((mu, sigma2)) => array![mu, sigma2],
        None => array![sample.mean()?, sample.variance()?],
    };
    log::debug!("{} profile box: [{lower}, {upper}], start {start}", moment.name());

    let objective = NuisanceProfile { sample, moment, opts };
    let outcome = minimize_in_box(&objective, &start, &lower, &upper, &opts.profile)?;
    let (mu_hat, sigma2_hat) = (outcome.x_hat[0], outcome.x_hat[1]);
    log::debug!(
        "{} profile: mu = {mu_hat}, sigma2 = {sigma2_hat}, llr = {}, status = {}",
        moment.name(),
        outcome.value,
        outcome.status
    );

    let solve = opt_shape(sample, moment, mu_hat, sigma2_hat, opts)?;
    HypothesisTest::from_solve(solve, &moment.hypothesis(mu_hat, sigma2_hat), Some(outcome.x_hat))
}

/// Test `H0: skewness = skew0`.
pub fn hy_test_skew(
    sample: &Sample, skew0: f64, nuisance: &NuisanceOptions, opts: &ELOptions,
) -> ELResult<HypothesisTest> {
    hy_test_shape(sample, ShapeMoment::Skewness(skew0), nuisance, opts)
}

/// Test `H0: excess kurtosis = kurt0`.
pub fn hy_test_kurt(
    sample: &Sample, kurt0: f64, nuisance: &NuisanceOptions, opts: &ELOptions,
) -> ELResult<HypothesisTest> {
    hy_test_shape(sample, ShapeMoment::Kurtosis(kurt0), nuisance, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::profile_optimizer::ProfileMethod;
    use rand::{SeedableRng, rngs::StdRng};
    use rand_distr::{Distribution, Exp1, StandardNormal};

    fn sample_from<D: Distribution<f64>>(dist: D, n: usize, seed: u64) -> Sample {
        let mut rng = StdRng::seed_from_u64(seed);
        let values: Vec<f64> = (0..n).map(|_| dist.sample(&mut rng)).collect();
        Sample::from_slice(&values).unwrap()
    }

    fn scaled_sample<D: Distribution<f64>>(dist: D, n: usize, seed: u64, factor: f64) -> Sample {
        let mut rng = StdRng::seed_from_u64(seed);
        let values: Vec<f64> = (0..n).map(|_| factor * dist.sample(&mut rng)).collect();
        Sample::from_slice(&values).unwrap()
    }

    /// Positive weights summing to one that zero every constraint column at
    /// the profiled nuisance, up to a tolerance relative to each column's
    /// root mean square.
    fn assert_weights_solve(sample: &Sample, moment: ShapeMoment, out: &HypothesisTest) {
        let nuisance = out.nuisance.as_ref().unwrap();
        let hypothesis = moment.hypothesis(nuisance[0], nuisance[1]);
        let constraints = Constraints::build(sample, &hypothesis).unwrap();
        let g = constraints.matrix();
        let w = &out.weights;
        assert!(w.iter().all(|&wi| wi > 0.0), "non-positive weight");
        assert!((w.sum() - 1.0).abs() < 1e-8, "sum of weights = {}", w.sum());
        let moments = w.dot(&g);
        for (j, m) in moments.iter().enumerate() {
            let rms = g.column(j).mapv(|v| v * v).mean().unwrap().sqrt();
            assert!(m.abs() <= 1e-7 * rms, "column {j}: weighted mean {m}, scale {rms}");
        }
    }

    fn sample_excess_kurtosis(sample: &Sample) -> f64 {
        let x = sample.univariate().unwrap();
        let (mean, var) = (sample.mean().unwrap(), sample.variance().unwrap());
        x.iter().map(|v| (v - mean).powi(4)).sum::<f64>() / x.len() as f64 / (var * var) - 3.0
    }

    fn sample_skewness(sample: &Sample) -> f64 {
        let x = sample.univariate().unwrap();
        let (mean, var) = (sample.mean().unwrap(), sample.variance().unwrap());
        x.iter().map(|v| (v - mean).powi(3)).sum::<f64>() / x.len() as f64 / var.powf(1.5)
    }

    #[test]
    // Purpose
    // -------
    // Testing the sample skewness gives a near-zero statistic, and the
    // profiled nuisance sits near the sample mean and variance.
    //
    // Given
    // -----
    // - 150 standard-normal draws, skew0 = sample skewness.
    //
    // Expect
    // ------
    // - llr < 1e-4, p > 0.99, weights summing to 1.
    fn hy_test_skew_at_sample_skewness_is_null() {
        // Arrange
        let sample = sample_from(StandardNormal, 150, 21);
        let skew0 = sample_skewness(&sample);

        // Act
        let out = hy_test_skew(&sample, skew0, &NuisanceOptions::default(), &ELOptions::default())
            .unwrap();

        // Assert
        assert!(out.llr < 1e-4, "llr = {}", out.llr);
        assert!(out.p_value > 0.99, "p = {}", out.p_value);
        assert!((out.weights.sum() - 1.0).abs() < 1e-8);
        assert_eq!(out.nuisance.map(|v| v.len()), Some(2));
    }

    #[test]
    // Purpose
    // -------
    // Exponential data are strongly right-skewed, so symmetry is either
    // rejected or not supported by any reweighting inside the nuisance box.
    //
    // Given
    // -----
    // - 300 Exp(1) draws (population skewness 2), skew0 = 0.
    //
    // Expect
    // ------
    // - p < 0.01, or DivergedOptimization; never a non-rejection.
    fn hy_test_skew_rejects_symmetry_for_exponential_data() {
        // Arrange
        let sample = sample_from(Exp1, 300, 5);

        // Act
        let result = hy_test_skew(&sample, 0.0, &NuisanceOptions::default(), &ELOptions::default());

        // Assert
        match result {
            Ok(out) => assert!(out.p_value < 0.01, "p = {}", out.p_value),
            Err(ELError::DivergedOptimization { .. }) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // The kurtosis test does not reject the true excess kurtosis of normal
    // data, and both profilers agree on the statistic.
    //
    // Given
    // -----
    // - 200 standard-normal draws, kurt0 = 0, explicit nuisance box.
    //
    // Expect
    // ------
    // - p > 0.01 for Nelder–Mead; L-BFGS llr within 1e-3 of it.
    fn hy_test_kurt_profilers_agree() {
        // Arrange
        let sample = sample_from(StandardNormal, 200, 17);
        let (mean, var) = (sample.mean().unwrap(), sample.variance().unwrap());
        let nuisance = NuisanceOptions {
            start: None,
            mu_bounds: Some((mean - 0.1, mean + 0.1)),
            var_bounds: Some((0.85 * var, 1.2 * var)),
        };
        let nm = ELOptions::default();
        let mut lbfgs = ELOptions::default();
        lbfgs.profile = lbfgs.profile.with_method(ProfileMethod::Lbfgs);

        // Act
        let out_nm = hy_test_kurt(&sample, 0.0, &nuisance, &nm).unwrap();
        let out_lbfgs = hy_test_kurt(&sample, 0.0, &nuisance, &lbfgs).unwrap();

        // Assert
        assert!(out_nm.p_value > 0.01, "p = {}", out_nm.p_value);
        assert!((out_nm.llr - out_lbfgs.llr).abs() < 1e-3, "{} vs {}", out_nm.llr, out_lbfgs.llr);
    }

    #[test]
    // Purpose
    // -------
    // Non-finite targets are rejected before any search.
    //
    // Given
    // -----
    // - skew0 = NaN.
    //
    // Expect
    // ------
    // - InvalidHypothesis naming skewness.
    fn hy_test_skew_rejects_non_finite_target() {
        let sample = Sample::from_slice(&[1.0, 2.0, 4.0, 8.0]).unwrap();
        let opts = ELOptions::default();
        let err = hy_test_skew(&sample, f64::NAN, &NuisanceOptions::default(), &opts).unwrap_err();
        assert!(
            matches!(err, ELError::InvalidHypothesis { name: "skewness", .. }),
            "Got {err:?}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Strongly skewed data put the default start `(x̄, s²)` outside the EL
    // support for a symmetry hypothesis, while a corner of the nuisance box
    // still supports it. The profiler must find that corner and reject.
    //
    // Given
    // -----
    // - 100 Exp(1) draws, skew0 = 0, default nuisance box and start.
    //
    // Expect
    // ------
    // - A finite statistic with p < 1e-3 and the nuisance inside the box.
    fn hy_test_skew_recovers_from_infeasible_default_start() {
        // Arrange
        let sample = sample_from(Exp1, 100, 11);
        let opts = ELOptions::default();
        let (lower, upper) = nuisance_box(&sample, &NuisanceOptions::default(), &opts).unwrap();

        // Act
        let out = hy_test_skew(&sample, 0.0, &NuisanceOptions::default(), &opts).unwrap();

        // Assert
        assert!(out.llr.is_finite() && out.llr > 0.0, "llr = {}", out.llr);
        assert!(out.p_value < 1e-3, "p = {}", out.p_value);
        let nuisance = out.nuisance.unwrap();
        for i in 0..2 {
            assert!(lower[i] <= nuisance[i] && nuisance[i] <= upper[i], "nuisance = {nuisance}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Away from the null, the skewness and kurtosis weights are a proper
    // reweighting that solves all three estimating equations at the
    // reported nuisance, for data in tiny and in large units.
    //
    // Given
    // -----
    // - 200 standard-normal draws scaled by 1e-6 and 1e4.
    // - skew0 = 0.3 and kurt0 = 0.6 with the default nuisance box.
    //
    // Expect
    // ------
    // - llr > 0, weights positive and summing to 1.
    // - Σ w_i g_i ≈ 0 for g built at (μ̂, σ̂²).
    fn shape_weights_solve_constraints_on_scaled_data() {
        // Arrange
        let opts = ELOptions::default();
        let nuisance = NuisanceOptions::default();

        for factor in [1e-6, 1e4] {
            let sample = scaled_sample(StandardNormal, 200, 31, factor);

            for moment in [ShapeMoment::Skewness(0.3), ShapeMoment::Kurtosis(0.6)] {
                // Act
                let out = hy_test_shape(&sample, moment, &nuisance, &opts).unwrap();

                // Assert
                assert!(out.llr > 0.0, "{moment:?} at scale {factor}: llr = {}", out.llr);
                assert_weights_solve(&sample, moment, &out);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // The kurtosis statistic does not depend on the units of the data.
    //
    // Given
    // -----
    // - 200 standard-normal draws, kurt0 = 0.6, and copies scaled by 1e-6
    //   and 1e4, default nuisance box.
    //
    // Expect
    // ------
    // - llr within a relative 1e-4 of the unit-scale llr.
    fn hy_test_kurt_is_invariant_to_data_scale() {
        // Arrange
        let opts = ELOptions::default();
        let nuisance = NuisanceOptions::default();
        let reference =
            hy_test_kurt(&scaled_sample(StandardNormal, 200, 31, 1.0), 0.6, &nuisance, &opts)
                .unwrap();

        for factor in [1e-6, 1e4] {
            let sample = scaled_sample(StandardNormal, 200, 31, factor);

            // Act
            let out = hy_test_kurt(&sample, 0.6, &nuisance, &opts).unwrap();

            // Assert
            let rel = (out.llr - reference.llr).abs() / reference.llr.max(1.0);
            assert!(rel < 1e-4, "scale {factor}: llr {} vs {}", out.llr, reference.llr);
        }
    }

    #[test]
    // Purpose
    // -------
    // The inner kurtosis solve gives the same non-negative statistic and a
    // proper reweighting whether the data are in unit or in large units.
    //
    // Given
    // -----
    // - 200 standard-normal draws and a copy scaled by 1e4.
    // - `opt_kurt` at (x̄, s²) with kurt0 = sample excess kurtosis, then
    //   kurt0 + 0.3.
    //
    // Expect
    // ------
    // - At the sample kurtosis, llr within 1e-8 of zero.
    // - At kurt0 + 0.3, llr > 0 and equal across scales within a relative
    //   1e-8.
    // - Weights sum to 1 in every case.
    fn opt_kurt_matches_across_units() {
        // Arrange
        let opts = ELOptions::default();
        let unit = scaled_sample(StandardNormal, 200, 31, 1.0);
        let large = scaled_sample(StandardNormal, 200, 31, 1e4);
        let kurt = sample_excess_kurtosis(&unit);
        let moments = |s: &Sample| (s.mean().unwrap(), s.variance().unwrap());

        // Act
        let (mu, var) = moments(&unit);
        let unit_null = opt_kurt(&unit, mu, var, kurt, &opts).unwrap();
        let unit_alt = opt_kurt(&unit, mu, var, kurt + 0.3, &opts).unwrap();
        let (mu, var) = moments(&large);
        let large_null = opt_kurt(&large, mu, var, kurt, &opts).unwrap();
        let large_alt = opt_kurt(&large, mu, var, kurt + 0.3, &opts).unwrap();

        // Assert
        assert!(unit_null.llr.abs() < 1e-8, "llr = {}", unit_null.llr);
        assert!(large_null.llr.abs() < 1e-8, "llr = {}", large_null.llr);
        assert!(unit_alt.llr > 0.0, "llr = {}", unit_alt.llr);
        let rel = (large_alt.llr - unit_alt.llr).abs() / unit_alt.llr;
        assert!(rel < 1e-8, "{} vs {}", large_alt.llr, unit_alt.llr);
        for solve in [&unit_null, &unit_alt, &large_null, &large_alt] {
            assert!((solve.weights.sum() - 1.0).abs() < 1e-10, "sum = {}", solve.weights.sum());
        }
    }
}
