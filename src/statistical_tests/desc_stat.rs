//! statistical_tests::desc_stat — owning facade over the EL routines.
//!
//! Purpose
//! -------
//! Bundle a validated [`Sample`] with an [`ELOptions`] configuration and
//! expose every test, interval and diagnostic as a method, so callers do
//! not thread the sample and options through each call.
//!
//! Invariants & assumptions
//! ------------------------
//! - The sample is immutable for the lifetime of the facade.
//! - Methods are pure: calling one never changes what another returns.
use crate::statistical_tests::{
    core::{
        ConfidenceInterval, ELOptions, HypothesisTest, MeanCiOptions, NuisanceOptions, Sample,
        VarCiBounds,
    },
    diagnostics::{
        ContourGrid, GridAxis, PValueCurve, mean_var_contour, mv_mean_contour, var_p_curve,
    },
    errors::ELResult,
    moments::{
        ci_mean, ci_var, hy_test_kurt, hy_test_mean, hy_test_skew, hy_test_var, mv_hy_test_mean,
    },
};
use ndarray::{Array1, Array2};

/// DescStat — empirical-likelihood inference on one sample.
///
/// Construction
/// ------------
/// - [`DescStat::new`] from an `n×d` array, [`DescStat::from_slice`] for a
///   univariate sample; [`DescStat::with_options`] swaps the engine
///   settings.
///
/// Notes
/// -----
/// - Univariate methods fail with `DimensionMismatch` on a multivariate
///   sample, and `mv_hy_test_mean` accepts any `d`.
#[derive(Debug, Clone, PartialEq)]
pub struct DescStat {
    sample: Sample,
    opts: ELOptions,
}

impl DescStat {
    pub fn new(data: Array2<f64>) -> ELResult<Self> {
        Ok(Self { sample: Sample::new(data)?, opts: ELOptions::default() })
    }

    pub fn from_slice(values: &[f64]) -> ELResult<Self> {
        Ok(Self { sample: Sample::from_slice(values)?, opts: ELOptions::default() })
    }

    pub fn from_sample(sample: Sample) -> Self {
        Self { sample, opts: ELOptions::default() }
    }

    pub fn with_options(mut self, opts: ELOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    pub fn options(&self) -> &ELOptions {
        &self.opts
    }

    pub fn hy_test_mean(&self, mu0: f64) -> ELResult<HypothesisTest> {
        hy_test_mean(&self.sample, mu0, &self.opts)
    }

    pub fn ci_mean(&self, sig: f64, ci: &MeanCiOptions) -> ELResult<ConfidenceInterval> {
        ci_mean(&self.sample, sig, ci, &self.opts)
    }

    pub fn hy_test_var(&self, sigma2_0: f64) -> ELResult<HypothesisTest> {
        hy_test_var(&self.sample, sigma2_0, &self.opts)
    }

    pub fn ci_var(&self, sig: f64, bounds: &VarCiBounds) -> ELResult<ConfidenceInterval> {
        ci_var(&self.sample, sig, bounds, &self.opts)
    }

    pub fn hy_test_skew(&self, skew0: f64, nuisance: &NuisanceOptions) -> ELResult<HypothesisTest> {
        hy_test_skew(&self.sample, skew0, nuisance, &self.opts)
    }

    pub fn hy_test_kurt(&self, kurt0: f64, nuisance: &NuisanceOptions) -> ELResult<HypothesisTest> {
        hy_test_kurt(&self.sample, kurt0, nuisance, &self.opts)
    }

    pub fn mv_hy_test_mean(&self, mu: &Array1<f64>) -> ELResult<HypothesisTest> {
        mv_hy_test_mean(&self.sample, mu, &self.opts)
    }

    pub fn var_p_curve(&self, axis: &GridAxis) -> ELResult<PValueCurve> {
        var_p_curve(&self.sample, axis, &self.opts)
    }

    pub fn mv_mean_contour(&self, mu1: &GridAxis, mu2: &GridAxis) -> ELResult<ContourGrid> {
        mv_mean_contour(&self.sample, mu1, mu2, &self.opts)
    }

    pub fn mean_var_contour(&self, mean: &GridAxis, variance: &GridAxis) -> ELResult<ContourGrid> {
        mean_var_contour(&self.sample, mean, variance, &self.opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistical_tests::errors::ELError;

    #[test]
    // Purpose
    // -------
    // The facade forwards to the free functions with its own sample.
    //
    // Given
    // -----
    // - DescStat over [1..5].
    //
    // Expect
    // ------
    // - hy_test_mean(3) ≈ null; the 95% mean CI contains 3.
    fn facade_delegates_to_mean_routines() {
        // Arrange
        let ds = DescStat::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        // Act
        let test = ds.hy_test_mean(3.0).unwrap();
        let ci = ds.ci_mean(0.05, &MeanCiOptions::default()).unwrap();

        // Assert
        assert!(test.llr.abs() < 1e-10);
        assert!(ci.contains(3.0), "{ci:?}");
    }

    #[test]
    // Purpose
    // -------
    // Univariate methods refuse a bivariate facade.
    //
    // Given
    // -----
    // - DescStat over a 3×2 array.
    //
    // Expect
    // ------
    // - DimensionMismatch from hy_test_var.
    fn facade_rejects_univariate_calls_on_bivariate_sample() {
        let ds = DescStat::new(ndarray::array![[1.0, 2.0], [2.0, 1.0], [3.0, 3.0]]).unwrap();
        let err = ds.hy_test_var(1.0).unwrap_err();
        assert_eq!(err, ELError::DimensionMismatch { expected: 1, found: 2 });
    }
}
