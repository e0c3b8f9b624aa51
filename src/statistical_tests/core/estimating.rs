//! Estimating equations for each supported hypothesis.
//!
//! A hypothesis plus its nuisance values determines an `n×k` matrix `g`
//! whose weighted column means must vanish under the EL weights:
//!
//! | hypothesis         | k | columns                                              |
//! |--------------------|---|------------------------------------------------------|
//! | mean `μ0`          | 1 | `x − μ0`                                             |
//! | variance `σ0²`     | 2 | `x − μ`, `(x − μ)² − σ0²`                            |
//! | skewness `s0`      | 3 | `x − μ`, `(x − μ)² − σ²`, `(x − μ)³ / σ³ − s0`       |
//! | kurtosis `κ0`      | 3 | `x − μ`, `(x − μ)² − σ²`, `(x − μ)⁴ / σ⁴ − 3 − κ0`   |
//! | mean vector `μ`    | d | `x_j − μ_j`                                          |
//!
//! `μ` and `σ²` are nuisance values chosen by the outer search.
use crate::statistical_tests::{
    core::sample::Sample,
    errors::{ELError, ELResult},
    validation::{validate_hypothesis, validate_variance},
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Hypothesis under test together with its nuisance values.
#[derive(Debug, Clone, PartialEq)]
pub enum Hypothesis {
    Mean { mu0: f64 },
    Variance { mu: f64, sigma2: f64 },
    Skewness { mu: f64, sigma2: f64, skew0: f64 },
    Kurtosis { mu: f64, sigma2: f64, kurt0: f64 },
    MultivariateMean { mu: Array1<f64> },
}

impl Hypothesis {
    /// Degrees of freedom of the limiting χ² distribution.
    pub fn df(&self) -> usize {
        match self {
            Hypothesis::MultivariateMean { mu } => mu.len(),
            _ => 1,
        }
    }

    /// Number of estimating-equation columns.
    pub fn ncons(&self) -> usize {
        match self {
            Hypothesis::Mean { .. } => 1,
            Hypothesis::Variance { .. } => 2,
            Hypothesis::Skewness { .. } | Hypothesis::Kurtosis { .. } => 3,
            Hypothesis::MultivariateMean { mu } => mu.len(),
        }
    }
}

/// Constraints — immutable `n×k` estimating-equation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraints {
    g: Array2<f64>,
}

impl Constraints {
    /// Build the estimating equations of `hypothesis` on `sample`.
    ///
    /// Errors
    /// ------
    /// - `ELError::InvalidHypothesis` for a non-finite target or nuisance
    ///   mean.
    /// - `ELError::NonPositiveVariance` for `σ² ≤ 0` (or non-finite).
    /// - `ELError::DimensionMismatch` when a univariate hypothesis meets a
    ///   multivariate sample or `len(μ) != d`.
    pub fn build(sample: &Sample, hypothesis: &Hypothesis) -> ELResult<Self> {
        let g = match hypothesis {
            Hypothesis::Mean { mu0 } => {
                validate_hypothesis("mean", *mu0)?;
                let x = sample.univariate()?;
                x.mapv(|v| v - mu0).insert_axis(Axis(1))
            }
            Hypothesis::Variance { mu, sigma2 } => {
                validate_hypothesis("nuisance mean", *mu)?;
                validate_variance(*sigma2)?;
                central_moment_rows(sample.univariate()?, *mu, *sigma2, 2)
            }
            Hypothesis::Skewness { mu, sigma2, skew0 } => {
                validate_hypothesis("nuisance mean", *mu)?;
                validate_variance(*sigma2)?;
                validate_hypothesis("skewness", *skew0)?;
                let mut g = central_moment_rows(sample.univariate()?, *mu, *sigma2, 3);
                let scale = sigma2 * sigma2.sqrt();
                g.column_mut(2).mapv_inplace(|c| c.powi(3) / scale - skew0);
                g
            }
            Hypothesis::Kurtosis { mu, sigma2, kurt0 } => {
                validate_hypothesis("nuisance mean", *mu)?;
                validate_variance(*sigma2)?;
                validate_hypothesis("kurtosis", *kurt0)?;
                let mut g = central_moment_rows(sample.univariate()?, *mu, *sigma2, 3);
                let scale = sigma2 * sigma2;
                g.column_mut(2).mapv_inplace(|c| c.powi(4) / scale - 3.0 - kurt0);
                g
            }
            Hypothesis::MultivariateMean { mu } => {
                if mu.len() != sample.dim() {
                    return Err(ELError::DimensionMismatch {
                        expected: sample.dim(),
                        found: mu.len(),
                    });
                }
                for &m in mu.iter() {
                    validate_hypothesis("mean vector", m)?;
                }
                &sample.data() - &mu.view().insert_axis(Axis(0))
            }
        };
        Ok(Self { g })
    }

    /// Wrap a precomputed constraint matrix.
    pub fn from_matrix(g: Array2<f64>) -> Self {
        Self { g }
    }

    pub fn matrix(&self) -> ArrayView2<'_, f64> {
        self.g.view()
    }

    pub fn nobs(&self) -> usize {
        self.g.nrows()
    }

    pub fn ncons(&self) -> usize {
        self.g.ncols()
    }
}

/// First two columns shared by the variance, skewness and kurtosis
/// equations; any extra columns hold the raw deviations `x − μ` for the
/// caller to transform.
fn central_moment_rows(x: ArrayView1<f64>, mu: f64, sigma2: f64, k: usize) -> Array2<f64> {
    let dev = x.mapv(|v| v - mu);
    let mut g = Array2::<f64>::zeros((x.len(), k));
    g.column_mut(0).assign(&dev);
    g.column_mut(1).assign(&dev.mapv(|d| d * d - sigma2));
    for j in 2..k {
        g.column_mut(j).assign(&dev);
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn five() -> Sample {
        Sample::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // The mean equations are the centered observations.
    //
    // Given
    // -----
    // - x = [1..5], μ0 = 3.
    //
    // Expect
    // ------
    // - A 5×1 matrix [-2, -1, 0, 1, 2].
    fn mean_constraints_center_the_data() {
        let c = Constraints::build(&five(), &Hypothesis::Mean { mu0: 3.0 }).unwrap();
        assert_eq!(c.matrix(), array![[-2.0], [-1.0], [0.0], [1.0], [2.0]]);
    }

    #[test]
    // Purpose
    // -------
    // Variance equations pair the centered value with the squared
    // deviation minus σ0².
    //
    // Given
    // -----
    // - x = [1..5], μ = 3, σ0² = 2.
    //
    // Expect
    // ------
    // - Second column [2, -1, -2, -1, 2].
    fn variance_constraints_use_squared_deviation() {
        let c =
            Constraints::build(&five(), &Hypothesis::Variance { mu: 3.0, sigma2: 2.0 }).unwrap();
        assert_eq!(c.ncons(), 2);
        assert_eq!(c.matrix().column(1), array![2.0, -1.0, -2.0, -1.0, 2.0]);
    }

    #[test]
    // Purpose
    // -------
    // Skewness and kurtosis add a standardized third column.
    //
    // Given
    // -----
    // - x = [1..5], μ = 3, σ² = 4, skew0 = 0.5 and kurt0 = -1.
    //
    // Expect
    // ------
    // - Skewness col 2 = (x−3)³/8 − 0.5; kurtosis col 2 = (x−3)⁴/16 − 2.
    fn shape_constraints_standardize_third_column() {
        // Act
        let skew = Constraints::build(
            &five(),
            &Hypothesis::Skewness { mu: 3.0, sigma2: 4.0, skew0: 0.5 },
        )
        .unwrap();
        let kurt = Constraints::build(
            &five(),
            &Hypothesis::Kurtosis { mu: 3.0, sigma2: 4.0, kurt0: -1.0 },
        )
        .unwrap();

        // Assert
        assert_eq!(skew.matrix().column(2), array![-1.5, -0.625, -0.5, -0.375, 0.5]);
        assert_eq!(kurt.matrix().column(2), array![-1.0, -1.9375, -2.0, -1.9375, -1.0]);
    }

    #[test]
    // Purpose
    // -------
    // Fractional powers of σ² require a positive variance.
    //
    // Given
    // -----
    // - Skewness hypothesis with σ² = 0.
    //
    // Expect
    // ------
    // - NonPositiveVariance { value: 0 }.
    fn shape_constraints_reject_zero_variance() {
        let err = Constraints::build(
            &five(),
            &Hypothesis::Skewness { mu: 3.0, sigma2: 0.0, skew0: 0.0 },
        )
        .unwrap_err();
        assert_eq!(err, ELError::NonPositiveVariance { value: 0.0 });
    }

    #[test]
    // Purpose
    // -------
    // The multivariate mean vector must match the sample dimension.
    //
    // Given
    // -----
    // - A 3×2 sample; μ of length 2 and of length 3.
    //
    // Expect
    // ------
    // - Centered 3×2 matrix for length 2; DimensionMismatch for length 3.
    fn multivariate_constraints_check_dimension() {
        // Arrange
        let sample = Sample::new(array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();

        // Act
        let ok = Constraints::build(
            &sample,
            &Hypothesis::MultivariateMean { mu: array![3.0, 4.0] },
        )
        .unwrap();
        let err = Constraints::build(
            &sample,
            &Hypothesis::MultivariateMean { mu: array![0.0, 0.0, 0.0] },
        )
        .unwrap_err();

        // Assert
        assert_eq!(ok.matrix(), array![[-2.0, -2.0], [0.0, 0.0], [2.0, 2.0]]);
        assert_eq!(err, ELError::DimensionMismatch { expected: 2, found: 3 });
    }
}
