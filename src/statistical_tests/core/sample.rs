//! Validated observation matrix shared by every EL routine.
use crate::statistical_tests::{
    errors::{ELError, ELResult},
    validation::validate_data,
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Sample — immutable `n×d` matrix of finite observations.
///
/// Invariants
/// ----------
/// - `n ≥ 2`, `d ≥ 1`, every entry finite (checked once at construction).
///
/// Notes
/// -----
/// - Univariate routines call [`Sample::univariate`], which fails with
///   `DimensionMismatch` unless `d == 1`.
/// - Variances use the population (`1/n`) divisor, matching the EL
///   estimate of the second central moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    data: Array2<f64>,
}

impl Sample {
    /// Wrap an `n×d` array after validation.
    pub fn new(data: Array2<f64>) -> ELResult<Self> {
        validate_data(data.view())?;
        Ok(Self { data })
    }

    /// Build a univariate (`n×1`) sample from a slice.
    pub fn from_slice(values: &[f64]) -> ELResult<Self> {
        Self::from_array1(Array1::from(values.to_vec()))
    }

    /// Build a univariate (`n×1`) sample from a vector.
    pub fn from_array1(values: Array1<f64>) -> ELResult<Self> {
        Self::new(values.insert_axis(Axis(1)))
    }

    pub fn nobs(&self) -> usize {
        self.data.nrows()
    }

    pub fn dim(&self) -> usize {
        self.data.ncols()
    }

    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// The single column of a univariate sample.
    ///
    /// # Errors
    /// - `ELError::DimensionMismatch { expected: 1, found: d }` when `d != 1`.
    pub fn univariate(&self) -> ELResult<ArrayView1<'_, f64>> {
        if self.dim() != 1 {
            return Err(ELError::DimensionMismatch { expected: 1, found: self.dim() });
        }
        Ok(self.data.column(0))
    }

    /// Column means.
    pub fn column_means(&self) -> Array1<f64> {
        self.data.sum_axis(Axis(0)) / self.nobs() as f64
    }

    /// Mean of a univariate sample.
    pub fn mean(&self) -> ELResult<f64> {
        let x = self.univariate()?;
        Ok(x.sum() / x.len() as f64)
    }

    /// Population variance (`1/n` divisor) of a univariate sample.
    pub fn variance(&self) -> ELResult<f64> {
        let x = self.univariate()?;
        let mean = x.sum() / x.len() as f64;
        Ok(x.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / x.len() as f64)
    }

    /// `(min, max)` of a univariate sample.
    pub fn range(&self) -> ELResult<(f64, f64)> {
        let x = self.univariate()?;
        Ok(x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Summary statistics of a univariate sample use the population divisor.
    //
    // Given
    // -----
    // - x = [1, 2, 3, 4, 5].
    //
    // Expect
    // ------
    // - mean 3, variance 2, range (1, 5), shape 5×1.
    fn univariate_summaries_match_hand_computation() {
        // Arrange
        let sample = Sample::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        // Act / Assert
        assert_eq!((sample.nobs(), sample.dim()), (5, 1));
        assert_eq!(sample.mean().unwrap(), 3.0);
        assert_eq!(sample.variance().unwrap(), 2.0);
        assert_eq!(sample.range().unwrap(), (1.0, 5.0));
    }

    #[test]
    // Purpose
    // -------
    // Univariate accessors refuse bivariate samples.
    //
    // Given
    // -----
    // - A 3×2 sample.
    //
    // Expect
    // ------
    // - DimensionMismatch { expected: 1, found: 2 }; column means still work.
    fn bivariate_sample_rejects_univariate_access() {
        // Arrange
        let sample = Sample::new(array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();

        // Act
        let err = sample.mean().unwrap_err();

        // Assert
        assert_eq!(err, ELError::DimensionMismatch { expected: 1, found: 2 });
        assert_eq!(sample.column_means(), array![3.0, 4.0]);
    }

    #[test]
    // Purpose
    // -------
    // Construction validates the data.
    //
    // Given
    // -----
    // - A slice containing +∞.
    //
    // Expect
    // ------
    // - InvalidData at row 1.
    fn construction_rejects_non_finite_values() {
        let err = Sample::from_slice(&[1.0, f64::INFINITY, 2.0]).unwrap_err();
        assert!(matches!(err, ELError::InvalidData { row: 1, col: 0, .. }), "Got {err:?}");
    }
}
