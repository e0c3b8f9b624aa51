//! Options for the bracketed scalar searches.
use crate::optimization::{
    errors::OptResult,
    profile_optimizer::validation::{verify_max_iter, verify_tol},
};

/// Brent root-search configuration.
///
/// - `tol`: absolute tolerance on the root location (argmin adds a
///   machine-epsilon relative term on top).
/// - `max_iter`: iteration cap; hitting it is an error.
///
/// Default: `tol = 2e-12`, `max_iter = 200`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootOptions {
    pub tol: f64,
    pub max_iter: usize,
}

impl RootOptions {
    /// # Errors
    /// - `InvalidTolerance` for a non-finite or non-positive `tol`.
    /// - `InvalidMaxIter` for `max_iter == 0`.
    pub fn new(tol: f64, max_iter: usize) -> OptResult<Self> {
        verify_tol("root", tol)?;
        verify_max_iter(max_iter)?;
        Ok(Self { tol, max_iter })
    }

    /// Copy with `tol` scaled by the bracket `width`, so the search resolves
    /// the root to the same fraction of the bracket whatever the data units.
    /// A non-finite or non-positive width leaves the options unchanged.
    pub fn relative_to(&self, width: f64) -> Self {
        if width.is_finite() && width > 0.0 {
            Self { tol: self.tol * width, ..*self }
        } else {
            *self
        }
    }
}

impl Default for RootOptions {
    fn default() -> Self {
        Self { tol: 2e-12, max_iter: 200 }
    }
}

/// Bounded Brent minimization configuration.
///
/// - `eps`: relative tolerance on the minimizer location.
/// - `tol`: absolute tolerance on the minimizer location.
/// - `max_iter`: iteration cap.
///
/// Default: `eps = sqrt(f64::EPSILON)`, `tol = 1e-8`, `max_iter = 500`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimizeOptions {
    pub eps: f64,
    pub tol: f64,
    pub max_iter: usize,
}

impl MinimizeOptions {
    /// # Errors
    /// - `InvalidTolerance` for a non-finite or non-positive `eps` or `tol`.
    /// - `InvalidMaxIter` for `max_iter == 0`.
    pub fn new(eps: f64, tol: f64, max_iter: usize) -> OptResult<Self> {
        verify_tol("relative minimizer", eps)?;
        verify_tol("absolute minimizer", tol)?;
        verify_max_iter(max_iter)?;
        Ok(Self { eps, tol, max_iter })
    }

    /// Copy with the absolute `tol` scaled by the search `width`.
    /// A non-finite or non-positive width leaves the options unchanged.
    pub fn relative_to(&self, width: f64) -> Self {
        if width.is_finite() && width > 0.0 {
            Self { tol: self.tol * width, ..*self }
        } else {
            *self
        }
    }
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self { eps: f64::EPSILON.sqrt(), tol: 1e-8, max_iter: 500 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Tolerances follow the bracket width so tiny-unit data are resolved
    // as finely as unit-scale data.
    //
    // Given
    // -----
    // - Default options rescaled to widths 1e-6 and 0.
    //
    // Expect
    // ------
    // - Width 1e-6 multiplies both tolerances by 1e-6.
    // - Width 0 leaves the options unchanged.
    fn relative_to_scales_absolute_tolerance() {
        // Arrange
        let root = RootOptions::default();
        let minimize = MinimizeOptions::default();

        // Act
        let root_small = root.relative_to(1e-6);
        let minimize_small = minimize.relative_to(1e-6);

        // Assert
        assert!((root_small.tol - 2e-18).abs() < 1e-30);
        assert!((minimize_small.tol - 1e-14).abs() < 1e-26);
        assert_eq!(minimize_small.eps, minimize.eps);
        assert_eq!(root.relative_to(0.0), root);
        assert_eq!(minimize.relative_to(f64::NAN), minimize);
    }
}
