//! Validation helpers for box-constrained profiling.
//!
//! This module centralizes the consistency checks used across the
//! profiler:
//!
//! - **Tolerance checks**: [`verify_tol`] ensures a named tolerance is
//!   finite and strictly positive.
//! - **Box checks**: [`validate_bounds`] enforces finite, ordered bounds
//!   whose dimension matches the start point.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Solver output**: [`validate_theta_hat`] and [`validate_value`] reject
//!   missing or non-finite results.
use crate::optimization::{
    errors::{OptError, OptResult},
    profile_optimizer::types::{Grad, Theta},
};

/// Validate a named tolerance.
///
/// # Errors
/// Returns [`OptError::InvalidTolerance`] if the value is non-finite or
/// ≤ 0.0.
pub fn verify_tol(name: &'static str, tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidTolerance { name, tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidTolerance {
            name,
            tol,
            reason: "Tolerance must be positive.",
        });
    }
    Ok(())
}

/// Validate a maximum iteration count.
///
/// # Errors
/// Returns [`OptError::InvalidMaxIter`] when `max_iter == 0`.
pub fn verify_max_iter(max_iter: usize) -> OptResult<()> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate a box `[lower, upper]` against a start point.
///
/// Checks:
/// - `lower.len() == upper.len() == start.len()`
/// - every bound is finite and `lower[i] < upper[i]`
/// - every start coordinate is finite (it may sit on or outside the box;
///   the adapter clamps it)
///
/// # Errors
/// - [`OptError::BoundsDimMismatch`] on a length disagreement.
/// - [`OptError::InvalidBounds`] for the first offending coordinate.
/// - [`OptError::InvalidThetaHat`] for a non-finite start coordinate.
pub fn validate_bounds(lower: &Theta, upper: &Theta, start: &Theta) -> OptResult<()> {
    let dim = start.len();
    if lower.len() != dim {
        return Err(OptError::BoundsDimMismatch { expected: dim, found: lower.len() });
    }
    if upper.len() != dim {
        return Err(OptError::BoundsDimMismatch { expected: dim, found: upper.len() });
    }
    for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(OptError::InvalidBounds { index, lower: lo, upper: hi });
        }
    }
    for (index, &value) in start.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidThetaHat { index, value });
        }
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidGradient`] with the index/value of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient { index, value });
        }
    }
    Ok(())
}

/// Validate and unwrap an estimated parameter vector (`theta_hat`).
///
/// # Errors
/// - [`OptError::MissingThetaHat`] if no vector was provided.
/// - [`OptError::InvalidThetaHat`] if any element is non-finite.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    match theta_hat {
        Some(t) => {
            for (index, &value) in t.iter().enumerate() {
                if !value.is_finite() {
                    return Err(OptError::InvalidThetaHat { index, value });
                }
            }
            Ok(t)
        }
        None => Err(OptError::MissingThetaHat),
    }
}

/// Validate that the best cost reported by the solver is finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Tolerances must be finite and strictly positive.
    //
    // Given
    // -----
    // - 0.0, -1.0, NaN and 1e-8.
    //
    // Expect
    // ------
    // - The first three are rejected with `InvalidTolerance`; 1e-8 passes.
    fn verify_tol_rejects_non_positive_and_non_finite() {
        // Act & Assert
        for &bad in &[0.0, -1.0, f64::NAN] {
            assert!(matches!(verify_tol("sd", bad), Err(OptError::InvalidTolerance { .. })));
        }
        assert!(verify_tol("sd", 1e-8).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Reversed or degenerate bounds are reported with their index.
    //
    // Given
    // -----
    // - lower = [0, 2], upper = [1, 2] (second coordinate degenerate).
    //
    // Expect
    // ------
    // - `InvalidBounds { index: 1, .. }`.
    fn validate_bounds_reports_degenerate_coordinate() {
        // Arrange
        let lower = array![0.0, 2.0];
        let upper = array![1.0, 2.0];
        let start = array![0.5, 2.0];

        // Act
        let err = validate_bounds(&lower, &upper, &start).unwrap_err();

        // Assert
        assert!(matches!(err, OptError::InvalidBounds { index: 1, .. }), "Got {err:?}");
    }

    #[test]
    // Purpose
    // -------
    // Box and start must share a dimension.
    //
    // Given
    // -----
    // - A 2-d box and a 3-d start point.
    //
    // Expect
    // ------
    // - `BoundsDimMismatch { expected: 3, found: 2 }`.
    fn validate_bounds_rejects_dimension_mismatch() {
        // Arrange
        let lower = array![0.0, 0.0];
        let upper = array![1.0, 1.0];
        let start = array![0.5, 0.5, 0.5];

        // Act
        let err = validate_bounds(&lower, &upper, &start).unwrap_err();

        // Assert
        assert_eq!(err, OptError::BoundsDimMismatch { expected: 3, found: 2 });
    }

    #[test]
    // Purpose
    // -------
    // Non-finite gradient entries are caught with their position.
    //
    // Given
    // -----
    // - grad = [1, inf].
    //
    // Expect
    // ------
    // - `InvalidGradient { index: 1, .. }`.
    fn validate_grad_flags_non_finite_entry() {
        // Arrange
        let grad = array![1.0, f64::INFINITY];

        // Act
        let err = validate_grad(&grad, 2).unwrap_err();

        // Assert
        assert!(matches!(err, OptError::InvalidGradient { index: 1, .. }), "Got {err:?}");
    }

    #[test]
    // Purpose
    // -------
    // A missing solver estimate is an error rather than a silent default.
    //
    // Given
    // -----
    // - `None`.
    //
    // Expect
    // ------
    // - `MissingThetaHat`.
    fn validate_theta_hat_rejects_missing_estimate() {
        assert_eq!(validate_theta_hat(None), Err(OptError::MissingThetaHat));
    }
}
