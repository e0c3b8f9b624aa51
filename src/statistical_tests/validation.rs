//! statistical_tests::validation — shared input guards for EL routines.
//!
//! Purpose
//! -------
//! Centralize the checks every empirical-likelihood entry point performs
//! before any numerical work: sample shape and finiteness, significance
//! levels, hypothesized values, variances, and evaluation grids.
//!
//! Conventions
//! -----------
//! - Validation is pure and allocation-free apart from error construction.
//! - Each guard returns the first violation it finds as a structured
//!   [`ELError`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch and a success path per guard.

use crate::statistical_tests::errors::{ELError, ELResult};
use ndarray::ArrayView2;

/// Validate an `n×d` sample: `n ≥ 2`, `d ≥ 1`, every entry finite.
///
/// Errors
/// ------
/// - `ELError::InsufficientData` when `n < 2`.
/// - `ELError::DimensionMismatch { expected: 1, found: 0 }` when `d == 0`.
/// - `ELError::InvalidData` with the position of the first non-finite
///   entry.
pub fn validate_data(data: ArrayView2<f64>) -> ELResult<()> {
    let (nobs, dim) = data.dim();
    if nobs < 2 {
        return Err(ELError::InsufficientData { nobs });
    }
    if dim == 0 {
        return Err(ELError::DimensionMismatch { expected: 1, found: 0 });
    }
    if let Some(((row, col), &value)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(ELError::InvalidData { row, col, value });
    }
    Ok(())
}

/// Validate a significance level `sig ∈ (0, 1)`.
pub fn validate_significance(sig: f64) -> ELResult<()> {
    if !sig.is_finite() || sig <= 0.0 || sig >= 1.0 {
        return Err(ELError::InvalidSignificance { sig });
    }
    Ok(())
}

/// Validate that a hypothesized parameter is finite.
pub fn validate_hypothesis(name: &'static str, value: f64) -> ELResult<()> {
    if !value.is_finite() {
        return Err(ELError::InvalidHypothesis { name, value });
    }
    Ok(())
}

/// Validate that a variance (hypothesized or nuisance) is finite and
/// strictly positive.
pub fn validate_variance(value: f64) -> ELResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ELError::NonPositiveVariance { value });
    }
    Ok(())
}

/// Validate a grid axis `lower, lower + step, … < upper`.
///
/// Errors
/// ------
/// - `ELError::InvalidGrid` when a bound or the step is non-finite,
///   `lower >= upper`, or `step <= 0`.
pub fn validate_grid(lower: f64, upper: f64, step: f64) -> ELResult<()> {
    if !lower.is_finite() || !upper.is_finite() || !step.is_finite() {
        return Err(ELError::InvalidGrid {
            reason: format!("bounds and step must be finite, got [{lower}, {upper}] step {step}"),
        });
    }
    if lower >= upper {
        return Err(ELError::InvalidGrid {
            reason: format!("lower bound {lower} must be below upper bound {upper}"),
        });
    }
    if step <= 0.0 {
        return Err(ELError::InvalidGrid { reason: format!("step {step} must be positive") });
    }
    Ok(())
}
