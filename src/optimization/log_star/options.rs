//! Configuration for the log-star Newton iteration.
use crate::optimization::{
    errors::{OptError, OptResult},
    numerical_stability::transformations::{DIVERGENCE_BOUND, NEWTON_TOL},
    profile_optimizer::validation::{verify_max_iter, verify_tol},
};

/// Newton iteration settings.
///
/// Fields:
/// - `tol` — converged once `Σ|Δη| < tol`.
/// - `divergence_bound` — diverged once any `|η_j| > divergence_bound`.
/// - `max_iter` — safety cap on the number of Newton steps.
///
/// Default: `tol = 1e-10`, `divergence_bound = 1e10`, `max_iter = 1000`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonOptions {
    pub tol: f64,
    pub divergence_bound: f64,
    pub max_iter: usize,
}

impl NewtonOptions {
    /// Construct validated Newton options.
    ///
    /// # Errors
    /// - [`OptError::InvalidTolerance`] if `tol` or `divergence_bound` is
    ///   non-finite or non-positive, or if `divergence_bound <= tol`.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(tol: f64, divergence_bound: f64, max_iter: usize) -> OptResult<Self> {
        verify_tol("Newton", tol)?;
        verify_tol("divergence bound", divergence_bound)?;
        if divergence_bound <= tol {
            return Err(OptError::InvalidTolerance {
                name: "divergence bound",
                tol: divergence_bound,
                reason: "Divergence bound must exceed the convergence tolerance.",
            });
        }
        verify_max_iter(max_iter)?;
        Ok(Self { tol, divergence_bound, max_iter })
    }
}

impl Default for NewtonOptions {
    fn default() -> Self {
        Self { tol: NEWTON_TOL, divergence_bound: DIVERGENCE_BOUND, max_iter: 1000 }
    }
}
