//! Bounded scalar minimization backed by argmin's `BrentOpt`.
//!
//! Unlike [`find_root`](super::root::find_root), the objective may return
//! `+∞` to mark infeasible points; the golden-section steps of Brent's
//! method move past them. A search whose best value is still infinite is
//! an error.
use crate::optimization::{
    errors::OptError,
    profile_optimizer::run::recover_error,
    scalar::{ScalarProblem, options::MinimizeOptions},
};
use argmin::core::{Executor, State};
use argmin::solver::brent::BrentOpt;

/// Result of a bounded scalar minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarMinimum {
    /// Minimizer location.
    pub x: f64,
    /// Objective value at `x`.
    pub value: f64,
    /// Solver iterations.
    pub iterations: u64,
}

/// Minimize `f` on `[lower, upper]`.
///
/// Errors
/// ------
/// - `OptError::InvalidInterval` for non-finite or unordered bounds.
/// - `OptError::NonFiniteCost` when no evaluated point had a finite value.
/// - Any error raised by `f`, unchanged.
pub fn minimize_scalar<E, F>(
    f: F, lower: f64, upper: f64, opts: &MinimizeOptions,
) -> Result<ScalarMinimum, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: From<OptError> + std::error::Error + Send + Sync + 'static,
{
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(E::from(OptError::InvalidInterval { lower, upper }));
    }
    let guarded = |x: f64| -> Result<f64, E> {
        let value = f(x)?;
        Ok(if value.is_nan() { f64::INFINITY } else { value })
    };
    let problem = ScalarProblem::<_, E>::new(&guarded);
    let solver = BrentOpt::new(lower, upper).set_tolerance(opts.eps, opts.tol);
    let result = Executor::new(problem, solver)
        .configure(|state| state.max_iters(opts.max_iter as u64))
        .run()
        .map_err(recover_error::<E>)?;
    let state = result.state();
    let value = state.get_best_cost();
    if !value.is_finite() {
        return Err(E::from(OptError::NonFiniteCost { value }));
    }
    let x = match state.get_best_param() {
        Some(&x) => x,
        None => return Err(E::from(OptError::MissingThetaHat)),
    };
    log::trace!("brent min on [{lower}, {upper}] -> f({x}) = {value}");
    Ok(ScalarMinimum { x, value, iterations: state.get_iter() })
}
