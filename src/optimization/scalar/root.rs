//! Bracketed root search backed by argmin's `BrentRoot`.
//!
//! The objective is any `Fn(f64) -> Result<f64, E>`; its errors travel
//! through argmin and come back out as `E`. Before the solver runs, both
//! endpoints are evaluated here so that a bracket without a sign change is
//! reported as [`OptError::InvalidBracket`] with the offending values, and
//! an endpoint that is already an exact root is returned directly.
use crate::optimization::{
    errors::OptError,
    profile_optimizer::run::recover_error,
    scalar::{ScalarProblem, options::RootOptions},
};
use argmin::core::{Executor, State, TerminationReason, TerminationStatus};
use argmin::solver::brent::BrentRoot;

/// Find `x ∈ [a, b]` with `f(x) = 0`, where `a`/`b` may be given in either
/// order.
///
/// Parameters
/// ----------
/// - `f`: objective; must be continuous on the bracket.
/// - `a`, `b`: bracket endpoints; `f(a)` and `f(b)` must differ in sign.
/// - `opts`: tolerance and iteration cap.
///
/// Returns
/// -------
/// The root estimate. If an endpoint evaluates to exactly zero it is
/// returned without running the solver.
///
/// Errors
/// ------
/// - `OptError::InvalidInterval` when an endpoint is non-finite or `a == b`.
/// - `OptError::InvalidBracket` when the endpoint values share a sign or
///   either one is non-finite.
/// - `OptError::SearchNotConverged` when the iteration cap is hit.
/// - Any error raised by `f`, unchanged.
pub fn find_root<E, F>(f: F, a: f64, b: f64, opts: &RootOptions) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: From<OptError> + std::error::Error + Send + Sync + 'static,
{
    let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
    if !lower.is_finite() || !upper.is_finite() || lower == upper {
        return Err(E::from(OptError::InvalidInterval { lower, upper }));
    }
    let f_lower = f(lower)?;
    let f_upper = f(upper)?;
    if f_lower == 0.0 {
        return Ok(lower);
    }
    if f_upper == 0.0 {
        return Ok(upper);
    }
    if !f_lower.is_finite() || !f_upper.is_finite() || f_lower.signum() == f_upper.signum() {
        return Err(E::from(OptError::InvalidBracket { lower, upper, f_lower, f_upper }));
    }

    let problem = ScalarProblem::<_, E>::new(&f);
    let solver = BrentRoot::new(lower, upper, opts.tol);
    let result = Executor::new(problem, solver)
        .configure(|state| state.max_iters(opts.max_iter as u64))
        .run()
        .map_err(recover_error::<E>)?;
    let state = result.state();
    let root = state.get_param().copied();
    match (state.get_termination_status(), root) {
        (TerminationStatus::Terminated(TerminationReason::MaxItersReached), _) => {
            Err(E::from(OptError::SearchNotConverged { max_iter: opts.max_iter }))
        }
        (_, Some(root)) => {
            log::trace!("brent root on [{lower}, {upper}] -> {root} in {} iters", state.get_iter());
            Ok(root)
        }
        (_, None) => Err(E::from(OptError::MissingThetaHat)),
    }
}
