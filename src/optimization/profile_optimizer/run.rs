//! Execution helper that runs an argmin solver on a box-adapted objective
//! and returns a crate-friendly [`ProfileOutcome`].
use crate::optimization::{
    errors::OptError,
    profile_optimizer::{
        adapter::BoxAdapter,
        traits::{BoxObjective, ProfileOptions, ProfileOutcome},
        types::Theta,
    },
};
use argmin::core::{Error, Executor, IterState, Solver, State};

/// Run an argmin solver for a box-constrained objective.
///
/// Shared by both solver choices. It wires up the adapted problem, the
/// solver, the logit-space start `theta0`, and `opts.max_iter`, then maps
/// the best parameter back into the box. With the `obs_slog` feature and
/// `opts.verbose`, every iteration is also logged to the terminal.
///
/// # Type Parameters
/// - `F`: objective implementing [`BoxObjective`].
/// - `S`: any argmin solver over `BoxAdapter<'a, F>` whose state is an
///   `IterState` with `Theta` parameters and `f64` costs; `G` is its
///   gradient slot (`()` for Nelder–Mead).
///
/// # Errors
/// - The objective's own errors are returned unchanged.
/// - Argmin failures and an all-infeasible search (infinite best cost) are
///   converted through `F::Error: From<OptError>`.
pub fn run_solver<'a, F, S, G>(
    theta0: Theta, opts: &ProfileOptions, problem: BoxAdapter<'a, F>, solver: S,
) -> Result<ProfileOutcome, F::Error>
where
    F: BoxObjective,
    G: Clone,
    S: Solver<BoxAdapter<'a, F>, IterState<Theta, G, (), (), (), f64>> + Send + 'static,
{
    let (lower, upper) = (problem.lower, problem.upper);
    let mapper = BoxAdapter::new(problem.f, lower, upper, problem.reject_non_finite);

    let max_iter = opts.max_iter as u64;
    let optimizer = Executor::new(problem, solver)
        .configure(|state| state.param(theta0).max_iters(max_iter));
    #[cfg(feature = "obs_slog")]
    let optimizer = if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always)
    } else {
        optimizer
    };
    let result = optimizer.run().map_err(recover_error::<F::Error>)?;
    let mut state = result.state().clone();

    let iterations = state.get_iter();
    let fn_evals = state.get_func_counts().clone();
    let termination = state.get_termination_status().clone();
    let best_cost = state.get_best_cost();
    let x_hat = state.take_best_param().map(|theta| mapper.to_box(&theta));
    log::debug!(
        "profile search finished after {iterations} iterations: cost = {best_cost}, \
         status = {termination:?}"
    );
    ProfileOutcome::new(x_hat, best_cost, termination, iterations, fn_evals)
        .map_err(F::Error::from)
}

/// Recover the caller's error type from an argmin error.
///
/// Objective errors are carried through argmin as boxed errors and are
/// downcast back; everything else goes through [`OptError`].
pub fn recover_error<E>(err: Error) -> E
where
    E: From<OptError> + std::error::Error + Send + Sync + 'static,
{
    match err.downcast::<E>() {
        Ok(e) => e,
        Err(err) => E::from(OptError::from(err)),
    }
}
