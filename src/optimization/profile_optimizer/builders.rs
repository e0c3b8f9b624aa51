//! profile_optimizer::builders — solver construction helpers.
//!
//! Purpose
//! -------
//! Provide small, focused builders for the two solvers used by the
//! nuisance profiler. They hide argmin's generic wiring and apply the
//! crate-level [`ProfileOptions`] so the runner can request a configured
//! solver without touching argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - Build a Nelder–Mead simplex around the logit-space start point, one
//!   vertex per coordinate offset by `opts.simplex_step`, and apply the
//!   cost standard-deviation tolerance.
//! - Build an L-BFGS solver with a More–Thuente line search, the
//!   configured history size, and the gradient-norm tolerance.
//!
//! Conventions
//! -----------
//! - Builders never set `max_iters`; the runner applies it.
//! - Argmin rejections of tolerance values surface as [`OptError`] through
//!   the crate's `From<argmin::core::Error>` conversion.
//!
//! Testing notes
//! -------------
//! - Unit tests check simplex geometry and that valid options build
//!   without error.
use crate::optimization::{
    errors::OptResult,
    profile_optimizer::{
        traits::ProfileOptions,
        types::{LbfgsMoreThuente, MoreThuenteLS, NelderMeadSolver, Theta},
    },
};

/// build_nelder_mead — construct a Nelder–Mead solver around `theta0`.
///
/// Parameters
/// ----------
/// - `theta0`: `&Theta`
///   Start point in logit space; becomes the first simplex vertex.
/// - `opts`: `&ProfileOptions`
///   Source of `simplex_step` and `sd_tol`.
///
/// Returns
/// -------
/// `OptResult<NelderMeadSolver>`
///   A solver whose simplex has `theta0.len() + 1` vertices.
///
/// Errors
/// ------
/// - `OptError` (via `From<argmin::core::Error>`) if argmin rejects the
///   standard-deviation tolerance.
pub fn build_nelder_mead(theta0: &Theta, opts: &ProfileOptions) -> OptResult<NelderMeadSolver> {
    let simplex = initial_simplex(theta0, opts.simplex_step);
    let solver = NelderMeadSolver::new(simplex).with_sd_tolerance(opts.sd_tol)?;
    Ok(solver)
}

/// build_lbfgs — construct L-BFGS with More–Thuente line search.
///
/// Errors
/// ------
/// - `OptError` (via `From<argmin::core::Error>`) if argmin rejects the
///   gradient tolerance.
pub fn build_lbfgs(opts: &ProfileOptions) -> OptResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let lbfgs = LbfgsMoreThuente::new(more_thuente, opts.lbfgs_mem);
    let lbfgs = lbfgs.with_tolerance_grad(opts.tol_grad)?;
    Ok(lbfgs)
}

// ---- Helper methods ----

/// Simplex made of `theta0` plus `theta0 + step · e_i` for each axis.
fn initial_simplex(theta0: &Theta, step: f64) -> Vec<Theta> {
    let mut simplex = Vec::with_capacity(theta0.len() + 1);
    simplex.push(theta0.clone());
    for i in 0..theta0.len() {
        let mut vertex = theta0.clone();
        vertex[i] += step;
        simplex.push(vertex);
    }
    simplex
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::profile_optimizer::traits::ProfileMethod;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // The initial simplex has one vertex per dimension plus the start,
    // each offset along a single axis.
    //
    // Given
    // -----
    // - theta0 = [1, -1], step = 0.5.
    //
    // Expect
    // ------
    // - Vertices [1, -1], [1.5, -1], [1, -0.5].
    fn initial_simplex_offsets_one_axis_per_vertex() {
        // Act
        let simplex = initial_simplex(&array![1.0, -1.0], 0.5);

        // Assert
        assert_eq!(simplex, vec![array![1.0, -1.0], array![1.5, -1.0], array![1.0, -0.5]]);
    }

    #[test]
    // Purpose
    // -------
    // Both builders accept the default options.
    //
    // Given
    // -----
    // - `ProfileOptions::default()` and its L-BFGS variant.
    //
    // Expect
    // ------
    // - `Ok(_)` from both builders.
    fn builders_accept_default_options() {
        // Arrange
        let opts = ProfileOptions::default();
        let lbfgs_opts = ProfileOptions::default().with_method(ProfileMethod::Lbfgs);

        // Act & Assert
        assert!(build_nelder_mead(&array![0.0, 0.0], &opts).is_ok());
        assert!(build_lbfgs(&lbfgs_opts).is_ok());
    }
}
