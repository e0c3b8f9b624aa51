//! High-level entry point for minimizing a [`BoxObjective`] over a box.
//!
//! This validates the box, swaps an infeasible start for the best point of
//! a grid scan, maps the start point into logit space, selects
//! Nelder–Mead or L-BFGS from [`ProfileOptions::method`], and delegates the
//! run to [`run_solver`].
use crate::optimization::profile_optimizer::{
    adapter::BoxAdapter,
    builders::{build_lbfgs, build_nelder_mead},
    run::run_solver,
    scan::feasible_start,
    traits::{BoxObjective, ProfileMethod, ProfileOptions, ProfileOutcome},
    types::Theta,
    validation::validate_bounds,
};

/// Minimize `f` over the box `[lower, upper]` starting from `start`.
///
/// # Behavior
/// - Validates the box against `start` (finite, ordered, same dimension).
/// - If the objective is not finite at `start`, restarts from the best
///   finite point of a `scan_points`-per-axis grid over the box.
/// - Clamps `start` into the box interior through the logit map; a start
///   on the boundary is nudged inside by `LOGIT_EPS`.
/// - Runs the configured solver and maps the best point back into the box.
///
/// # Errors
/// - `F::Error::from(OptError::…)` for invalid boxes, argmin failures, or
///   a box in which the start and every scanned point are infeasible.
/// - Any error returned by `f.value` is propagated unchanged.
///
/// # Example
/// ```
/// use empirical_likelihood::optimization::errors::OptError;
/// use empirical_likelihood::optimization::profile_optimizer::{
///     minimize_in_box, BoxObjective, ProfileOptions, Theta,
/// };
/// use ndarray::array;
///
/// struct Bowl;
/// impl BoxObjective for Bowl {
///     type Error = OptError;
///     fn value(&self, x: &Theta) -> Result<f64, OptError> {
///         Ok((x[0] - 0.3).powi(2) + (x[1] + 0.2).powi(2))
///     }
/// }
///
/// let out = minimize_in_box(
///     &Bowl,
///     &array![0.0, 0.0],
///     &array![-1.0, -1.0],
///     &array![1.0, 1.0],
///     &ProfileOptions::default(),
/// )?;
/// assert!((out.x_hat[0] - 0.3).abs() < 1e-3);
/// # Ok::<(), OptError>(())
/// ```
pub fn minimize_in_box<F: BoxObjective>(
    f: &F, start: &Theta, lower: &Theta, upper: &Theta, opts: &ProfileOptions,
) -> Result<ProfileOutcome, F::Error> {
    validate_bounds(lower, upper, start).map_err(F::Error::from)?;
    let start = feasible_start(f, start, lower, upper, opts.scan_points)?;
    match opts.method {
        ProfileMethod::NelderMead => {
            let problem = BoxAdapter::new(f, lower, upper, false);
            let theta0 = problem.from_box(&start);
            let solver = build_nelder_mead(&theta0, opts).map_err(F::Error::from)?;
            run_solver(theta0, opts, problem, solver)
        }
        ProfileMethod::Lbfgs => {
            let problem = BoxAdapter::new(f, lower, upper, true);
            let theta0 = problem.from_box(&start);
            let solver = build_lbfgs(opts).map_err(F::Error::from)?;
            run_solver(theta0, opts, problem, solver)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptError;
    use crate::optimization::profile_optimizer::types::Cost;
    use ndarray::array;

    struct Bowl {
        center: Theta,
    }

    impl BoxObjective for Bowl {
        type Error = OptError;

        fn value(&self, x: &Theta) -> Result<Cost, OptError> {
            Ok((x - &self.center).mapv(|v| v * v).sum())
        }
    }

    /// Bowl that is infeasible whenever x[0] < 0.
    struct HalfBowl;

    impl BoxObjective for HalfBowl {
        type Error = OptError;

        fn value(&self, x: &Theta) -> Result<Cost, OptError> {
            if x[0] < 0.0 {
                return Ok(f64::INFINITY);
            }
            Ok((x[0] - 0.5).powi(2) + x[1] * x[1])
        }
    }

    #[test]
    // Purpose
    // -------
    // Nelder–Mead locates an interior minimum of a smooth bowl.
    //
    // Given
    // -----
    // - Bowl centered at (0.3, -0.2) on the box [-1, 1]², start at 0.
    //
    // Expect
    // ------
    // - `x_hat` within 1e-3 of the center and a near-zero cost.
    fn nelder_mead_finds_interior_minimum() {
        // Arrange
        let f = Bowl { center: array![0.3, -0.2] };
        let opts = ProfileOptions::default();

        // Act
        let out = minimize_in_box(
            &f,
            &array![0.0, 0.0],
            &array![-1.0, -1.0],
            &array![1.0, 1.0],
            &opts,
        )
        .unwrap();

        // Assert
        assert!((out.x_hat[0] - 0.3).abs() < 1e-3, "x_hat = {:?}", out.x_hat);
        assert!((out.x_hat[1] + 0.2).abs() < 1e-3, "x_hat = {:?}", out.x_hat);
        assert!(out.value < 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // When the unconstrained minimum lies outside the box, the result
    // stays inside the box and approaches the nearest face.
    //
    // Given
    // -----
    // - Bowl centered at (3, 0) on the box [-1, 1]².
    //
    // Expect
    // ------
    // - x_hat[0] in (0.99, 1].
    fn nelder_mead_respects_box_when_minimum_is_outside() {
        // Arrange
        let f = Bowl { center: array![3.0, 0.0] };

        // Act
        let out = minimize_in_box(
            &f,
            &array![0.0, 0.0],
            &array![-1.0, -1.0],
            &array![1.0, 1.0],
            &ProfileOptions::default(),
        )
        .unwrap();

        // Assert
        assert!(out.x_hat[0] <= 1.0 && out.x_hat[0] > 0.99, "x_hat = {:?}", out.x_hat);
    }

    #[test]
    // Purpose
    // -------
    // Infeasible regions marked with `+∞` are avoided by the simplex.
    //
    // Given
    // -----
    // - `HalfBowl` on [-1, 1]², start at (0.25, 0.25).
    //
    // Expect
    // ------
    // - Minimum near (0.5, 0) with a finite cost.
    fn nelder_mead_steps_around_infeasible_region() {
        // Act
        let out = minimize_in_box(
            &HalfBowl,
            &array![0.25, 0.25],
            &array![-1.0, -1.0],
            &array![1.0, 1.0],
            &ProfileOptions::default(),
        )
        .unwrap();

        // Assert
        assert!(out.value.is_finite());
        assert!((out.x_hat[0] - 0.5).abs() < 1e-3, "x_hat = {:?}", out.x_hat);
    }

    #[test]
    // Purpose
    // -------
    // The L-BFGS path minimizes a smooth bowl through finite-difference
    // gradients in logit space.
    //
    // Given
    // -----
    // - Bowl centered at (0.3, -0.2) on [-1, 1]², `ProfileMethod::Lbfgs`.
    //
    // Expect
    // ------
    // - `x_hat` within 1e-3 of the center.
    fn lbfgs_finds_interior_minimum() {
        // Arrange
        let f = Bowl { center: array![0.3, -0.2] };
        let opts = ProfileOptions::default().with_method(ProfileMethod::Lbfgs);

        // Act
        let out = minimize_in_box(
            &f,
            &array![0.0, 0.0],
            &array![-1.0, -1.0],
            &array![1.0, 1.0],
            &opts,
        )
        .unwrap();

        // Assert
        assert!((out.x_hat[0] - 0.3).abs() < 1e-3, "x_hat = {:?}", out.x_hat);
        assert!((out.x_hat[1] + 0.2).abs() < 1e-3, "x_hat = {:?}", out.x_hat);
    }

    #[test]
    // Purpose
    // -------
    // An invalid box is rejected before any solver runs.
    //
    // Given
    // -----
    // - lower = upper = [0, 0].
    //
    // Expect
    // ------
    // - `InvalidBounds { index: 0, .. }`.
    fn minimize_in_box_rejects_degenerate_box() {
        // Arrange
        let f = Bowl { center: array![0.0, 0.0] };

        // Act
        let err = minimize_in_box(
            &f,
            &array![0.0, 0.0],
            &array![0.0, 0.0],
            &array![0.0, 0.0],
            &ProfileOptions::default(),
        )
        .unwrap_err();

        // Assert
        assert!(matches!(err, OptError::InvalidBounds { index: 0, .. }), "Got {err:?}");
    }

    #[test]
    // Purpose
    // -------
    // A start inside an infeasible pocket would leave every simplex vertex
    // at `+∞`; the search must restart from a feasible grid point and
    // still reach the minimum.
    //
    // Given
    // -----
    // - `HalfBowl` on [-1, 1]², start (-0.5, 0.5) where the cost is `+∞`.
    //
    // Expect
    // ------
    // - Finite cost with x_hat near (0.5, 0).
    fn nelder_mead_restarts_from_feasible_grid_point() {
        // Act
        let out = minimize_in_box(
            &HalfBowl,
            &array![-0.5, 0.5],
            &array![-1.0, -1.0],
            &array![1.0, 1.0],
            &ProfileOptions::default(),
        )
        .unwrap();

        // Assert
        assert!(out.value.is_finite());
        assert!((out.x_hat[0] - 0.5).abs() < 1e-3, "x_hat = {:?}", out.x_hat);
        assert!(out.x_hat[1].abs() < 1e-3, "x_hat = {:?}", out.x_hat);
    }

    #[test]
    // Purpose
    // -------
    // With nothing feasible in the box the profiler fails instead of
    // returning a point.
    //
    // Given
    // -----
    // - `HalfBowl` on [-1, -0.5] × [-1, 1].
    //
    // Expect
    // ------
    // - `NonFiniteCost`.
    fn minimize_in_box_fails_on_fully_infeasible_box() {
        // Act
        let err = minimize_in_box(
            &HalfBowl,
            &array![-0.75, 0.0],
            &array![-1.0, -1.0],
            &array![-0.5, 1.0],
            &ProfileOptions::default(),
        )
        .unwrap_err();

        // Assert
        assert!(matches!(err, OptError::NonFiniteCost { .. }), "Got {err:?}");
    }
}
