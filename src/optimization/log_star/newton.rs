//! Modified Newton iteration for the log-star dual problem.
//!
//! Each step solves `J Δ ≈ y` (see [`super::derivatives`]) in the least
//! squares sense through the SVD-truncated pseudo-inverse and updates
//! `η ← η + Δ`. The loop is a three-state machine:
//!
//! - *Iterate* while `Σ|Δ| ≥ tol`;
//! - *Converged* once `Σ|Δ| < tol`;
//! - *Diverged* as soon as any `|η_j|` exceeds the bound or a step is
//!   non-finite. Multipliers are never clamped.
//!
//! The iteration runs on `g̃ = g / s` with `s_j` the root mean square of
//! column `j`. The weights only depend on `η·g_i`, so the multipliers
//! of `g` are recovered as `η_j = η̃_j / s_j` and the answer does not depend
//! on the units of the data. Seed, tolerance and divergence bound all live
//! in the normalized coordinates.
use crate::optimization::{
    errors::{OptError, OptResult},
    log_star::{derivatives::newton_system, options::NewtonOptions},
    numerical_stability::linear_algebra::lstsq_svd,
};
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

/// Converged multipliers plus iteration diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonOutcome {
    /// Lagrange multipliers `η`, one per constraint column.
    pub eta: Array1<f64>,
    /// Number of Newton steps taken.
    pub iterations: usize,
    /// `Σ|Δη|` of the final step, in the normalized coordinates.
    pub last_change: f64,
}

/// Stateless log-star Newton solver.
///
/// Holds only its [`NewtonOptions`]; every call to [`LogStarSolver::solve`]
/// starts from scratch, so a solver can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogStarSolver {
    pub opts: NewtonOptions,
}

impl LogStarSolver {
    pub fn new(opts: NewtonOptions) -> Self {
        Self { opts }
    }

    /// Solve for the multipliers of constraint matrix `g` (`n×k`).
    ///
    /// Parameters
    /// ----------
    /// - `g`: `ArrayView2<f64>`
    ///   Estimating equations, one row per observation.
    /// - `seed`: `Option<ArrayView1<f64>>`
    ///   Starting multipliers for `g`; defaults to `(1/n, …, 1/n)` in the
    ///   normalized coordinates.
    ///
    /// Returns
    /// -------
    /// `OptResult<NewtonOutcome>`
    ///
    /// Errors
    /// ------
    /// - `OptError::EmptyConstraints` if `g` has no rows or no columns.
    /// - `OptError::SeedDimMismatch` if `seed.len() != k`.
    /// - `OptError::NewtonDiverged` if a multiplier leaves
    ///   `[-bound, bound]` or becomes non-finite.
    /// - `OptError::NewtonNotConverged` after `max_iter` steps.
    /// - `OptError::BackendError` if a step's SVD fails.
    ///
    /// Notes
    /// -----
    /// - Divergence is the expected outcome when the origin lies outside
    ///   the convex hull of the rows of `g`: the dual objective then grows
    ///   without bound and `η` runs off to infinity.
    pub fn solve(
        &self, g: ArrayView2<f64>, seed: Option<ArrayView1<f64>>,
    ) -> OptResult<NewtonOutcome> {
        let (n, k) = g.dim();
        if n == 0 || k == 0 {
            return Err(OptError::EmptyConstraints { rows: n, cols: k });
        }
        let scales = column_scales(g);
        let g_scaled = &g / &scales;
        let mut eta = match seed {
            Some(s) if s.len() != k => {
                return Err(OptError::SeedDimMismatch { expected: k, found: s.len() });
            }
            Some(s) => &s * &scales,
            None => Array1::from_elem(k, 1.0 / n as f64),
        };

        let mut last_change = f64::INFINITY;
        for iteration in 1..=self.opts.max_iter {
            let (j, y) = newton_system(g_scaled.view(), eta.view());
            let step = lstsq_svd(j.view(), y.view())?;
            eta += &step;
            last_change = step.iter().map(|d| d.abs()).sum();
            log::trace!("log-star Newton step {iteration}: eta = {eta}, change = {last_change}");

            if let Some((index, &value)) = eta
                .iter()
                .enumerate()
                .find(|(_, v)| !v.is_finite() || v.abs() > self.opts.divergence_bound)
            {
                log::debug!("log-star Newton diverged at step {iteration}: eta[{index}] = {value}");
                return Err(OptError::NewtonDiverged {
                    iteration,
                    index,
                    value,
                    bound: self.opts.divergence_bound,
                });
            }
            if last_change < self.opts.tol {
                let eta = eta / &scales;
                return Ok(NewtonOutcome { eta, iterations: iteration, last_change });
            }
        }
        Err(OptError::NewtonNotConverged { max_iter: self.opts.max_iter, last_change })
    }
}

// ---- Helper methods ----

/// Root mean square of each column; zero or non-finite columns keep scale 1.
fn column_scales(g: ArrayView2<f64>) -> Array1<f64> {
    g.map_axis(Axis(0), |col| {
        let rms = (col.iter().map(|v| v * v).sum::<f64>() / col.len() as f64).sqrt();
        if rms.is_finite() && rms > 0.0 { rms } else { 1.0 }
    })
}
