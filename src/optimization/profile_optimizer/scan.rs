//! Feasible starting point for the box profiler.
//!
//! A Nelder–Mead simplex built around an infeasible start sees `+∞` at
//! every vertex and never moves. Before the search runs, an infeasible
//! start is replaced by the best finite point of a cell-centered grid over
//! the box. Cell centers stay off the box faces, where the logit map is
//! saturated and simplex steps barely move the box image.
use crate::optimization::{
    errors::OptError,
    profile_optimizer::{
        traits::BoxObjective,
        types::{Cost, Theta},
    },
};

/// Return `start` if the objective is finite there, otherwise the best
/// finite point of a `points^d` cell-centered grid over `[lower, upper]`.
///
/// Parameters
/// ----------
/// - `f`: objective; `+∞` (or any non-finite value) marks infeasibility.
/// - `start`: candidate start in box space; evaluated after clamping into
///   the box.
/// - `lower`, `upper`: validated box of dimension `d`.
/// - `points`: grid cells per axis.
///
/// Errors
/// ------
/// - `OptError::InvalidScanPoints` if `points == 0` or the grid size
///   overflows `usize`.
/// - `OptError::NonFiniteCost` if the start and every grid point are
///   infeasible.
/// - Any error returned by `f.value` is propagated unchanged.
pub fn feasible_start<F: BoxObjective>(
    f: &F, start: &Theta, lower: &Theta, upper: &Theta, points: usize,
) -> Result<Theta, F::Error> {
    let clamped = clamp_into(start, lower, upper);
    let at_start = f.value(&clamped)?;
    if at_start.is_finite() {
        return Ok(start.clone());
    }

    let dim = lower.len();
    let total = u32::try_from(dim)
        .ok()
        .and_then(|d| points.checked_pow(d))
        .filter(|_| points > 0)
        .ok_or(OptError::InvalidScanPoints { points, dim })?;

    let mut best: Option<(Theta, Cost)> = None;
    let mut point = lower.clone();
    for flat in 0..total {
        let mut rest = flat;
        for i in 0..dim {
            let cell = rest % points;
            rest /= points;
            let frac = (cell as f64 + 0.5) / points as f64;
            point[i] = lower[i] + frac * (upper[i] - lower[i]);
        }
        let value = f.value(&point)?;
        if value.is_finite() && best.as_ref().map_or(true, |(_, b)| value < *b) {
            best = Some((point.clone(), value));
        }
    }

    match best {
        Some((x, value)) => {
            log::debug!("infeasible start {start}; best of {total} grid points is {x} ({value})");
            Ok(x)
        }
        None => {
            log::debug!("infeasible start {start}; all {total} scanned points infeasible");
            Err(OptError::NonFiniteCost { value: at_start }.into())
        }
    }
}

fn clamp_into(x: &Theta, lower: &Theta, upper: &Theta) -> Theta {
    let mut out = x.clone();
    for (i, xi) in out.iter_mut().enumerate() {
        *xi = xi.clamp(lower[i], upper[i]);
    }
    out
}
