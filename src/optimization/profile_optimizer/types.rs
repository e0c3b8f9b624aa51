//! profile_optimizer::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the numeric types and argmin solver aliases used when
//! profiling nuisance parameters inside a box. The rest of the profiler
//! refers to these names instead of spelling out `ndarray` and argmin
//! generics.
//!
//! Conventions
//! -----------
//! - `Theta` lives in the unconstrained (logit) space seen by the solver;
//!   box-space points use the same alias and are produced by the adapter.
//! - `Cost` is the quantity being minimized (a `-2 log R` statistic for
//!   the EL callers); lower is better.
use argmin::solver::{
    linesearch::MoreThuenteLineSearch, neldermead::NelderMead, quasinewton::LBFGS,
};
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector, either in box space or in the solver's logit space.
pub type Theta = Array1<f64>;

/// Gradient of the cost with respect to the logit-space parameters.
pub type Grad = Array1<f64>;

/// Scalar objective value; the profiler minimizes it.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps argmin's counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default history size (`m`) for L-BFGS runs.
pub const DEFAULT_LBFGS_MEM: usize = 7;

/// Default per-coordinate offset (in logit units) used to build the initial
/// Nelder–Mead simplex around the start point.
pub const DEFAULT_SIMPLEX_STEP: f64 = 0.5;

/// Default number of cell centers per axis scanned for a feasible start
/// when the given start is infeasible.
pub const DEFAULT_SCAN_POINTS: usize = 21;

/// More–Thuente line search specialized to this crate's numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// L-BFGS solver wired to the More–Thuente line search.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Theta, Grad, Cost>;

/// Gradient-free simplex solver over logit-space parameters.
pub type NelderMeadSolver = NelderMead<Theta, Cost>;
