//! profile_optimizer — argmin-powered minimization over a box.
//!
//! Purpose
//! -------
//! Profile nuisance parameters out of an EL statistic: minimize a scalar
//! objective over a rectangular box `[lower, upper] ⊂ ℝᵈ`. Callers
//! implement [`BoxObjective`] and invoke [`minimize_in_box`]; the box is
//! handled by a logistic reparameterization so that argmin's unconstrained
//! solvers can be used unchanged.
//!
//! Key behaviors
//! -------------
//! - Map each coordinate through `x = lo + (hi - lo) · σ(θ)` via
//!   [`adapter::BoxAdapter`], so every evaluated point lies in the box.
//! - Run either a gradient-free Nelder–Mead simplex (default) or L-BFGS
//!   with a More–Thuente line search and central finite-difference
//!   gradients, chosen by [`ProfileMethod`].
//! - Replace an infeasible start with the best point of a cell-centered
//!   grid over the box ([`scan::feasible_start`]), so the simplex starts
//!   where the objective is finite.
//! - Normalize results into a [`ProfileOutcome`] whose `x_hat` is back in
//!   box space.
//!
//! Invariants & assumptions
//! ------------------------
//! - An objective value of `+∞` marks an infeasible point (for EL: a
//!   nuisance value whose inner multiplier solve diverges). Nelder–Mead
//!   moves away from such points; L-BFGS cannot and reports
//!   `OptError::NonFiniteCost`.
//! - A search whose start and scanned grid are all infeasible, or whose
//!   best cost is still infinite, fails; no partial result is returned.
//! - The objective's own error type passes through argmin untouched and is
//!   recovered by downcasting in [`run::recover_error`].
//!
//! Conventions
//! -----------
//! - Lower cost is better; there is no sign flip anywhere in this module.
//! - Options are validated on construction ([`ProfileOptions::new`]).
//! - Progress is reported with `log::debug!` once per search. With the
//!   `obs_slog` feature and `ProfileOptions::verbose`, argmin's slog
//!   observer also prints every iteration to the terminal.
//!
//! Downstream usage
//! ----------------
//! - The skewness and kurtosis tests implement [`BoxObjective`] for the
//!   `(μ, σ²)` nuisance profile and call [`minimize_in_box`] with a box
//!   built from the mean and variance confidence intervals.
//!
//! Testing notes
//! -------------
//! - Unit tests cover option parsing and validation, the box maps, the
//!   lenient/strict handling of infeasible points, simplex construction,
//!   the feasible-start scan, and end-to-end minimization of toy bowls
//!   with both solvers.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod scan;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize_in_box;
pub use self::traits::{BoxObjective, ProfileMethod, ProfileOptions, ProfileOutcome};
pub use self::scan::feasible_start;
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, DEFAULT_SCAN_POINTS, FnEvalMap, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::api::minimize_in_box;
    pub use super::traits::{BoxObjective, ProfileMethod, ProfileOptions, ProfileOutcome};
    pub use super::types::{Cost, Theta};
}
