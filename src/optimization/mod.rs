//! optimization — numeric engines behind the empirical-likelihood tests.
//!
//! Purpose
//! -------
//! Provide the numerical layer the statistical tests are built on: the
//! log-star Newton solver for EL multipliers, bracketed scalar searches,
//! box-constrained nuisance profiling, shared tolerances and transforms,
//! and a single error surface for all of them.
//!
//! Key behaviors
//! -------------
//! - `log_star`: modified Newton iteration for the Lagrange multipliers of
//!   an estimating-equation matrix, with explicit convergence, divergence,
//!   and iteration-cap outcomes.
//! - `scalar`: Brent root finding and bounded Brent minimization over
//!   closures that may fail with the caller's own error type.
//! - `profile_optimizer`: Nelder–Mead or L-BFGS minimization over a box
//!   through a logistic reparameterization.
//! - `numerical_stability`: tolerances, logistic maps, and the
//!   SVD-truncated least-squares solve.
//! - `errors`: [`OptError`](errors::OptError) and
//!   [`OptResult`](errors::OptResult).
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite once the statistical layer has validated them;
//!   numerical failures are reported as `OptError`, never as panics.
//! - Every iterative routine is capped.
//!
//! Conventions
//! -----------
//! - Argmin errors never leak: they are converted into `OptError` or back
//!   into the caller's error type by downcasting.
//! - Logging goes through the `log` facade at `debug`/`trace`; the crate
//!   never installs a logger.
//!
//! Downstream usage
//! ----------------
//! - `statistical_tests` builds constraint matrices, hands them to
//!   [`log_star::LogStarSolver`], and drives the outer searches with
//!   [`scalar`] and [`profile_optimizer`].
//! - Front-ends can import the curated surface via
//!   `optimization::prelude::*`.

pub mod errors;
pub mod log_star;
pub mod numerical_stability;
pub mod profile_optimizer;
pub mod scalar;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use empirical_likelihood::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::log_star::{LogStarSolver, NewtonOptions, NewtonOutcome};
    pub use super::numerical_stability::prelude::*;
    pub use super::profile_optimizer::prelude::*;
    pub use super::scalar::{MinimizeOptions, RootOptions, find_root, minimize_scalar};
}
