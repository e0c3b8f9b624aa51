//! numerical_stability — tolerances, guarded transforms, and stable solves.
//!
//! Purpose
//! -------
//! Collect the small numerical building blocks shared by the EL engine:
//! the default Newton tolerances, the logistic reparameterization used for
//! box-constrained nuisance searches, and the SVD-truncated least-squares
//! solve behind each log-star Newton step. Centralizing them keeps every
//! caller on the same thresholds.
//!
//! Key behaviors
//! -------------
//! - Export the default convergence (`NEWTON_TOL`) and divergence
//!   (`DIVERGENCE_BOUND`) thresholds for the multiplier iteration.
//! - Provide overflow-free logistic / logit helpers and the affine maps
//!   `to_bounded` / `to_unbounded` between a box `[lo, hi]` and ℝ.
//! - Solve `J Δ ≈ y` in the least-squares sense through a thin SVD of `J`
//!   with relative singular-value truncation (`lstsq_svd`), tolerating
//!   rank-deficient and badly scaled constraint matrices.
//!
//! Invariants & assumptions
//! ------------------------
//! - Shape agreement is the caller's responsibility. `lstsq_svd` maps
//!   non-finite inputs to a NaN step.
//! - `to_bounded` always returns a point of the closed box; `to_unbounded`
//!   always returns a finite real thanks to `LOGIT_EPS` clamping.
//!
//! Conventions
//! -----------
//! - Pure functions over `ndarray` views; no logging and no I/O.
//! - `nalgebra` is used only inside `lstsq_svd`; callers stay in
//!   `ndarray`.
//!
//! Testing notes
//! -------------
//! - Unit tests check logistic tails, inversion of the box maps, and the
//!   least-squares solve on full-rank, rank-deficient, zero and badly scaled
//!   designs.

pub mod linear_algebra;
pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::linear_algebra::lstsq_svd;
pub use self::transformations::{
    DIVERGENCE_BOUND, LOGIT_EPS, NEWTON_TOL, PINV_RCOND, safe_logistic, safe_logit, to_bounded,
    to_unbounded,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use empirical_likelihood::optimization::numerical_stability::prelude::*;
//
// to import the main numerical-stability surface in a single line.

pub mod prelude {
    pub use super::linear_algebra::lstsq_svd;
    pub use super::transformations::{
        DIVERGENCE_BOUND, NEWTON_TOL, PINV_RCOND, safe_logistic, safe_logit, to_bounded,
        to_unbounded,
    };
}
