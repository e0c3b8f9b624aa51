//! log_star — Newton solver for empirical-likelihood Lagrange multipliers.
//!
//! Purpose
//! -------
//! Given an `n×k` matrix of estimating equations `g`, find the multipliers
//! `η` that maximize `Σ log*(1 + η·g_i)`, where `log*` is Owen's
//! pseudo-logarithm (`log` above `1/n`, its quadratic continuation below).
//! The implied EL weights are `w_i = (1/n) / (1 + η·g_i)`.
//!
//! Key behaviors
//! -------------
//! - Seed `η = (1/n, …, 1/n)` unless the caller supplies a seed.
//! - Repeat the modified Newton step `η ← η + J⁺ y` until `Σ|Δη| < tol`.
//! - Stop with an error, never a clamped answer, when a component leaves
//!   `[-bound, bound]` (origin outside the convex hull of the rows) or the
//!   iteration cap is reached.
//!
//! Invariants & assumptions
//! ------------------------
//! - `g` is finite; the statistical layer validates samples and hypothesis
//!   values before building it.
//! - The solver is stateless apart from its [`NewtonOptions`]; every call
//!   allocates its own multipliers.
//!
//! Conventions
//! -----------
//! - Per-step detail is logged at `trace`, divergence at `debug`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the `log*` derivative branches, the weighted system
//!   at `η = 0`, convergence on centered data, the first-order condition,
//!   divergence outside the hull, and option validation.

pub mod derivatives;
pub mod newton;
pub mod options;

pub use self::newton::{LogStarSolver, NewtonOutcome};
pub use self::options::NewtonOptions;
