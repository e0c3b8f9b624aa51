//! statistical_tests::moments — EL tests and intervals per moment.
//!
//! Purpose
//! -------
//! Turn the core solve into answers: hypothesis tests and confidence
//! intervals for the mean and variance, profiled tests for skewness and
//! kurtosis, and the multivariate mean test.
//!
//! Key behaviors
//! -------------
//! - `mean`: closed-form multiplier root for the test; nested Brent, dual
//!   `γ` or bisection search for the interval.
//! - `variance`: bounded Brent search over the nuisance mean; Brent roots
//!   on either side of the sample variance for the interval.
//! - `shape`: box-constrained profiling of `(μ, σ²)` for skewness and
//!   kurtosis.
//! - `multivariate`: a single Newton solve with `d` degrees of freedom.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every function is stateless: the sample is borrowed, options are
//!   passed explicitly, and nothing is cached between calls.
//! - Nuisance values whose inner solve diverges are infeasible (`+∞`)
//!   inside searches; a search with no feasible value fails with
//!   `DivergedOptimization`.

pub mod mean;
pub mod multivariate;
pub mod shape;
pub mod variance;

pub use self::mean::{ci_mean, hy_test_mean};
pub use self::multivariate::mv_hy_test_mean;
pub use self::shape::{ShapeMoment, hy_test_kurt, hy_test_skew, opt_kurt, opt_skew};
pub use self::variance::{ci_var, hy_test_var, opt_var};
