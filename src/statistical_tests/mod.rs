//! statistical_tests — empirical-likelihood inference for sample moments.
//!
//! Purpose
//! -------
//! Provide EL hypothesis tests and confidence intervals for the mean,
//! variance, skewness and kurtosis of a univariate sample, the mean test of
//! a multivariate sample, and grid diagnostics built on them. The numeric
//! work (log-star Newton, Brent searches, box profiling) lives in
//! [`crate::optimization`]; this subtree builds estimating equations,
//! drives those engines, and calibrates the statistic against χ².
//!
//! Key behaviors
//! -------------
//! - [`core`]: `Sample`, `Hypothesis` → `Constraints`, the likelihood-ratio
//!   evaluator, options, and result types.
//! - [`moments`]: `hy_test_mean`, `ci_mean`, `hy_test_var`, `ci_var`,
//!   `hy_test_skew`, `hy_test_kurt`, `mv_hy_test_mean`.
//! - [`diagnostics`]: p-value curves and contour grids.
//! - [`desc_stat::DescStat`]: owning facade over all of the above.
//! - [`errors`] and [`validation`]: the shared error surface and input
//!   guards.
//!
//! Invariants & assumptions
//! ------------------------
//! - Samples are validated once, at construction of [`core::Sample`].
//! - Every routine returns [`ELResult`]; user-facing invalid inputs never
//!   panic.
//! - A failed solve yields no statistic; there are no partial results.
//!
//! Conventions
//! -----------
//! - `llr` is `−2 log` of the likelihood ratio; p-values are upper-tail χ²
//!   probabilities with one degree of freedom, or `d` for the multivariate
//!   mean.
//! - Variances use the `1/n` divisor throughout.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use empirical_likelihood::statistical_tests::{DescStat, ELResult, MeanCiOptions};
//!
//! fn run() -> ELResult<()> {
//!     let ds = DescStat::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0])?;
//!     let test = ds.hy_test_mean(3.0)?;
//!     assert!(test.llr.abs() < 1e-10);
//!     let ci = ds.ci_mean(0.05, &MeanCiOptions::default())?;
//!     assert!(ci.lower < 3.0 && 3.0 < ci.upper);
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! Testing notes
//! -------------
//! - Each module carries unit tests; `tests/` exercises the full pipeline
//!   on seeded synthetic samples.

pub mod core;
pub mod desc_stat;
pub mod diagnostics;
pub mod errors;
pub mod moments;
pub mod validation;

pub use self::core::{
    CiMethod, ConfidenceInterval, ELOptions, HypothesisTest, MeanCiOptions, NuisanceOptions,
    Sample, VarCiBounds,
};
pub use self::desc_stat::DescStat;
pub use self::diagnostics::{ContourGrid, GridAxis, PValueCurve};
pub use self::errors::{ELError, ELResult};
