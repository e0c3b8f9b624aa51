//! statistical_tests::core — building blocks shared by every EL routine.
//!
//! Purpose
//! -------
//! Hold the value objects the boundary searches are assembled from: the
//! validated [`Sample`], the [`Hypothesis`] → [`Constraints`] builder, the
//! likelihood-ratio evaluator with its χ² calibration, option structs, and
//! the caller-facing result types.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every value here is immutable once built; a solve never mutates the
//!   sample or the constraints it was given.
//! - Constraint matrices are rebuilt for every nuisance value tried.
//!
//! Downstream usage
//! ----------------
//! - `moments` builds constraints, calls [`likelihood::evaluate`], and wraps
//!   the result in [`HypothesisTest`] or [`ConfidenceInterval`].

pub mod estimating;
pub mod likelihood;
pub mod options;
pub mod outcome;
pub mod sample;

pub use self::estimating::{Constraints, Hypothesis};
pub use self::likelihood::{SolveResult, critical_value, evaluate, p_value};
pub use self::options::{CiMethod, ELOptions, MeanCiOptions, NuisanceOptions, VarCiBounds};
pub use self::outcome::{ConfidenceInterval, HypothesisTest};
pub use self::sample::Sample;
