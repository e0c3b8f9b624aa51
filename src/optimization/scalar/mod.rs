//! scalar — bracketed one-dimensional searches.
//!
//! Purpose
//! -------
//! Wrap argmin's Brent solvers behind two closure-friendly functions:
//! [`find_root`] for sign-changing brackets and [`minimize_scalar`] for
//! bounded minimization. The EL layer uses them for the mean test
//! multiplier, confidence-limit searches, and the variance test's
//! nuisance-mean profile.
//!
//! Conventions
//! -----------
//! - Objectives are `Fn(f64) -> Result<f64, E>` for any caller error type
//!   `E: From<OptError>`; objective errors come back unchanged.
//! - Every search is capped by an iteration limit from [`RootOptions`] or
//!   [`MinimizeOptions`].

pub mod minimize;
pub mod options;
pub mod root;

use argmin::core::{CostFunction, Error};
use std::marker::PhantomData;

pub use self::minimize::{ScalarMinimum, minimize_scalar};
pub use self::options::{MinimizeOptions, RootOptions};
pub use self::root::find_root;

/// Argmin problem over a borrowed scalar closure.
pub(crate) struct ScalarProblem<'a, F, E> {
    f: &'a F,
    _err: PhantomData<fn() -> E>,
}

impl<'a, F, E> ScalarProblem<'a, F, E> {
    pub(crate) fn new(f: &'a F) -> Self {
        Self { f, _err: PhantomData }
    }
}

impl<'a, F, E> CostFunction for ScalarProblem<'a, F, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        Ok((self.f)(*x)?)
    }
}
