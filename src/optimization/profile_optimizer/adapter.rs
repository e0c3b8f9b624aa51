//! Adapter that exposes a [`BoxObjective`] as an unconstrained argmin
//! problem.
//!
//! The solver works on `θ ∈ ℝᵈ`; each coordinate is mapped into its box
//! through `x_i = lo_i + (hi_i - lo_i) · σ(θ_i)` before the objective is
//! evaluated. Gradients (L-BFGS path only) are central finite differences
//! of that composed cost in θ-space.
use std::cell::RefCell;

use crate::optimization::{
    errors::OptError,
    numerical_stability::transformations::{to_bounded, to_unbounded},
    profile_optimizer::{
        traits::BoxObjective,
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
};
use argmin::core::{CostFunction, Error, Gradient};
use finitediff::FiniteDiff;

/// Bridges a [`BoxObjective`] to argmin's `CostFunction` and `Gradient`.
///
/// - `reject_non_finite = false` (Nelder–Mead): infeasible points keep an
///   infinite cost (NaN is promoted to `+∞`) so the simplex moves away.
/// - `reject_non_finite = true` (L-BFGS): any non-finite cost becomes
///   [`OptError::NonFiniteCost`], since line searches cannot use it.
#[derive(Debug, Clone)]
pub struct BoxAdapter<'a, F: BoxObjective> {
    pub f: &'a F,
    pub lower: &'a Theta,
    pub upper: &'a Theta,
    pub reject_non_finite: bool,
}

impl<'a, F: BoxObjective> BoxAdapter<'a, F> {
    /// Construct a new adapter over an objective and its box.
    pub fn new(f: &'a F, lower: &'a Theta, upper: &'a Theta, reject_non_finite: bool) -> Self {
        Self { f, lower, upper, reject_non_finite }
    }

    /// Map a solver-space point into the box.
    pub fn to_box(&self, theta: &Theta) -> Theta {
        let mut x = theta.clone();
        for (i, xi) in x.iter_mut().enumerate() {
            *xi = to_bounded(theta[i], self.lower[i], self.upper[i]);
        }
        x
    }

    /// Map a box point into solver space.
    pub fn from_box(&self, x: &Theta) -> Theta {
        let mut theta = x.clone();
        for (i, ti) in theta.iter_mut().enumerate() {
            *ti = to_unbounded(x[i], self.lower[i], self.upper[i]);
        }
        theta
    }
}

impl<'a, F: BoxObjective> CostFunction for BoxAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the objective at the box image of `θ`.
    ///
    /// # Errors
    /// Propagates the objective's own error unchanged, and returns
    /// `NonFiniteCost` in strict mode.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let x = self.to_box(theta);
        let value = self.f.value(&x)?;
        if value.is_finite() {
            return Ok(value);
        }
        if self.reject_non_finite {
            return Err(OptError::NonFiniteCost { value }.into());
        }
        Ok(f64::INFINITY)
    }
}

impl<'a, F: BoxObjective> Gradient for BoxAdapter<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Central-difference gradient of the cost in θ-space.
    ///
    /// The difference closure must return `f64`, so the first cost error is
    /// captured in `closure_err` and the closure returns `NaN`; the
    /// captured error is then raised. A non-finite gradient is retried
    /// once with forward differences before it is reported.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        let dim = theta.len();
        let closure_err: RefCell<Option<Error>> = RefCell::new(None);
        let cost_func = |theta: &Theta| -> f64 {
            match self.cost(theta) {
                Ok(val) => val,
                Err(e) => {
                    let mut slot = closure_err.borrow_mut();
                    if slot.is_none() {
                        *slot = Some(e);
                    }
                    f64::NAN
                }
            }
        };
        let fd_grad = theta.central_diff(&cost_func);
        if let Some(err) = closure_err.take() {
            return Err(err);
        }
        match validate_grad(&fd_grad, dim) {
            Ok(()) => Ok(fd_grad),
            Err(_) => {
                let fd_grad = theta.forward_diff(&cost_func);
                if let Some(err) = closure_err.take() {
                    return Err(err);
                }
                validate_grad(&fd_grad, dim)?;
                Ok(fd_grad)
            }
        }
    }
}
