//! Public API surface for box-constrained profiling.
//!
//! - [`BoxObjective`]: trait callers implement for the quantity to minimize.
//! - [`ProfileOptions`]: solver choice, tolerances, and iteration cap.
//! - [`ProfileMethod`]: Nelder–Mead (default) or L-BFGS.
//! - [`ProfileOutcome`]: normalized result returned by `minimize_in_box`.
//!
//! Convention: the objective is evaluated at box-space points only; the
//! logit reparameterization that makes the search unconstrained stays
//! inside the adapter.
use crate::optimization::{
    errors::{OptError, OptResult},
    profile_optimizer::{
        types::{
            Cost, DEFAULT_LBFGS_MEM, DEFAULT_SCAN_POINTS, DEFAULT_SIMPLEX_STEP, FnEvalMap, Theta,
        },
        validation::{validate_theta_hat, validate_value, verify_max_iter, verify_tol},
    },
};
use argmin::core::{TerminationReason, TerminationStatus};
use std::str::FromStr;

/// Objective minimized over a box.
///
/// - `type Error`: the caller's own error type. Errors raised by `value`
///   travel through argmin untouched and are handed back as-is; optimizer
///   failures are converted with `From<OptError>`.
///
/// Required:
/// - `value(&Theta) -> Result<Cost, Self::Error>`: evaluate the cost at a
///   point of the box. Returning `f64::INFINITY` marks the point as
///   infeasible; the gradient-free path steps away from it, the
///   gradient-based path reports [`OptError::NonFiniteCost`].
pub trait BoxObjective {
    type Error: From<OptError> + std::error::Error + Send + Sync + 'static;

    fn value(&self, x: &Theta) -> Result<Cost, Self::Error>;
}

/// Choice of solver used for the nuisance search.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"nelder-mead"`, `"lbfgs"`). Unknown names return
/// `OptError::InvalidProfileMethod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMethod {
    NelderMead,
    Lbfgs,
}

impl FromStr for ProfileMethod {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nelder-mead" | "neldermead" => Ok(ProfileMethod::NelderMead),
            "lbfgs" | "l-bfgs" => Ok(ProfileMethod::Lbfgs),
            _ => Err(OptError::InvalidProfileMethod { name: s.to_string() }),
        }
    }
}

/// Profiler configuration.
///
/// Fields:
/// - `method` — solver used for the search.
/// - `max_iter` — hard cap on solver iterations.
/// - `sd_tol` — Nelder–Mead stops once the standard deviation of the
///   simplex costs falls below this value.
/// - `tol_grad` — L-BFGS stops once the gradient norm falls below this value.
/// - `lbfgs_mem` — L-BFGS history size.
/// - `simplex_step` — logit-space offset used to build the initial simplex.
/// - `scan_points` — grid cells per axis scanned for a feasible start when
///   the given start is infeasible.
/// - `verbose` — if `true` and the `obs_slog` feature is enabled, attaches
///   argmin's slog terminal observer to every iteration. Ignored otherwise.
///
/// Default:
/// - `NelderMead`, `max_iter = 500`, `sd_tol = 1e-10`, `tol_grad = 1e-6`,
///   `lbfgs_mem = 7`, `simplex_step = 0.5`, `scan_points = 21`,
///   `verbose = false`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOptions {
    pub method: ProfileMethod,
    pub max_iter: usize,
    pub sd_tol: f64,
    pub tol_grad: f64,
    pub lbfgs_mem: usize,
    pub simplex_step: f64,
    pub scan_points: usize,
    pub verbose: bool,
}

impl ProfileOptions {
    /// Construct validated profiler options.
    ///
    /// # Errors
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    /// - [`OptError::InvalidTolerance`] if `sd_tol`, `tol_grad`, or
    ///   `simplex_step` is non-finite or non-positive.
    /// - [`OptError::InvalidLBFGSMem`] if `lbfgs_mem == 0`.
    pub fn new(
        method: ProfileMethod, max_iter: usize, sd_tol: f64, tol_grad: f64, lbfgs_mem: usize,
        simplex_step: f64,
    ) -> OptResult<Self> {
        verify_max_iter(max_iter)?;
        verify_tol("simplex sd", sd_tol)?;
        verify_tol("gradient", tol_grad)?;
        verify_tol("simplex step", simplex_step)?;
        if lbfgs_mem == 0 {
            return Err(OptError::InvalidLBFGSMem { mem: lbfgs_mem });
        }
        Ok(Self {
            method,
            max_iter,
            sd_tol,
            tol_grad,
            lbfgs_mem,
            simplex_step,
            scan_points: DEFAULT_SCAN_POINTS,
            verbose: false,
        })
    }

    /// Same options with a different solver.
    pub fn with_method(mut self, method: ProfileMethod) -> Self {
        self.method = method;
        self
    }

    /// Same options with a different feasible-start grid.
    ///
    /// # Errors
    /// - [`OptError::InvalidScanPoints`] if `scan_points == 0`.
    pub fn with_scan_points(mut self, scan_points: usize) -> OptResult<Self> {
        if scan_points == 0 {
            return Err(OptError::InvalidScanPoints { points: scan_points, dim: 0 });
        }
        self.scan_points = scan_points;
        Ok(self)
    }

    /// Same options with per-iteration terminal logging switched on or off.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            method: ProfileMethod::NelderMead,
            max_iter: 500,
            sd_tol: 1e-10,
            tol_grad: 1e-6,
            lbfgs_mem: DEFAULT_LBFGS_MEM,
            simplex_step: DEFAULT_SIMPLEX_STEP,
            scan_points: DEFAULT_SCAN_POINTS,
            verbose: false,
        }
    }
}

/// Canonical result returned by `minimize_in_box`.
///
/// - `x_hat`: best point found, in box space.
/// - `value`: objective at `x_hat` (always finite).
/// - `converged`: `true` when the solver stopped on its own criterion
///   rather than on the iteration cap.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of solver iterations performed.
/// - `fn_evals`: function-evaluation counters reported by argmin.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOutcome {
    pub x_hat: Theta,
    pub value: Cost,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
}

impl ProfileOutcome {
    /// Build a validated [`ProfileOutcome`] from raw solver state.
    ///
    /// `x_hat_opt` must already be mapped back into box space.
    ///
    /// # Errors
    /// - Propagates validation errors for `x_hat` or `value`; an infinite
    ///   best cost means every visited point was infeasible.
    pub fn new(
        x_hat_opt: Option<Theta>, value: Cost, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap,
    ) -> OptResult<Self> {
        let x_hat = validate_theta_hat(x_hat_opt)?;
        validate_value(value)?;
        let status = format!("{termination:?}");
        let converged = matches!(
            termination,
            TerminationStatus::Terminated(TerminationReason::SolverConverged)
                | TerminationStatus::Terminated(TerminationReason::TargetCostReached)
        );
        Ok(Self { x_hat, value, converged, status, iterations: iterations as usize, fn_evals })
    }
}
