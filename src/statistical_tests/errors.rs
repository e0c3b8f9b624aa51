//! statistical_tests::errors — caller-facing errors for EL tests and intervals.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias returned by every
//! empirical-likelihood routine, together with the conversion from the
//! numeric layer's [`OptError`] and, behind `python-bindings`, the bridge to
//! Python exceptions.
//!
//! Key behaviors
//! -------------
//! - Define [`ELResult`] and [`ELError`] as the canonical result and error
//!   types for hypothesis tests, confidence intervals, and diagnostics.
//! - Attach human-readable `Display` messages that embed the offending
//!   values so failures are diagnosable without further context.
//! - Map [`OptError`] into the caller-facing kinds: Newton divergence and
//!   all-infeasible nuisance searches become
//!   [`ELError::DivergedOptimization`], iteration caps become
//!   [`ELError::NotConverged`], bracket failures keep their endpoints.
//!
//! Invariants & assumptions
//! ------------------------
//! - No routine returns a partial result alongside an error; a failed solve
//!   yields no statistic.
//! - `ELError` values are small and cheap to clone.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of the statistical constraint that was
//!   violated ("significance must lie in (0, 1)") rather than solver
//!   internals.
//! - `InvalidBracket` carries the name of the search it came from; callers
//!   relabel generic root-search failures with [`ELError::in_search`].
//! - PyO3 conversion always uses `PyValueError`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover payload embedding in `Display` and the `OptError`
//!   mapping. The `PyErr` conversion is left to Python-level tests.

use crate::optimization::errors::OptError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type ELResult<T> = Result<T, ELError>;

/// ELError — error conditions for empirical-likelihood inference.
///
/// Variants
/// --------
/// - Input validation: `InsufficientData`, `InvalidData`,
///   `DimensionMismatch`, `InvalidSignificance`, `InvalidHypothesis`,
///   `NonPositiveVariance`, `InvalidGrid`, `InvalidOption`.
/// - Search failures: `InvalidBracket` (no sign change at the endpoints of
///   the named search), `DivergedOptimization` (hypothesized value outside
///   the empirical support), `NotConverged` (an iteration cap was hit).
/// - Numerical failures: `NonFiniteStatistic` (a weight denominator was
///   non-positive), `Distribution` (χ² construction), `Optimizer`
///   (anything else from the numeric backend).
#[derive(Debug, Clone, PartialEq)]
pub enum ELError {
    //------ Input validation ------
    InsufficientData {
        nobs: usize,
    },
    InvalidData {
        row: usize,
        col: usize,
        value: f64,
    },
    DimensionMismatch {
        expected: usize,
        found: usize,
    },
    InvalidSignificance {
        sig: f64,
    },
    InvalidHypothesis {
        name: &'static str,
        value: f64,
    },
    NonPositiveVariance {
        value: f64,
    },
    InvalidGrid {
        reason: String,
    },
    InvalidOption {
        name: String,
        reason: String,
    },

    //------ Searches ------
    InvalidBracket {
        search: &'static str,
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },
    DivergedOptimization {
        iterations: usize,
        value: f64,
    },
    NotConverged {
        search: &'static str,
        iterations: usize,
    },

    //------ Numerical ------
    NonFiniteStatistic {
        index: usize,
        denom: f64,
    },
    Distribution {
        text: String,
    },
    Optimizer {
        text: String,
    },
}

impl ELError {
    /// Relabel an `InvalidBracket` with the name of the search that raised
    /// it. Other variants pass through unchanged.
    pub fn in_search(self, search: &'static str) -> Self {
        match self {
            ELError::InvalidBracket { lower, upper, f_lower, f_upper, .. } => {
                ELError::InvalidBracket { search, lower, upper, f_lower, f_upper }
            }
            ELError::NotConverged { iterations, .. } => {
                ELError::NotConverged { search, iterations }
            }
            other => other,
        }
    }
}

impl std::error::Error for ELError {}

impl std::fmt::Display for ELError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ELError::InsufficientData { nobs } => {
                write!(f, "Need at least 2 observations, got {nobs}.")
            }
            ELError::InvalidData { row, col, value } => {
                write!(f, "Invalid data value {value} at ({row}, {col}). Must be a finite number.")
            }
            ELError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {expected}, found {found}.")
            }
            ELError::InvalidSignificance { sig } => {
                write!(f, "Invalid significance level {sig}. Must lie in (0, 1).")
            }
            ELError::InvalidHypothesis { name, value } => {
                write!(f, "Invalid hypothesized {name}: {value}. Must be a finite number.")
            }
            ELError::NonPositiveVariance { value } => {
                write!(f, "Variance must be strictly positive, got {value}.")
            }
            ELError::InvalidGrid { reason } => write!(f, "Invalid evaluation grid: {reason}"),
            ELError::InvalidOption { name, reason } => {
                write!(f, "Invalid option '{name}': {reason}")
            }
            ELError::InvalidBracket { search, lower, upper, f_lower, f_upper } => write!(
                f,
                "{search}: endpoints [{lower}, {upper}] do not bracket a root \
                 (f = {f_lower}, {f_upper}); widen the search bounds."
            ),
            ELError::DivergedOptimization { iterations, value } => write!(
                f,
                "Optimization diverged after {iterations} iterations (multiplier {value}); \
                 the hypothesized value is not supported by the data."
            ),
            ELError::NotConverged { search, iterations } => {
                write!(f, "{search} did not converge within {iterations} iterations.")
            }
            ELError::NonFiniteStatistic { index, denom } => write!(
                f,
                "Non-finite likelihood ratio: weight denominator {denom} at observation {index}."
            ),
            ELError::Distribution { text } => write!(f, "Chi-squared distribution error: {text}"),
            ELError::Optimizer { text } => write!(f, "Optimizer error: {text}"),
        }
    }
}

impl From<OptError> for ELError {
    fn from(err: OptError) -> Self {
        match err {
            OptError::NewtonDiverged { iteration, value, .. } => {
                ELError::DivergedOptimization { iterations: iteration, value }
            }
            OptError::NonFiniteCost { value } => {
                ELError::DivergedOptimization { iterations: 0, value }
            }
            OptError::NewtonNotConverged { max_iter, .. } => {
                ELError::NotConverged { search: "log-star Newton", iterations: max_iter }
            }
            OptError::SearchNotConverged { max_iter } => {
                ELError::NotConverged { search: "root search", iterations: max_iter }
            }
            OptError::InvalidBracket { lower, upper, f_lower, f_upper } => {
                ELError::InvalidBracket { search: "root search", lower, upper, f_lower, f_upper }
            }
            e @ (OptError::InvalidTolerance { .. }
            | OptError::InvalidMaxIter { .. }
            | OptError::InvalidLBFGSMem { .. }
            | OptError::InvalidScanPoints { .. }
            | OptError::InvalidProfileMethod { .. }
            | OptError::InvalidBounds { .. }
            | OptError::BoundsDimMismatch { .. }
            | OptError::InvalidInterval { .. }) => {
                ELError::InvalidOption { name: "optimizer".to_string(), reason: e.to_string() }
            }
            other => ELError::Optimizer { text: other.to_string() },
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ELError> for PyErr {
    fn from(err: ELError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
