//! optimization::errors — unified error surface for the numeric engines.
//!
//! Purpose
//! -------
//! Collect every failure the numeric layer can raise (log-star Newton
//! solves, Brent root / minimum searches, box-constrained profiling, option
//! validation, and argmin backend errors) into one enum, [`OptError`], with
//! the result alias [`OptResult`].
//!
//! Conventions
//! -----------
//! - Variants carry the offending numbers so that the statistical layer can
//!   re-wrap them with more context (which search, which bound).
//! - Argmin's `anyhow`-style errors are normalized through
//!   `From<argmin::core::Error>`: an [`OptError`] raised inside a cost
//!   function is recovered by downcasting, argmin's own error kinds map to
//!   dedicated variants, and anything else becomes [`OptError::BackendError`].
use argmin::core::{ArgminError, Error};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Log-star Newton ----
    /// A multiplier component left `[-bound, bound]` or became non-finite.
    NewtonDiverged {
        iteration: usize,
        index: usize,
        value: f64,
        bound: f64,
    },
    /// The iteration cap was hit before `Σ|Δη|` fell below the tolerance.
    NewtonNotConverged {
        max_iter: usize,
        last_change: f64,
    },
    /// The constraint matrix has no rows or no columns.
    EmptyConstraints {
        rows: usize,
        cols: usize,
    },
    /// The multiplier seed length does not match the number of constraints.
    SeedDimMismatch {
        expected: usize,
        found: usize,
    },

    // ---- Scalar searches ----
    /// The objective has the same sign at both ends of a root bracket.
    InvalidBracket {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },
    /// Search interval is empty, reversed or non-finite.
    InvalidInterval {
        lower: f64,
        upper: f64,
    },
    /// A bracketed search stopped on its iteration cap.
    SearchNotConverged {
        max_iter: usize,
    },

    // ---- Profiling ----
    /// Box bound `index` is non-finite or has `lower >= upper`.
    InvalidBounds {
        index: usize,
        lower: f64,
        upper: f64,
    },
    /// Start point and box dimensions disagree.
    BoundsDimMismatch {
        expected: usize,
        found: usize,
    },
    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },
    /// Gradient elements need to be finite.
    InvalidGradient {
        index: usize,
        value: f64,
    },
    /// Objective returned a non-finite value where a finite one is required.
    NonFiniteCost {
        value: f64,
    },
    /// Estimated parameters must be present and finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
    },
    /// Theta hat is missing
    MissingThetaHat,

    // ---- Options ----
    /// A tolerance must be finite and strictly positive.
    InvalidTolerance {
        name: &'static str,
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// lbfgs_mem needs to be at least 1.
    InvalidLBFGSMem {
        mem: usize,
    },
    /// The feasible-start grid needs at least one point per axis and must
    /// fit in memory.
    InvalidScanPoints {
        points: usize,
        dim: usize,
    },
    /// Unknown profile-optimizer name.
    InvalidProfileMethod {
        name: String,
    },

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Log-star Newton ----
            OptError::NewtonDiverged { iteration, index, value, bound } => write!(
                f,
                "Newton iteration diverged at step {iteration}: eta[{index}] = {value} \
                 exceeds the bound ±{bound}"
            ),
            OptError::NewtonNotConverged { max_iter, last_change } => write!(
                f,
                "Newton iteration did not converge in {max_iter} steps (last change {last_change})"
            ),
            OptError::EmptyConstraints { rows, cols } => {
                write!(f, "Constraint matrix must be non-empty, got {rows}x{cols}")
            }
            OptError::SeedDimMismatch { expected, found } => {
                write!(f, "Multiplier seed length mismatch: expected {expected}, found {found}")
            }

            // ---- Scalar searches ----
            OptError::InvalidBracket { lower, upper, f_lower, f_upper } => write!(
                f,
                "Bracket [{lower}, {upper}] does not contain a sign change \
                 (f(lower) = {f_lower}, f(upper) = {f_upper})"
            ),
            OptError::InvalidInterval { lower, upper } => {
                write!(f, "Invalid search interval [{lower}, {upper}]")
            }
            OptError::SearchNotConverged { max_iter } => {
                write!(f, "Search did not converge in {max_iter} iterations")
            }

            // ---- Profiling ----
            OptError::InvalidBounds { index, lower, upper } => {
                write!(f, "Invalid bounds for parameter {index}: [{lower}, {upper}]")
            }
            OptError::BoundsDimMismatch { expected, found } => {
                write!(f, "Bounds dimension mismatch: expected {expected}, found {found}")
            }
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value } => {
                write!(f, "Invalid gradient at index {index}: {value}, must be finite")
            }
            OptError::NonFiniteCost { value } => write!(f, "Non-finite cost value: {value}"),
            OptError::InvalidThetaHat { index, value } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}")
            }
            OptError::MissingThetaHat => write!(f, "Missing estimated parameters (theta hat)"),

            // ---- Options ----
            OptError::InvalidTolerance { name, tol, reason } => {
                write!(f, "Invalid {name} tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::InvalidLBFGSMem { mem } => {
                write!(f, "Invalid L-BFGS memory {mem}: must be greater than zero")
            }
            OptError::InvalidScanPoints { points, dim } => write!(
                f,
                "Invalid feasible-start grid of {points} points per axis in {dim} dimensions"
            ),
            OptError::InvalidProfileMethod { name } => write!(
                f,
                "Invalid profile optimizer '{name}': valid options are case insensitive \
                 'nelder-mead' or 'lbfgs'"
            ),

            // ---- Argmin ----
            OptError::InvalidParameter { text } => write!(f, "Invalid parameter: {text}"),
            OptError::NotImplemented { text } => write!(f, "Not implemented: {text}"),
            OptError::NotInitialized { text } => write!(f, "Not initialized: {text}"),
            OptError::ConditionViolated { text } => write!(f, "Condition violated: {text}"),
            OptError::PotentialBug { text } => write!(f, "Potential bug: {text}"),
            OptError::BackendError { text } => write!(f, "Backend error: {text}"),

            // ---- Fallback ----
            OptError::UnknownError => write!(f, "Unknown error"),
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}
