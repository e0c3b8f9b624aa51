//! statistical_tests::diagnostics — p-value curves and contour grids.
//!
//! Purpose
//! -------
//! Evaluate EL tests over one- and two-dimensional grids and return the
//! numbers a plotting tool needs. Nothing here renders.
//!
//! Key behaviors
//! -------------
//! - [`var_p_curve`]: `hy_test_var` p-values along a variance axis.
//! - [`mv_mean_contour`]: bivariate mean-test p-values over a `μ1 × μ2`
//!   grid.
//! - [`mean_var_contour`]: p-values of the joint `(μ, σ²)` equations over a
//!   mean × variance grid.
//!
//! Conventions
//! -----------
//! - Axes follow half-open ranges: `lower, lower + step, …` strictly below
//!   `upper`.
//! - Grid points outside the EL support (`DivergedOptimization`) get
//!   `p = 0`; every other failure aborts the whole evaluation.
//! - `ContourGrid::p_values[[i, j]]` belongs to `(x[i], y[j])`.
use crate::statistical_tests::{
    core::{ELOptions, Sample},
    errors::{ELError, ELResult},
    moments::{
        multivariate::mv_hy_test_mean,
        variance::{hy_test_var, opt_var_p_value},
    },
    validation::validate_grid,
};
use ndarray::{Array1, Array2, array};

/// Upper bound on the number of points per axis.
const MAX_AXIS_POINTS: usize = 100_000;

/// One axis of an evaluation grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridAxis {
    pub lower: f64,
    pub upper: f64,
    pub step: f64,
}

impl GridAxis {
    /// # Errors
    /// - `ELError::InvalidGrid` for non-finite or unordered bounds, a
    ///   non-positive step, or more than 100 000 points.
    pub fn new(lower: f64, upper: f64, step: f64) -> ELResult<Self> {
        validate_grid(lower, upper, step)?;
        let axis = Self { lower, upper, step };
        let count = axis.len();
        if count > MAX_AXIS_POINTS {
            return Err(ELError::InvalidGrid {
                reason: format!("{count} points exceed the limit of {MAX_AXIS_POINTS} per axis"),
            });
        }
        Ok(axis)
    }

    pub fn len(&self) -> usize {
        ((self.upper - self.lower) / self.step).ceil() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn points(&self) -> Array1<f64> {
        Array1::from_iter((0..self.len()).map(|i| self.lower + i as f64 * self.step))
    }
}

/// `(σ², p)` pairs from the variance test.
#[derive(Debug, Clone, PartialEq)]
pub struct PValueCurve {
    pub values: Array1<f64>,
    pub p_values: Array1<f64>,
}

/// p-values over a rectangular grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourGrid {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    pub p_values: Array2<f64>,
}

fn p_or_zero(result: ELResult<f64>) -> ELResult<f64> {
    match result {
        Err(ELError::DivergedOptimization { .. }) => Ok(0.0),
        other => other,
    }
}

/// Variance-test p-values along `axis`.
pub fn var_p_curve(sample: &Sample, axis: &GridAxis, opts: &ELOptions) -> ELResult<PValueCurve> {
    let values = axis.points();
    let p_values = values
        .iter()
        .map(|&v| p_or_zero(hy_test_var(sample, v, opts).map(|t| t.p_value)))
        .collect::<ELResult<Vec<f64>>>()?;
    Ok(PValueCurve { values, p_values: Array1::from(p_values) })
}

fn contour<F>(x_axis: &GridAxis, y_axis: &GridAxis, eval: F) -> ELResult<ContourGrid>
where
    F: Fn(f64, f64) -> ELResult<f64>,
{
    let (x, y) = (x_axis.points(), y_axis.points());
    let mut p_values = Array2::<f64>::zeros((x.len(), y.len()));
    for ((i, j), p) in p_values.indexed_iter_mut() {
        *p = p_or_zero(eval(x[i], y[j]))?;
    }
    Ok(ContourGrid { x, y, p_values })
}

/// Bivariate mean-test p-values over `μ1 × μ2`.
///
/// # Errors
/// - `ELError::DimensionMismatch` unless the sample has two columns.
pub fn mv_mean_contour(
    sample: &Sample, mu1: &GridAxis, mu2: &GridAxis, opts: &ELOptions,
) -> ELResult<ContourGrid> {
    if sample.dim() != 2 {
        return Err(ELError::DimensionMismatch { expected: 2, found: sample.dim() });
    }
    contour(mu1, mu2, |a, b| Ok(mv_hy_test_mean(sample, &array![a, b], opts)?.p_value))
}

/// Joint `(μ, σ²)` p-values over `mean × variance`.
pub fn mean_var_contour(
    sample: &Sample, mean: &GridAxis, variance: &GridAxis, opts: &ELOptions,
) -> ELResult<ContourGrid> {
    sample.univariate()?;
    contour(mean, variance, |mu, v| opt_var_p_value(sample, mu, v, opts))
}
