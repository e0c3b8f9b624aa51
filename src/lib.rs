//! empirical_likelihood — empirical-likelihood inference for sample moments.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the EL tests to Python via the `_empirical_likelihood` extension module.
//! When the `python-bindings` feature is enabled, this module defines the
//! Python-facing classes used by the `empirical_likelihood` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`optimization` and `statistical_tests`)
//!   as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_empirical_likelihood` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Python-visible methods mirror the signatures and defaults of
//!   [`statistical_tests::DescStat`].
//!
//! Conventions
//! -----------
//! - Confidence intervals cross the boundary as `(lower, upper)` tuples and
//!   grids as numpy arrays.
//! - Errors from core Rust code are [`statistical_tests::ELError`] values
//!   internally and become `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`statistical_tests`] and can ignore
//!   the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_empirical_likelihood` and wraps its
//!   classes in user-facing helpers.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   the pipeline tests under `tests/`; the bindings are exercised from
//!   Python.

pub mod optimization;
pub mod statistical_tests;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyArray2};

#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    statistical_tests::{DescStat, HypothesisTest},
    utils::{
        extract_f64_matrix, extract_f64_vector, extract_grid_axis, extract_mean_ci_options,
        extract_nuisance_options, extract_var_ci_bounds,
    },
};

/// ELTest — Python-facing result of an EL hypothesis test.
///
/// Fields
/// ------
/// - `inner`: [`HypothesisTest`]
///   Rust-side outcome read by the property getters.
///
/// Notes
/// -----
/// - Native Rust code should use [`HypothesisTest`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "empirical_likelihood")]
pub struct ELTest {
    inner: HypothesisTest,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ELTest {
    /// Upper-tail χ² probability of the statistic.
    #[getter]
    pub fn p_value(&self) -> f64 {
        self.inner.p_value
    }

    /// `−2 log` empirical likelihood ratio.
    #[getter]
    pub fn llr(&self) -> f64 {
        self.inner.llr
    }

    /// EL weights at the solution.
    #[getter]
    pub fn weights<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.weights.to_vec().into_pyarray(py)
    }

    /// Profiled nuisance parameters, or `None` for tests without any.
    #[getter]
    pub fn nuisance(&self) -> Option<Vec<f64>> {
        self.inner.nuisance.as_ref().map(|v| v.to_vec())
    }

    fn __repr__(&self) -> String {
        format!("ELTest(p_value={}, llr={})", self.inner.p_value, self.inner.llr)
    }
}

#[cfg(feature = "python-bindings")]
impl From<HypothesisTest> for ELTest {
    fn from(inner: HypothesisTest) -> Self {
        Self { inner }
    }
}

/// PyDescStat — Python-facing wrapper around [`DescStat`].
///
/// Purpose
/// -------
/// Hold a validated sample and expose every EL test, interval and grid
/// diagnostic as a Python method.
///
/// Parameters
/// ----------
/// Constructed from Python via `DescStat(data)`:
/// - `data`: `&PyAny`
///   1-D array-like (univariate sample) or 2-D array-like of shape `(n, d)`
///   of finite float64 values with `n ≥ 2`.
///
/// Fields
/// ------
/// - `inner`: [`DescStat`]
///   Rust-side facade with default engine options.
///
/// Performance
/// -----------
/// - Input data is copied once into an owned array at construction.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "DescStat", module = "empirical_likelihood", unsendable)]
pub struct PyDescStat {
    inner: DescStat,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyDescStat {
    #[new]
    #[pyo3(text_signature = "(data, /)")]
    pub fn new<'py>(py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<Self> {
        let matrix = extract_f64_matrix(py, data)?;
        Ok(PyDescStat { inner: DescStat::new(matrix)? })
    }

    #[getter]
    pub fn nobs(&self) -> usize {
        self.inner.sample().nobs()
    }

    #[getter]
    pub fn dim(&self) -> usize {
        self.inner.sample().dim()
    }

    /// Test `H0: E[x] = mu0`.
    #[pyo3(text_signature = "(self, mu0, /)")]
    pub fn hy_test_mean(&self, mu0: f64) -> PyResult<ELTest> {
        Ok(self.inner.hy_test_mean(mu0)?.into())
    }

    /// `(1 − sig)` interval for the mean.
    #[pyo3(
        signature = (
            sig = 0.05,
            method = None,
            epsilon = None,
            gamma_low = None,
            gamma_high = None,
            tol = None,
            max_bisect_iter = None,
        ),
        text_signature = "(self, /, sig=0.05, method='nested-brent', epsilon=None, \
                          gamma_low=None, gamma_high=None, tol=None, max_bisect_iter=None)"
    )]
    pub fn ci_mean(
        &self, sig: f64, method: Option<&str>, epsilon: Option<f64>, gamma_low: Option<f64>,
        gamma_high: Option<f64>, tol: Option<f64>, max_bisect_iter: Option<usize>,
    ) -> PyResult<(f64, f64)> {
        let opts =
            extract_mean_ci_options(method, epsilon, gamma_low, gamma_high, tol, max_bisect_iter)?;
        let ci = self.inner.ci_mean(sig, &opts)?;
        Ok((ci.lower, ci.upper))
    }

    /// Test `H0: Var[x] = sigma2_0` with the mean profiled out.
    #[pyo3(text_signature = "(self, sigma2_0, /)")]
    pub fn hy_test_var(&self, sigma2_0: f64) -> PyResult<ELTest> {
        Ok(self.inner.hy_test_var(sigma2_0)?.into())
    }

    /// `(1 − sig)` interval for the variance.
    #[pyo3(
        signature = (sig = 0.05, lower = None, upper = None),
        text_signature = "(self, /, sig=0.05, lower=None, upper=None)"
    )]
    pub fn ci_var(&self, sig: f64, lower: Option<f64>, upper: Option<f64>) -> PyResult<(f64, f64)> {
        let ci = self.inner.ci_var(sig, &extract_var_ci_bounds(lower, upper))?;
        Ok((ci.lower, ci.upper))
    }

    /// Test `H0: skewness = skew0` with mean and variance profiled out.
    #[pyo3(
        signature = (skew0, start = None, mu_bounds = None, var_bounds = None),
        text_signature = "(self, skew0, /, start=None, mu_bounds=None, var_bounds=None)"
    )]
    pub fn hy_test_skew(
        &self, skew0: f64, start: Option<(f64, f64)>, mu_bounds: Option<(f64, f64)>,
        var_bounds: Option<(f64, f64)>,
    ) -> PyResult<ELTest> {
        let nuisance = extract_nuisance_options(start, mu_bounds, var_bounds);
        Ok(self.inner.hy_test_skew(skew0, &nuisance)?.into())
    }

    /// Test `H0: kurtosis = kurt0` (excess kurtosis) with mean and variance
    /// profiled out.
    #[pyo3(
        signature = (kurt0, start = None, mu_bounds = None, var_bounds = None),
        text_signature = "(self, kurt0, /, start=None, mu_bounds=None, var_bounds=None)"
    )]
    pub fn hy_test_kurt(
        &self, kurt0: f64, start: Option<(f64, f64)>, mu_bounds: Option<(f64, f64)>,
        var_bounds: Option<(f64, f64)>,
    ) -> PyResult<ELTest> {
        let nuisance = extract_nuisance_options(start, mu_bounds, var_bounds);
        Ok(self.inner.hy_test_kurt(kurt0, &nuisance)?.into())
    }

    /// Test `H0: E[x] = mu` for a multivariate sample.
    #[pyo3(text_signature = "(self, mu, /)")]
    pub fn mv_hy_test_mean<'py>(
        &self, py: Python<'py>, mu: &Bound<'py, PyAny>,
    ) -> PyResult<ELTest> {
        let mu = extract_f64_vector(py, mu)?;
        Ok(self.inner.mv_hy_test_mean(&mu)?.into())
    }

    /// Variance-test p-values over `(lower, upper, step)`; returns
    /// `(values, p_values)`.
    #[pyo3(text_signature = "(self, axis, /)")]
    pub fn var_p_curve<'py>(
        &self, py: Python<'py>, axis: (f64, f64, f64),
    ) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
        let curve = self.inner.var_p_curve(&extract_grid_axis(axis)?)?;
        Ok((to_numpy_1d(py, &curve.values), to_numpy_1d(py, &curve.p_values)))
    }

    /// Bivariate mean-test p-values; returns `(mu1, mu2, p_values)`.
    #[pyo3(text_signature = "(self, mu1_axis, mu2_axis, /)")]
    pub fn mv_mean_contour<'py>(
        &self, py: Python<'py>, mu1_axis: (f64, f64, f64), mu2_axis: (f64, f64, f64),
    ) -> PyResult<ContourArrays<'py>> {
        let grid = self
            .inner
            .mv_mean_contour(&extract_grid_axis(mu1_axis)?, &extract_grid_axis(mu2_axis)?)?;
        contour_arrays(py, &grid.x, &grid.y, &grid.p_values)
    }

    /// Joint mean/variance p-values; returns `(means, variances, p_values)`.
    #[pyo3(text_signature = "(self, mean_axis, var_axis, /)")]
    pub fn mean_var_contour<'py>(
        &self, py: Python<'py>, mean_axis: (f64, f64, f64), var_axis: (f64, f64, f64),
    ) -> PyResult<ContourArrays<'py>> {
        let grid = self
            .inner
            .mean_var_contour(&extract_grid_axis(mean_axis)?, &extract_grid_axis(var_axis)?)?;
        contour_arrays(py, &grid.x, &grid.y, &grid.p_values)
    }
}

#[cfg(feature = "python-bindings")]
type ContourArrays<'py> =
    (Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>, Bound<'py, PyArray2<f64>>);

#[cfg(feature = "python-bindings")]
fn to_numpy_1d<'py>(py: Python<'py>, values: &Array1<f64>) -> Bound<'py, PyArray1<f64>> {
    values.to_vec().into_pyarray(py)
}

#[cfg(feature = "python-bindings")]
fn contour_arrays<'py>(
    py: Python<'py>, x: &Array1<f64>, y: &Array1<f64>, p_values: &Array2<f64>,
) -> PyResult<ContourArrays<'py>> {
    let rows: Vec<Vec<f64>> = p_values.outer_iter().map(|row| row.to_vec()).collect();
    let grid = PyArray2::from_vec2(py, &rows).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((to_numpy_1d(py, x), to_numpy_1d(py, y), grid))
}

/// Define the `_empirical_likelihood` Python module.
///
/// Registers [`PyDescStat`] (exposed as `DescStat`) and [`ELTest`]. Invoked
/// by Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _empirical_likelihood<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<PyDescStat>()?;
    m.add_class::<ELTest>()?;
    Ok(())
}
