//! utils — conversion helpers for the Python bindings.
//!
//! Every item here is gated on `python-bindings`; native Rust callers build
//! [`Sample`](crate::statistical_tests::Sample) and the option structs
//! directly.
#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2, Axis};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
    PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
use crate::statistical_tests::{CiMethod, GridAxis, MeanCiOptions, NuisanceOptions, VarCiBounds};

/// Read a 1-D float64 input: a contiguous `numpy.ndarray`, anything with
/// `to_numpy()` (pandas), or a plain sequence of floats.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Read observations as an `n×d` matrix. One-dimensional inputs become a
/// single column; two-dimensional arrays and DataFrames keep their shape.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<Array2<f64>> {
    if let Ok(mat) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return readonly_to_matrix(&mat);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(frame) = obj.extract::<PyReadonlyArray2<f64>>() {
            return readonly_to_matrix(&frame);
        }
    }

    if let Ok(rows) = raw_data.extract::<Vec<Vec<f64>>>() {
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != ncols) {
            return Err(PyValueError::new_err("rows of data must all have the same length"));
        }
        let nrows = rows.len();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        return Array2::from_shape_vec((nrows, ncols), flat)
            .map_err(|e| PyValueError::new_err(e.to_string()));
    }

    let column = extract_f64_vector(py, raw_data)?;
    Ok(column.insert_axis(Axis(1)))
}

#[cfg(feature = "python-bindings")]
fn readonly_to_matrix(mat: &PyReadonlyArray2<'_, f64>) -> PyResult<Array2<f64>> {
    let view = mat.as_array();
    let (nrows, ncols) = view.dim();
    // Logical (row-major) order regardless of the numpy memory layout.
    let flat: Vec<f64> = view.iter().copied().collect();
    Array2::from_shape_vec((nrows, ncols), flat).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Read a 1-D float64 input into an owned vector.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vector<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>,
) -> PyResult<Array1<f64>> {
    let arr = extract_f64_array(py, raw)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err("expected a 1-D contiguous float64 array or sequence")
    })?;
    Ok(Array1::from(slice.to_vec()))
}

#[cfg(feature = "python-bindings")]
pub fn extract_mean_ci_options(
    method: Option<&str>, epsilon: Option<f64>, gamma_low: Option<f64>, gamma_high: Option<f64>,
    tol: Option<f64>, max_bisect_iter: Option<usize>,
) -> PyResult<MeanCiOptions> {
    let defaults = MeanCiOptions::default();
    let method = match method {
        Some(name) => name.parse::<CiMethod>()?,
        None => defaults.method,
    };
    let opts = MeanCiOptions::new(
        method,
        epsilon.unwrap_or(defaults.epsilon),
        gamma_low.unwrap_or(defaults.gamma_low),
        gamma_high.unwrap_or(defaults.gamma_high),
        tol.unwrap_or(defaults.tol),
        max_bisect_iter.unwrap_or(defaults.max_bisect_iter),
    )?;
    Ok(opts)
}

#[cfg(feature = "python-bindings")]
pub fn extract_var_ci_bounds(lower: Option<f64>, upper: Option<f64>) -> VarCiBounds {
    VarCiBounds { lower, upper }
}

#[cfg(feature = "python-bindings")]
pub fn extract_nuisance_options(
    start: Option<(f64, f64)>, mu_bounds: Option<(f64, f64)>, var_bounds: Option<(f64, f64)>,
) -> NuisanceOptions {
    NuisanceOptions { start, mu_bounds, var_bounds }
}

/// Build a grid axis from a Python `(lower, upper, step)` tuple.
#[cfg(feature = "python-bindings")]
pub fn extract_grid_axis(axis: (f64, f64, f64)) -> PyResult<GridAxis> {
    let (lower, upper, step) = axis;
    Ok(GridAxis::new(lower, upper, step)?)
}
