//! Least-squares solves through a truncated singular value decomposition.
//!
//! The Newton step for the log-star problem is `Δ = J⁺ y` with `J` an
//! `n×k` matrix and `k ≤ 3` in practice. With the thin SVD `J = U Σ Vᵀ`
//!
//! `Δ = Σ_{m: σ_m > PINV_RCOND·σ_max} v_m (u_mᵀ y) / σ_m`
//!
//! which is the minimum-norm least-squares solution on the numerical rank
//! of `J`. Working on `J` directly keeps the condition number at `κ(J)`
//! instead of `κ(J)²`, so columns on very different scales keep their
//! significant digits. Rank-deficient columns (e.g. a constant constraint
//! row) drop out instead of producing infinities.
use crate::optimization::{
    errors::{OptError, OptResult},
    numerical_stability::transformations::PINV_RCOND,
};
use nalgebra::DMatrix;
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Sweep cap for the SVD; `k ≤ 3` columns converge in a handful.
const SVD_MAX_SWEEPS: usize = 500;

/// Minimum-norm least-squares solution of `J Δ ≈ y`.
///
/// Parameters
/// ----------
/// - `j`: `ArrayView2<f64>`
///   `n×k` design matrix.
/// - `y`: `ArrayView1<f64>`
///   Length-`n` right-hand side.
///
/// Returns
/// -------
/// `OptResult<Array1<f64>>`
///   Length-`k` step. Components along singular directions below the
///   relative cutoff are zero. If `J` is entirely zero the step is zero.
///   Non-finite inputs give a non-finite step, which the Newton loop reports
///   as divergence.
///
/// Errors
/// ------
/// - `OptError::BackendError` if the SVD fails to converge.
///
/// Panics
/// ------
/// - Panics if `y.len() != j.nrows()`; callers build both from the same
///   constraint matrix.
pub fn lstsq_svd(j: ArrayView2<f64>, y: ArrayView1<f64>) -> OptResult<Array1<f64>> {
    let (n, k) = j.dim();
    assert_eq!(y.len(), n, "right-hand side length must match the rows of J");
    if j.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Ok(Array1::from_elem(k, f64::NAN));
    }

    let design = DMatrix::<f64>::from_fn(n, k, |r, c| j[[r, c]]);
    let svd = design.try_svd(true, true, f64::EPSILON, SVD_MAX_SWEEPS).ok_or_else(|| {
        OptError::BackendError { text: "SVD of the Newton system did not converge".to_string() }
    })?;
    let (Some(u), Some(v_t)) = (svd.u.as_ref(), svd.v_t.as_ref()) else {
        return Err(OptError::BackendError { text: "SVD factors were not computed".to_string() });
    };

    let sigma_max = svd.singular_values.iter().cloned().fold(0.0_f64, f64::max);
    let mut step = Array1::<f64>::zeros(k);
    if !(sigma_max > 0.0) {
        return Ok(step);
    }
    let cutoff = PINV_RCOND * sigma_max;
    for (m, &sigma) in svd.singular_values.iter().enumerate() {
        if sigma <= cutoff {
            continue;
        }
        let coef: f64 = (0..n).map(|r| u[(r, m)] * y[r]).sum::<f64>() / sigma;
        for c in 0..k {
            step[c] += v_t[(m, c)] * coef;
        }
    }
    Ok(step)
}
