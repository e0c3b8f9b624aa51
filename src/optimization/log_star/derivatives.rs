//! Derivatives of Owen's log-star function and the weighted Newton system.
//!
//! `log*` agrees with `log` above `1/n` and continues as the quadratic
//! Taylor expansion of `log` at `1/n` below it, which keeps the dual
//! objective finite and concave for every multiplier. For `t = 1 + η·g`:
//!
//! - `d1(t) = 1/t` if `t > 1/n`, else `2n − n²t`
//! - `d2(t) = −1/t²` if `t > 1/n`, else `−n²`
//!
//! The Newton step solves the least-squares problem `J Δ ≈ y` with
//! `J_i = sqrt(−d2_i) · g_i` and `y_i = d1_i / sqrt(−d2_i)`.
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Zip};

/// First derivative of `log*` at `t` for sample size `n`.
#[inline]
pub fn log_star_d1(t: f64, n: f64) -> f64 {
    if t <= 1.0 / n { 2.0 * n - n * n * t } else { 1.0 / t }
}

/// Second derivative of `log*` at `t` for sample size `n`.
#[inline]
pub fn log_star_d2(t: f64, n: f64) -> f64 {
    if t <= 1.0 / n { -n * n } else { -1.0 / (t * t) }
}

/// Row-wise `t_i = 1 + η·g_i`.
pub fn arguments(g: ArrayView2<f64>, eta: ArrayView1<f64>) -> Array1<f64> {
    g.dot(&eta) + 1.0
}

/// Build the weighted system `(J, y)` for the current multipliers.
///
/// Parameters
/// ----------
/// - `g`: `n×k` constraint matrix.
/// - `eta`: length-`k` multipliers.
///
/// Returns
/// -------
/// `(J, y)` with `J` of shape `n×k` and `y` of length `n`.
pub fn newton_system(g: ArrayView2<f64>, eta: ArrayView1<f64>) -> (Array2<f64>, Array1<f64>) {
    let n = g.nrows() as f64;
    let t = arguments(g, eta);
    let mut j = g.to_owned();
    let mut y = Array1::<f64>::zeros(t.len());
    Zip::from(j.rows_mut()).and(&mut y).and(&t).for_each(|mut row, yi, &ti| {
        let root = (-log_star_d2(ti, n)).sqrt();
        row *= root;
        *yi = log_star_d1(ti, n) / root;
    });
    (j, y)
}
