//! Numerical stability utilities.
//!
//! Shared tolerances for the log-star Newton engine and guarded scalar
//! transforms used to turn box-constrained nuisance searches into
//! unconstrained ones.
//!
//! # Provided items
//! - [`NEWTON_TOL`], [`DIVERGENCE_BOUND`]: default convergence and
//!   divergence thresholds for the multiplier iteration.
//! - [`PINV_RCOND`]: relative singular-value cutoff for pseudo-inverse solves.
//! - [`LOGIT_EPS`]: clamp that keeps `safe_logit` away from `±∞`.
//! - [`safe_logistic`], [`safe_logit`]: stable maps between ℝ and (0, 1).
//! - [`to_unbounded`], [`to_bounded`]: affine-logistic maps between a box
//!   `[lo, hi]` and ℝ.

/// Convergence threshold on `Σ|Δη|` for the multiplier iteration.
pub const NEWTON_TOL: f64 = 1e-10;

/// Any multiplier component beyond `±DIVERGENCE_BOUND` counts as divergence.
pub const DIVERGENCE_BOUND: f64 = 1e10;

/// Relative singular-value cutoff: singular values at most
/// `PINV_RCOND · σ_max` are treated as zero in pseudo-inverse solves.
pub const PINV_RCOND: f64 = 1e-12;

/// Distance kept from 0 and 1 before taking a logit.
pub const LOGIT_EPS: f64 = 1e-12;

/// Numerically stable logistic: `σ(x) = 1 / (1 + exp(-x))`.
///
/// Branches on the sign of `x` so that `exp` is only ever evaluated at a
/// non-positive argument, which keeps both tails free of overflow.
///
/// # Parameters
/// - `x`: real input
///
/// # Returns
/// - `σ(x)` in `[0, 1]`.
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Inverse of [`safe_logistic`], with `p` clamped to
/// `[LOGIT_EPS, 1 - LOGIT_EPS]` so the result stays finite.
pub fn safe_logit(p: f64) -> f64 {
    let p = p.clamp(LOGIT_EPS, 1.0 - LOGIT_EPS);
    (p / (1.0 - p)).ln()
}

/// Map a point of the box `[lo, hi]` to ℝ via `logit((x - lo) / (hi - lo))`.
///
/// # Notes
/// - Points on (or outside) the box boundary are clamped by [`safe_logit`],
///   so the image is always finite.
/// - Callers validate `lo < hi`; this helper assumes it.
pub fn to_unbounded(x: f64, lo: f64, hi: f64) -> f64 {
    safe_logit((x - lo) / (hi - lo))
}

/// Map `θ ∈ ℝ` into the box `[lo, hi]` via `lo + (hi - lo) · σ(θ)`.
pub fn to_bounded(theta: f64, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * safe_logistic(theta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // The guarded logistic must agree with the naive formula where the
    // naive formula is safe, and saturate cleanly in both tails.
    //
    // Given
    // -----
    // - A grid of moderate inputs plus ±800.
    //
    // Expect
    // ------
    // - Agreement within 1e-14 on the grid; exactly 0 / 1 in the tails
    //   without NaN.
    fn safe_logistic_matches_naive_and_saturates() {
        // Arrange
        let grid = [-10.0, -1.0, 0.0, 0.5, 3.0, 10.0];

        // Act & Assert
        for &x in &grid {
            let naive = 1.0 / (1.0 + f64::exp(-x));
            assert!((safe_logistic(x) - naive).abs() < 1e-14, "x = {x}");
        }
        assert_eq!(safe_logistic(800.0), 1.0);
        assert_eq!(safe_logistic(-800.0), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // The box maps invert each other for interior points.
    //
    // Given
    // -----
    // - Box [-2, 5] and interior points.
    //
    // Expect
    // ------
    // - `to_bounded(to_unbounded(x))` returns `x` within 1e-10.
    fn box_maps_invert_on_interior_points() {
        // Arrange
        let (lo, hi) = (-2.0, 5.0);

        // Act & Assert
        for &x in &[-1.9, 0.0, 1.5, 4.99] {
            let back = to_bounded(to_unbounded(x, lo, hi), lo, hi);
            assert!((back - x).abs() < 1e-10, "x = {x}, back = {back}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Boundary points stay finite in the unbounded space.
    //
    // Given
    // -----
    // - The two endpoints of [0, 1].
    //
    // Expect
    // ------
    // - Finite images of opposite sign.
    fn to_unbounded_clamps_boundary_points() {
        // Act
        let left = to_unbounded(0.0, 0.0, 1.0);
        let right = to_unbounded(1.0, 0.0, 1.0);

        // Assert
        assert!(left.is_finite() && left < 0.0);
        assert!(right.is_finite() && right > 0.0);
    }
}
