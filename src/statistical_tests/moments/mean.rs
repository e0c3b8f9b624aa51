//! Univariate mean: hypothesis test and confidence interval.
//!
//! A single linear constraint needs no matrix Newton solve: the multiplier
//! is the root of `Σ (x_i − μ0) / (1 + η (x_i − μ0)) = 0` on the interval
//! `η ∈ [(1 − 1/n)/(μ0 − max x), (1 − 1/n)/(μ0 − min x)]`, at whose ends
//! the smallest denominator is exactly `1/n`.
//!
//! The interval is available through three searches that agree to
//! numerical tolerance:
//! - nested Brent on `llr(μ) − r0` between the mean and each extreme;
//! - the dual `γ` search, where the EL weights take the closed form
//!   `w ∝ 1/(x − γ)` for `γ` outside the data range and `μ = Σ w x`;
//! - bisection on the same gap as the nested search.
use crate::optimization::scalar::{RootOptions, find_root};
use crate::statistical_tests::{
    core::{
        CiMethod, ConfidenceInterval, ELOptions, Hypothesis, HypothesisTest, MeanCiOptions,
        Sample, SolveResult, critical_value,
        likelihood::log_likelihood_ratio,
    },
    errors::{ELError, ELResult},
    validation::{validate_hypothesis, validate_significance},
};
use ndarray::{Array1, ArrayView1, array};

/// Solve the single mean constraint at `mu0` on `x`.
///
/// Errors
/// ------
/// - `ELError::InvalidBracket { search: "mean test", .. }` when `mu0` is not
///   strictly inside `(min x, max x)`; the payload holds the data range and
///   the signed distances to `mu0`.
/// - Root-search failures relabelled as the mean test.
pub fn solve_mean(x: ArrayView1<f64>, mu0: f64, root: &RootOptions) -> ELResult<SolveResult> {
    validate_hypothesis("mean", mu0)?;
    let n = x.len() as f64;
    let (min, max) = extremes(x);
    if !(min < mu0 && mu0 < max) {
        return Err(ELError::InvalidBracket {
            search: "mean test",
            lower: min,
            upper: max,
            f_lower: min - mu0,
            f_upper: max - mu0,
        });
    }

    let dev = x.mapv(|v| v - mu0);
    let score = |eta: f64| -> ELResult<f64> {
        Ok(dev.iter().map(|&d| d / (1.0 + eta * d)).sum())
    };
    let shrink = 1.0 - 1.0 / n;
    let eta_low = shrink / (mu0 - max);
    let eta_high = shrink / (mu0 - min);
    let eta = find_root(score, eta_low, eta_high, root).map_err(|e| e.in_search("mean test"))?;

    let denom = dev.mapv(|d| 1.0 + eta * d);
    if let Some((index, &d)) = denom.iter().enumerate().find(|(_, d)| !(**d > 0.0)) {
        return Err(ELError::NonFiniteStatistic { index, denom: d });
    }
    let weights = denom.mapv(|d| 1.0 / (n * d));
    let llr = log_likelihood_ratio(weights.view())?;
    Ok(SolveResult { weights, llr, eta: array![eta], iterations: 0 })
}

/// Test `H0: E[x] = mu0`.
///
/// Returns
/// -------
/// `HypothesisTest` with `p = 1 − χ²₁.cdf(llr)` and the EL weights.
///
/// Errors
/// ------
/// - `ELError::DimensionMismatch` for a multivariate sample.
/// - `ELError::InvalidBracket` when `mu0` is outside the data range.
pub fn hy_test_mean(sample: &Sample, mu0: f64, opts: &ELOptions) -> ELResult<HypothesisTest> {
    let x = sample.univariate()?;
    let solve = solve_mean(x, mu0, &opts.root)?;
    log::debug!("mean test at {mu0}: llr = {}", solve.llr);
    HypothesisTest::from_solve(solve, &Hypothesis::Mean { mu0 }, None)
}

/// Level-`(1 − sig)` EL confidence interval for the mean.
///
/// Errors
/// ------
/// - `ELError::InvalidSignificance` unless `0 < sig < 1`.
/// - `ELError::InvalidBracket` naming the side whose search range does not
///   reach the critical value (shrink `epsilon` or widen the `γ` bounds).
/// - `ELError::NotConverged` when bisection hits its cap.
pub fn ci_mean(
    sample: &Sample, sig: f64, ci: &MeanCiOptions, opts: &ELOptions,
) -> ELResult<ConfidenceInterval> {
    validate_significance(sig)?;
    let x = sample.univariate()?;
    let r0 = critical_value(sig, 1)?;
    let interval = match ci.method {
        CiMethod::NestedBrent => nested_brent(x, r0, ci, &opts.root)?,
        CiMethod::Gamma => gamma_search(x, r0, ci, &opts.root)?,
        CiMethod::Bisect => bisection(x, r0, ci, &opts.root)?,
    };
    log::debug!(
        "mean CI ({:?}, sig = {sig}): [{}, {}]",
        ci.method,
        interval.lower,
        interval.upper
    );
    Ok(interval)
}

/// Search ranges `(lower side, upper side)` kept `epsilon` of the way
/// short of the data extremes.
fn inner_ranges(x: ArrayView1<f64>, epsilon: f64) -> ((f64, f64), (f64, f64)) {
    let mean = x.sum() / x.len() as f64;
    let (min, max) = extremes(x);
    ((min + epsilon * (mean - min), mean), (mean, max - epsilon * (max - mean)))
}

fn nested_brent(
    x: ArrayView1<f64>, r0: f64, ci: &MeanCiOptions, root: &RootOptions,
) -> ELResult<ConfidenceInterval> {
    let gap = |mu: f64| -> ELResult<f64> { Ok(solve_mean(x, mu, root)?.llr - r0) };
    let ((lo_a, lo_b), (up_a, up_b)) = inner_ranges(x, ci.epsilon);
    let lower = find_root(gap, lo_a, lo_b, &root.relative_to(lo_b - lo_a))
        .map_err(|e| e.in_search("mean CI lower"))?;
    let upper = find_root(gap, up_a, up_b, &root.relative_to(up_b - up_a))
        .map_err(|e| e.in_search("mean CI upper"))?;
    Ok(ConfidenceInterval { lower, upper })
}

/// Closed-form EL weights `w ∝ 1/(x − γ)` for `γ` outside the data range.
fn gamma_weights(x: ArrayView1<f64>, gamma: f64) -> Array1<f64> {
    let inv = x.mapv(|v| 1.0 / (v - gamma));
    let total = inv.sum();
    inv / total
}

fn gamma_search(
    x: ArrayView1<f64>, r0: f64, ci: &MeanCiOptions, root: &RootOptions,
) -> ELResult<ConfidenceInterval> {
    let gap = |gamma: f64| -> ELResult<f64> {
        Ok(log_likelihood_ratio(gamma_weights(x, gamma).view())? - r0)
    };
    let (min, max) = extremes(x);
    let gamma_lower = find_root(gap, ci.gamma_low, min - ci.epsilon, root)
        .map_err(|e| e.in_search("mean CI lower (gamma)"))?;
    let gamma_upper = find_root(gap, max + ci.epsilon, ci.gamma_high, root)
        .map_err(|e| e.in_search("mean CI upper (gamma)"))?;
    Ok(ConfidenceInterval {
        lower: gamma_weights(x, gamma_lower).dot(&x),
        upper: gamma_weights(x, gamma_upper).dot(&x),
    })
}

fn bisection(
    x: ArrayView1<f64>, r0: f64, ci: &MeanCiOptions, root: &RootOptions,
) -> ELResult<ConfidenceInterval> {
    let ((lo_a, lo_b), (up_a, up_b)) = inner_ranges(x, ci.epsilon);
    // Lower side: llr falls from the extreme (a) to the mean (b).
    let lower = bisect_side(x, r0, lo_b, lo_a, ci, root, "mean CI lower (bisect)")?;
    let upper = bisect_side(x, r0, up_a, up_b, ci, root, "mean CI upper (bisect)")?;
    Ok(ConfidenceInterval { lower, upper })
}

/// Halve between `inside` (llr below `r0`) and `outside` (llr above `r0`)
/// until `|llr − r0| ≤ tol`.
fn bisect_side(
    x: ArrayView1<f64>, r0: f64, inside: f64, outside: f64, ci: &MeanCiOptions,
    root: &RootOptions, search: &'static str,
) -> ELResult<f64> {
    let llr_inside = solve_mean(x, inside, root)?.llr;
    let llr_outside = solve_mean(x, outside, root)?.llr;
    if !(llr_inside <= r0 && llr_outside >= r0) {
        return Err(ELError::InvalidBracket {
            search,
            lower: inside,
            upper: outside,
            f_lower: llr_inside - r0,
            f_upper: llr_outside - r0,
        });
    }
    let (mut inside, mut outside) = (inside, outside);
    for _ in 0..ci.max_bisect_iter {
        let mid = 0.5 * (inside + outside);
        let gap = solve_mean(x, mid, root)?.llr - r0;
        if gap.abs() <= ci.tol {
            return Ok(mid);
        }
        if gap < 0.0 {
            inside = mid;
        } else {
            outside = mid;
        }
    }
    Err(ELError::NotConverged { search, iterations: ci.max_bisect_iter })
}

fn extremes(x: ArrayView1<f64>) -> (f64, f64) {
    x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
