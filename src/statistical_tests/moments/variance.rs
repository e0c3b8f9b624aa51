//! Univariate variance: profiled hypothesis test and confidence interval.
//!
//! The variance test carries the mean as a nuisance parameter. For a
//! hypothesized `σ0²` the statistic is `min_μ llr(μ, σ0²)` over
//! `μ ∈ [min x, max x]`, where `llr(μ, σ0²)` solves the two-column
//! equations `[x − μ, (x − μ)² − σ0²]`. Nuisance values whose inner solve
//! diverges lie outside the EL support and count as `+∞` in the search.
use crate::optimization::scalar::{find_root, minimize_scalar};
use crate::statistical_tests::{
    core::{
        ConfidenceInterval, Constraints, ELOptions, Hypothesis, HypothesisTest, Sample,
        SolveResult, VarCiBounds, critical_value, evaluate,
        likelihood::chi_squared_quantile, p_value,
    },
    errors::{ELError, ELResult},
    validation::{validate_significance, validate_variance},
};
use ndarray::array;

/// Inner solve of the variance equations at nuisance mean `mu`.
pub fn opt_var(sample: &Sample, mu: f64, sigma2_0: f64, opts: &ELOptions) -> ELResult<SolveResult> {
    let constraints = Constraints::build(sample, &Hypothesis::Variance { mu, sigma2: sigma2_0 })?;
    evaluate(&constraints, &opts.solver())
}

/// p-value of the inner solve at `(mu, sigma2_0)`, one degree of freedom.
///
/// Used to draw joint `(μ, σ²)` contours; `DivergedOptimization` means the
/// point is outside the EL support.
pub fn opt_var_p_value(sample: &Sample, mu: f64, sigma2_0: f64, opts: &ELOptions) -> ELResult<f64> {
    p_value(opt_var(sample, mu, sigma2_0, opts)?.llr, 1)
}

/// `true` for failures that mark a nuisance value as infeasible rather
/// than aborting the outer search.
pub(crate) fn is_infeasible(err: &ELError) -> bool {
    matches!(
        err,
        ELError::DivergedOptimization { .. }
            | ELError::NotConverged { .. }
            | ELError::NonFiniteStatistic { .. }
            | ELError::NonPositiveVariance { .. }
    )
}

/// Profile the nuisance mean out of the variance statistic.
///
/// Returns the minimizing `μ` and the solve there.
///
/// Errors
/// ------
/// - `ELError::NonPositiveVariance` for `σ0² ≤ 0`.
/// - `ELError::DivergedOptimization` when no `μ` in the data range supports
///   `σ0²`.
pub fn profile_var(
    sample: &Sample, sigma2_0: f64, opts: &ELOptions,
) -> ELResult<(f64, SolveResult)> {
    validate_variance(sigma2_0)?;
    let (min, max) = sample.range()?;
    let cost = |mu: f64| -> ELResult<f64> {
        if !mu.is_finite() {
            return Ok(f64::INFINITY);
        }
        match opt_var(sample, mu, sigma2_0, opts) {
            Ok(solve) => Ok(solve.llr),
            Err(e) if is_infeasible(&e) => Ok(f64::INFINITY),
            Err(e) => Err(e),
        }
    };
    let best = minimize_scalar(cost, min, max, &opts.minimize.relative_to(max - min))?;
    log::debug!(
        "variance profile at {sigma2_0}: mu = {}, llr = {} ({} iters)",
        best.x,
        best.value,
        best.iterations
    );
    let solve = opt_var(sample, best.x, sigma2_0, opts)?;
    Ok((best.x, solve))
}

/// Test `H0: Var[x] = sigma2_0` with the mean profiled out.
///
/// Returns
/// -------
/// `HypothesisTest` with `nuisance = [μ̂]`.
pub fn hy_test_var(sample: &Sample, sigma2_0: f64, opts: &ELOptions) -> ELResult<HypothesisTest> {
    let (mu_hat, solve) = profile_var(sample, sigma2_0, opts)?;
    HypothesisTest::from_solve(
        solve,
        &Hypothesis::Variance { mu: mu_hat, sigma2: sigma2_0 },
        Some(array![mu_hat]),
    )
}

/// Default variance-interval bracket from normal theory.
///
/// `[(n−1)s²/χ²_{n−1}(0.9999), (n−1)s²/χ²_{n−1}(0.0001)]`; a heuristic
/// starting range only.
pub fn default_var_bounds(sample: &Sample) -> ELResult<(f64, f64)> {
    let s2 = sample.variance()?;
    let df = sample.nobs() - 1;
    let scale = df as f64 * s2;
    let lower = scale / chi_squared_quantile(0.9999, df)?;
    let upper = scale / chi_squared_quantile(0.0001, df)?;
    Ok((lower, upper))
}

/// Level-`(1 − sig)` EL confidence interval for the variance.
///
/// `bounds.lower` and `bounds.upper` override the default bracket ends.
/// Each limit is the root of `hy_test_var(v).llr − r0` between the bracket
/// end and the sample variance.
///
/// Errors
/// ------
/// - `ELError::InvalidSignificance` unless `0 < sig < 1`.
/// - `ELError::InvalidBracket` naming the side whose end does not reach the
///   critical value; widen that bound.
/// - `ELError::DivergedOptimization` when a bracket end is outside the EL
///   support; tighten that bound.
pub fn ci_var(
    sample: &Sample, sig: f64, bounds: &VarCiBounds, opts: &ELOptions,
) -> ELResult<ConfidenceInterval> {
    validate_significance(sig)?;
    let s2 = sample.variance()?;
    validate_variance(s2)?;
    let r0 = critical_value(sig, 1)?;
    let (lower, upper) = match (bounds.lower, bounds.upper) {
        (Some(lo), Some(hi)) => (lo, hi),
        (lo, hi) => {
            let (d_lo, d_hi) = default_var_bounds(sample)?;
            (lo.unwrap_or(d_lo), hi.unwrap_or(d_hi))
        }
    };
    log::debug!("variance CI bracket: [{lower}, {s2}, {upper}], r0 = {r0}");

    let gap = |v: f64| -> ELResult<f64> { Ok(profile_var(sample, v, opts)?.1.llr - r0) };
    let ci_lower = find_root(gap, lower, s2, &opts.root.relative_to(s2 - lower))
        .map_err(|e| e.in_search("variance CI lower"))?;
    let ci_upper = find_root(gap, s2, upper, &opts.root.relative_to(upper - s2))
        .map_err(|e| e.in_search("variance CI upper"))?;
    Ok(ConfidenceInterval { lower: ci_lower, upper: ci_upper })
}
