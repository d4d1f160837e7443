// src/utils/quadrature.rs

use crate::error::{RepoError, Result};

/// Maximum bisection depth per panel before the integral is declared
/// non-convergent. Exhausting it usually means the integrand has a
/// non-integrable singularity inside the interval.
const MAX_DEPTH: u32 = 48;

/// Number of equal panels the interval is split into before adaptive
/// refinement starts. Seeding with several panels keeps a sharply peaked
/// integrand from being missed by the first three samples.
const SEED_PANELS: usize = 8;

/// Adaptive Simpson integration of `f` over `[a, b]`.
///
/// Behavior at the edges of the numeric range is part of the contract:
///
/// * a zero-width interval (`a == b`) integrates to exactly `0.0`;
/// * any sample evaluating to `+inf` short-circuits the whole integral to
///   `+inf` (an infinite source term is a valid result, not an error);
/// * any sample evaluating to NaN is a numerical failure;
/// * integrable endpoint singularities converge as long as the integrand
///   itself stays finite on the open interval; the caller is expected to
///   return the limit value at a singular endpoint.
///
/// # Arguments
///
/// * `f` - Integrand.
/// * `a`, `b` - Integration bounds, `a <= b`.
/// * `rel_tol` - Relative tolerance on the final estimate.
///
/// # Returns
///
/// * The integral estimate, or `RepoError::Numerical` when the adaptive
///   refinement cannot converge within the depth limit.
pub fn adaptive_simpson<F>(f: &F, a: f64, b: f64, rel_tol: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if a == b {
        return Ok(0.0);
    }

    // Coarse composite pass to fix the absolute tolerance scale.
    let width = (b - a) / SEED_PANELS as f64;
    let mut panels = Vec::with_capacity(SEED_PANELS);
    let mut coarse = 0.0;
    for i in 0..SEED_PANELS {
        let lo = a + i as f64 * width;
        let hi = lo + width;
        let mid = 0.5 * (lo + hi);
        let flo = sample(f, lo)?;
        let fmid = sample(f, mid)?;
        let fhi = sample(f, hi)?;
        if flo.is_infinite() || fmid.is_infinite() || fhi.is_infinite() {
            return Ok(f64::INFINITY);
        }
        let estimate = simpson(flo, fmid, fhi, hi - lo);
        coarse += estimate;
        panels.push((lo, hi, flo, fmid, fhi, estimate));
    }

    let tol = rel_tol * coarse.abs().max(f64::MIN_POSITIVE);
    let mut total = 0.0;
    for (lo, hi, flo, fmid, fhi, estimate) in panels {
        total += refine(
            f,
            lo,
            hi,
            flo,
            fmid,
            fhi,
            estimate,
            tol / SEED_PANELS as f64,
            MAX_DEPTH,
        )?;
        if total.is_infinite() {
            return Ok(f64::INFINITY);
        }
    }
    Ok(total)
}

fn simpson(fa: f64, fm: f64, fb: f64, h: f64) -> f64 {
    h / 6.0 * (fa + 4.0 * fm + fb)
}

fn sample<F>(f: &F, x: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let value = f(x);
    if value.is_nan() {
        return Err(RepoError::Numerical(format!(
            "integrand evaluated to NaN at {x}"
        )));
    }
    Ok(value)
}

#[allow(clippy::too_many_arguments)]
fn refine<F>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tol: f64,
    depth: u32,
) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = sample(f, lm)?;
    let frm = sample(f, rm)?;
    if flm.is_infinite() || frm.is_infinite() {
        return Ok(f64::INFINITY);
    }

    let left = simpson(fa, flm, fm, m - a);
    let right = simpson(fm, frm, fb, b - m);
    let delta = left + right - whole;
    if delta.abs() <= 15.0 * tol {
        // Richardson extrapolation on the two half-interval estimates.
        return Ok(left + right + delta / 15.0);
    }
    if depth == 0 {
        return Err(RepoError::Numerical(format!(
            "quadrature failed to converge on [{a}, {b}]"
        )));
    }
    let l = refine(f, a, m, fa, flm, fm, left, 0.5 * tol, depth - 1)?;
    let r = refine(f, m, b, fm, frm, fb, right, 0.5 * tol, depth - 1)?;
    Ok(l + r)
}
