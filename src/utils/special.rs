// src/utils/special.rs

/// Error function approximation (Abramowitz & Stegun 7.1.26).
///
/// Maximum absolute error is about 1.5e-7, which is well below the
/// quadrature tolerance used by the temperature kernels.
///
/// # Arguments
///
/// * `x` - Argument, any finite value.
///
/// # Returns
///
/// * `erf(x)` in `[-1, 1]`.
pub fn erf(x: f64) -> f64 {
    // The rational approximation misses zero by ~1e-9 at the origin; the
    // exact value keeps the function odd.
    if x == 0.0 {
        return 0.0;
    }
    1.0 - erfc(x)
}

/// Complementary error function approximation (Abramowitz & Stegun 7.1.26).
pub fn erfc(x: f64) -> f64 {
    if x < 0.0 {
        return 2.0 - erfc(-x);
    }
    let t = 1.0 / (1.0 + 0.3275911 * x);
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    poly * (-x * x).exp()
}
