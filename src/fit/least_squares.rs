// src/fit/least_squares.rs

use nalgebra::{DMatrix, DVector};

use crate::decay::series::HeatTimeSeries;
use crate::error::{RepoError, Result};
use crate::fit::polynomial::SourcePolynomial;

/// Fits a degree-`order` polynomial to a heat series by least squares.
///
/// The Vandermonde system is solved through an SVD, which stays usable for
/// the mildly ill-conditioned systems that high orders over long time spans
/// produce. No fit-quality validation happens here: choosing an order that
/// avoids Runge oscillation is the caller's job.
///
/// # Arguments
///
/// * `series` - Samples to fit; its time span becomes the polynomial's
///   validity domain.
/// * `order` - Polynomial degree, any non-negative value below the sample
///   count.
///
/// # Returns
///
/// * The fitted [`SourcePolynomial`], or `RepoError::DomainRange` when the
///   series is too short for the requested order.
pub fn fit_polynomial(series: &HeatTimeSeries, order: usize) -> Result<SourcePolynomial> {
    let n = series.len();
    if order + 1 > n {
        return Err(RepoError::DomainRange(format!(
            "order {order} fit needs at least {} samples, series has {n}",
            order + 1
        )));
    }

    let times = series.times();
    let vandermonde = DMatrix::from_fn(n, order + 1, |row, col| times[row].powi(col as i32));
    let rhs = DVector::from_column_slice(series.watts());

    let svd = vandermonde.svd(true, true);
    let solution = svd
        .solve(&rhs, 1e-12)
        .map_err(|e| RepoError::Numerical(format!("least-squares solve failed: {e}")))?;

    SourcePolynomial::new(
        solution.iter().copied().collect(),
        times[0],
        times[n - 1],
    )
}
