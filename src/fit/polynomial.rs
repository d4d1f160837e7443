// src/fit/polynomial.rs

use crate::error::{RepoError, Result};

/// Polynomial heat source `Q(t)` with an explicit validity domain.
///
/// Coefficients are stored in ascending order of power and are immutable
/// once the fit is done. The domain is the time span the fit was computed
/// over; the temperature evaluators refuse to sample outside it, since an
/// extrapolated polynomial says nothing about the physical source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePolynomial {
    coefficients: Vec<f64>,
    t_min: f64,
    t_max: f64,
}

impl SourcePolynomial {
    /// Builds a polynomial valid over `[t_min, t_max]` from ascending-order
    /// coefficients.
    ///
    /// # Returns
    ///
    /// * `RepoError::DomainRange` on an empty coefficient list or an
    ///   inverted domain.
    pub fn new(coefficients: Vec<f64>, t_min: f64, t_max: f64) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(RepoError::DomainRange(
                "polynomial needs at least one coefficient".to_string(),
            ));
        }
        if !(t_min < t_max) {
            return Err(RepoError::DomainRange(format!(
                "polynomial domain [{t_min}, {t_max}] is inverted or empty"
            )));
        }
        Ok(SourcePolynomial {
            coefficients,
            t_min,
            t_max,
        })
    }

    /// Constant source valid for all times. Used where the source strength
    /// is prescribed rather than fitted, including the infinite-source
    /// edge-case tests.
    pub fn constant(value: f64) -> Self {
        SourcePolynomial {
            coefficients: vec![value],
            t_min: f64::NEG_INFINITY,
            t_max: f64::INFINITY,
        }
    }

    /// Ascending-order coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Polynomial degree.
    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Lower edge of the validity domain [months].
    pub fn t_min(&self) -> f64 {
        self.t_min
    }

    /// Upper edge of the validity domain [months].
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    /// Whether `t` lies inside the validity domain.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }

    /// Evaluates `Q(t)` by Horner's rule. The caller is responsible for
    /// staying inside the validity domain.
    pub fn eval(&self, t: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * t + c)
    }

    /// Resamples the polynomial at `n` evenly spaced points across its
    /// domain, for plotting consumers. Not part of the analytical contract.
    pub fn resample(&self, n: usize) -> Result<(Vec<f64>, Vec<f64>)> {
        if n < 2 {
            return Err(RepoError::DomainRange(
                "resampling needs at least two points".to_string(),
            ));
        }
        if !self.t_min.is_finite() || !self.t_max.is_finite() {
            return Err(RepoError::DomainRange(
                "cannot resample an unbounded domain".to_string(),
            ));
        }
        let step = (self.t_max - self.t_min) / (n - 1) as f64;
        let times: Vec<f64> = (0..n).map(|i| self.t_min + i as f64 * step).collect();
        let values: Vec<f64> = times.iter().map(|&t| self.eval(t)).collect();
        Ok((times, values))
    }
}
