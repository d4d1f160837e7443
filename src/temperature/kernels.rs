// src/temperature/kernels.rs

use std::f64::consts::PI;

use crate::decay::series::MONTH_SECONDS;
use crate::error::{RepoError, Result};
use crate::fit::polynomial::SourcePolynomial;
use crate::input::input_deck::{
    CanisterGeometry, MediumProperties, SourceGeometry, SourceStrength,
};
use crate::utils::quadrature::adaptive_simpson;
use crate::utils::special::erf;

/// Relative tolerance of the emission-time quadrature.
const REL_TOL: f64 = 1e-9;

/// One temperature request against a fitted heat source.
///
/// Coordinates are metres in a canister-centred frame: the canister axis
/// runs along `y` with its midpoint at the origin. `t` counts months since
/// emplacement. Queries are stateless and pure: the same query always
/// produces the same temperature, up to quadrature tolerance.
#[derive(Debug, Clone)]
pub struct GeometryQuery<'a> {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Query time [months].
    pub t: f64,
    pub medium: MediumProperties,
    pub canister: CanisterGeometry,
    pub strength: SourceStrength,
    pub source: &'a SourcePolynomial,
}

impl GeometryQuery<'_> {
    /// Dispatches on the requested source geometry.
    pub fn evaluate(&self, geometry: SourceGeometry) -> Result<f64> {
        match geometry {
            SourceGeometry::Line => self.line(),
            SourceGeometry::Point => self.point(),
            SourceGeometry::InfiniteLine => self.infinite_line(),
        }
    }

    /// Finite-line source of length `canister.length` along the y axis.
    ///
    /// Superposes the instantaneous line-source Green's function over the
    /// emission history:
    ///
    /// `T = 1/(8*pi*k) * integral of
    ///      [num*Q(tp)/L] / (t-tp) * exp(-(x^2+z^2)/(4a(t-tp)))
    ///      * [erf(0.5(y+L/2)/sqrt(a(t-tp))) - erf(0.5(y-L/2)/sqrt(a(t-tp)))]`
    ///
    /// over `tp` in `[0, t]`, in kelvin above ambient.
    pub fn line(&self) -> Result<f64> {
        self.check_domain()?;
        let t = self.t * MONTH_SECONDS;
        if t == 0.0 {
            return Ok(0.0);
        }

        let a = self.medium.thermal_diffusivity;
        let k = self.medium.thermal_conductivity;
        let length = self.canister.length;
        let num = self.strength.multiplier();
        let rho2 = self.x * self.x + self.z * self.z;
        let y = self.y;

        let integrand = |tp: f64| {
            let s = t - tp;
            if s <= 0.0 {
                return 0.0;
            }
            let spread = (-rho2 / (4.0 * a * s)).exp();
            let root = (a * s).sqrt();
            let axial =
                erf(0.5 * (y + 0.5 * length) / root) - erf(0.5 * (y - 0.5 * length) / root);
            let green = spread * axial / s;
            if green == 0.0 {
                // Limit value at the singular endpoint tp -> t.
                return 0.0;
            }
            num * self.source.eval(tp / MONTH_SECONDS) / length * green
        };

        let integral = adaptive_simpson(&integrand, 0.0, t, REL_TOL)?;
        Ok(integral / (8.0 * PI * k))
    }

    /// Point source at the origin; `z` is unused and the radial offset is
    /// `r = sqrt(x^2 + y^2)`.
    ///
    /// `T = 1/(8*k*sqrt(a)*pi^1.5) * integral of
    ///      num*Q(tp) / (t-tp)^1.5 * exp(-r^2/(4a(t-tp)))`
    pub fn point(&self) -> Result<f64> {
        self.check_domain()?;
        let t = self.t * MONTH_SECONDS;
        if t == 0.0 {
            return Ok(0.0);
        }

        let a = self.medium.thermal_diffusivity;
        let k = self.medium.thermal_conductivity;
        let num = self.strength.multiplier();
        let r2 = self.x * self.x + self.y * self.y;

        let integrand = |tp: f64| {
            let s = t - tp;
            if s <= 0.0 {
                return 0.0;
            }
            let green = (-r2 / (4.0 * a * s)).exp() / s.powf(1.5);
            if green == 0.0 {
                return 0.0;
            }
            num * self.source.eval(tp / MONTH_SECONDS) * green
        };

        let integral = adaptive_simpson(&integrand, 0.0, t, REL_TOL)?;
        Ok(integral / (8.0 * k * a.sqrt() * PI.powf(1.5)))
    }

    /// Infinite line source along the y axis, offset `(x, z)`.
    ///
    /// `T = 1/(4*pi*k) * integral of
    ///      num*Q(tp) / (t-tp) * exp(-(x^2+z^2)/(4a(t-tp)))`
    pub fn infinite_line(&self) -> Result<f64> {
        self.check_domain()?;
        let t = self.t * MONTH_SECONDS;
        if t == 0.0 {
            return Ok(0.0);
        }

        let a = self.medium.thermal_diffusivity;
        let k = self.medium.thermal_conductivity;
        let num = self.strength.multiplier();
        let rho2 = self.x * self.x + self.z * self.z;

        let integrand = |tp: f64| {
            let s = t - tp;
            if s <= 0.0 {
                return 0.0;
            }
            let green = (-rho2 / (4.0 * a * s)).exp() / s;
            if green == 0.0 {
                return 0.0;
            }
            num * self.source.eval(tp / MONTH_SECONDS) * green
        };

        let integral = adaptive_simpson(&integrand, 0.0, t, REL_TOL)?;
        Ok(integral / (4.0 * PI * k))
    }

    /// The integral samples the source at every emission time in
    /// `[0, t]` months, so the whole span has to sit inside the fitted
    /// domain. A negative query time has no physical meaning.
    fn check_domain(&self) -> Result<()> {
        if self.t < 0.0 {
            return Err(RepoError::DomainRange(format!(
                "negative query time: {} months",
                self.t
            )));
        }
        if !self.source.contains(0.0) || !self.source.contains(self.t) {
            return Err(RepoError::DomainRange(format!(
                "emission times [0, {}] months exceed the fitted domain [{}, {}]",
                self.t,
                self.source.t_min(),
                self.source.t_max()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::special::erfc;
    use approx::assert_relative_eq;

    // Granite repository medium.
    const GRANITE: MediumProperties = MediumProperties {
        thermal_conductivity: 2.5,  // [W/(m*K)]
        thermal_diffusivity: 1.13e-6, // [m^2/s]
    };
    const CANISTER: CanisterGeometry = CanisterGeometry { length: 5.0 };
    const TEN_ASSEMBLIES: SourceStrength = SourceStrength::PerAssembly { assemblies: 10.0 };

    fn query<'a>(
        x: f64,
        y: f64,
        z: f64,
        t: f64,
        source: &'a SourcePolynomial,
    ) -> GeometryQuery<'a> {
        GeometryQuery {
            x,
            y,
            z,
            t,
            medium: GRANITE,
            canister: CANISTER,
            strength: TEN_ASSEMBLIES,
            source,
        }
    }

    /// Positive, slowly decaying source over five years of months.
    fn decaying_source() -> SourcePolynomial {
        SourcePolynomial::new(vec![500.0, -2.0], 0.0, 60.0).unwrap()
    }

    #[test]
    fn test_line_infinite_source_gives_infinite_temperature() {
        let inf = SourcePolynomial::constant(f64::INFINITY);
        let t = query(0.1, 2.5, 0.0, 1.0, &inf).line().unwrap();
        assert_eq!(t, f64::INFINITY);
    }

    #[test]
    fn test_point_infinite_source_gives_infinite_temperature() {
        let inf = SourcePolynomial::constant(f64::INFINITY);
        let t = query(0.1, 7.5, 0.0, 1.0, &inf).point().unwrap();
        assert_eq!(t, f64::INFINITY);
    }

    #[test]
    fn test_infline_infinite_source_gives_infinite_temperature() {
        let inf = SourcePolynomial::constant(f64::INFINITY);
        let t = query(10.1, 0.0, 0.0, 1.0, &inf).infinite_line().unwrap();
        assert_eq!(t, f64::INFINITY);
    }

    #[test]
    fn test_zero_time_is_zero_for_all_geometries() {
        let source = decaying_source();
        let q = query(0.1, 2.5, 0.0, 0.0, &source);
        assert_eq!(q.line().unwrap(), 0.0);
        assert_eq!(q.point().unwrap(), 0.0);
        assert_eq!(q.infinite_line().unwrap(), 0.0);
    }

    #[test]
    fn test_line_decreases_away_in_x() {
        let source = decaying_source();
        let mut previous = f64::INFINITY;
        let mut x = 0.5;
        while x < 10.0 {
            let t = query(x, 2.5, 0.0, 1.0, &source).line().unwrap();
            assert!(t.is_finite());
            assert!(t <= previous, "T rose from {previous} to {t} at x={x}");
            previous = t;
            x += 0.5;
        }
    }

    #[test]
    fn test_line_decreases_away_in_y() {
        let source = decaying_source();
        let mut previous = f64::INFINITY;
        let mut y = 0.5;
        while y < 10.0 {
            let t = query(0.1, y, 0.0, 1.0, &source).line().unwrap();
            assert!(t <= previous, "T rose from {previous} to {t} at y={y}");
            previous = t;
            y += 0.5;
        }
    }

    #[test]
    fn test_line_decreases_away_in_z() {
        let source = decaying_source();
        let mut previous = f64::INFINITY;
        let mut z = 0.5;
        while z < 10.0 {
            let t = query(0.1, 2.5, z, 1.0, &source).line().unwrap();
            assert!(t <= previous, "T rose from {previous} to {t} at z={z}");
            previous = t;
            z += 0.5;
        }
    }

    #[test]
    fn test_point_decreases_away_in_x() {
        let source = decaying_source();
        let mut previous = f64::INFINITY;
        let mut x = 0.5;
        while x < 10.0 {
            let t = query(x, 7.5, 0.0, 1.0, &source).point().unwrap();
            assert!(t <= previous, "T rose from {previous} to {t} at x={x}");
            previous = t;
            x += 0.5;
        }
    }

    #[test]
    fn test_point_decreases_away_in_y() {
        let source = decaying_source();
        let mut previous = f64::INFINITY;
        let mut y = 0.5;
        while y < 10.0 {
            let t = query(0.1, y, 0.0, 1.0, &source).point().unwrap();
            assert!(t <= previous, "T rose from {previous} to {t} at y={y}");
            previous = t;
            y += 0.5;
        }
    }

    #[test]
    fn test_infline_decreases_away_in_x() {
        let source = decaying_source();
        let mut previous = f64::INFINITY;
        let mut x = 0.5;
        while x < 10.0 {
            let t = query(x, 0.0, 0.0, 1.0, &source).infinite_line().unwrap();
            assert!(t <= previous, "T rose from {previous} to {t} at x={x}");
            previous = t;
            x += 0.5;
        }
    }

    #[test]
    fn test_infline_decreases_away_in_z() {
        let source = decaying_source();
        let mut previous = f64::INFINITY;
        let mut z = 0.5;
        while z < 10.0 {
            let t = query(0.1, 0.0, z, 1.0, &source).infinite_line().unwrap();
            assert!(t <= previous, "T rose from {previous} to {t} at z={z}");
            previous = t;
            z += 0.5;
        }
    }

    #[test]
    fn test_line_is_symmetric_in_y() {
        let source = decaying_source();
        let plus = query(0.3, 4.0, 0.0, 2.0, &source).line().unwrap();
        let minus = query(0.3, -4.0, 0.0, 2.0, &source).line().unwrap();
        assert!((plus - minus).abs() < 1e-9 * plus.abs().max(1.0));
    }

    #[test]
    fn test_point_matches_closed_form_for_constant_source() {
        // A steady point source has the classic solution
        // T = Q/(4*pi*k*r) * erfc(r / (2*sqrt(a*t))).
        let q0 = 750.0;
        let source = SourcePolynomial::constant(q0);
        let mut q = query(1.2, 0.9, 0.0, 6.0, &source);
        q.strength = SourceStrength::Canister;

        let computed = q.point().unwrap();
        let r = (q.x * q.x + q.y * q.y).sqrt();
        let t_s = q.t * MONTH_SECONDS;
        let a = GRANITE.thermal_diffusivity;
        let k = GRANITE.thermal_conductivity;
        let expected = q0 / (4.0 * PI * k * r) * erfc(r / (2.0 * (a * t_s).sqrt()));
        assert_relative_eq!(computed, expected, max_relative = 1e-5);
    }

    #[test]
    fn test_infline_matches_exponential_integral_for_constant_source() {
        // A steady infinite line source satisfies
        // T = Q/(4*pi*k) * E1(rho^2 / (4*a*t)); pick rho so the E1 argument
        // is exactly 1, where E1(1) = 0.219383934395520.
        let q0 = 900.0;
        let source = SourcePolynomial::constant(q0);
        let a = GRANITE.thermal_diffusivity;
        let k = GRANITE.thermal_conductivity;
        let t_months = 1.0;
        let t_s = t_months * MONTH_SECONDS;
        let x = (4.0 * a * t_s).sqrt();

        let mut q = query(x, 0.0, 0.0, t_months, &source);
        q.strength = SourceStrength::Canister;
        let computed = q.infinite_line().unwrap();
        let expected = q0 / (4.0 * PI * k) * 0.219_383_934_395_520;
        assert_relative_eq!(computed, expected, max_relative = 1e-5);
    }

    #[test]
    fn test_per_assembly_strength_scales_linearly() {
        let source = decaying_source();
        let mut one = query(0.5, 2.0, 0.0, 1.0, &source);
        one.strength = SourceStrength::PerAssembly { assemblies: 1.0 };
        let mut ten = one.clone();
        ten.strength = SourceStrength::PerAssembly { assemblies: 10.0 };

        let t1 = one.line().unwrap();
        let t10 = ten.line().unwrap();
        assert!((t10 - 10.0 * t1).abs() < 1e-6 * t10);
    }

    #[test]
    fn test_canister_strength_equals_single_assembly() {
        let source = decaying_source();
        let mut single = query(0.5, 2.0, 0.0, 1.0, &source);
        single.strength = SourceStrength::PerAssembly { assemblies: 1.0 };
        let mut canister = single.clone();
        canister.strength = SourceStrength::Canister;
        assert_eq!(single.line().unwrap(), canister.line().unwrap());
    }

    #[test]
    fn test_negative_time_is_rejected() {
        let source = decaying_source();
        let q = query(0.1, 2.5, 0.0, -1.0, &source);
        assert!(matches!(q.line(), Err(RepoError::DomainRange(_))));
    }

    #[test]
    fn test_query_beyond_fitted_domain_is_rejected() {
        let source = SourcePolynomial::new(vec![100.0], 0.0, 12.0).unwrap();
        let q = query(0.1, 2.5, 0.0, 13.0, &source);
        assert!(matches!(q.line(), Err(RepoError::DomainRange(_))));
        assert!(matches!(q.point(), Err(RepoError::DomainRange(_))));
        assert!(matches!(q.infinite_line(), Err(RepoError::DomainRange(_))));
    }

    #[test]
    fn test_results_are_never_nan() {
        let source = decaying_source();
        for &(x, y, z) in &[(0.1, 2.5, 0.0), (5.0, 0.0, 5.0), (0.3, 10.0, 0.2)] {
            let q = query(x, y, z, 1.0, &source);
            assert!(!q.line().unwrap().is_nan());
            assert!(!q.point().unwrap().is_nan());
            assert!(!q.infinite_line().unwrap().is_nan());
        }
    }

    #[test]
    fn test_evaluate_dispatches_by_geometry() {
        let source = decaying_source();
        let q = query(0.4, 1.0, 0.2, 1.0, &source);
        assert_eq!(q.evaluate(SourceGeometry::Line).unwrap(), q.line().unwrap());
        assert_eq!(
            q.evaluate(SourceGeometry::Point).unwrap(),
            q.point().unwrap()
        );
        assert_eq!(
            q.evaluate(SourceGeometry::InfiniteLine).unwrap(),
            q.infinite_line().unwrap()
        );
    }
}
