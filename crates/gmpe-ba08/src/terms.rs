//! Scalar terms of the median equation.
//!
//! `ln Y = F_M(M) + F_D(R_JB, M) + F_S(V_S30, R_JB, M)`. Every function here
//! is pure and operates on one element; broadcasting lives in
//! [`crate::model`].

use gmpe_core::FaultType;

use crate::coefficients::{CoefficientRow, Coefficients};

/// Reference PGA (g) at which the nonlinear site term is normalised.
pub const NONLINEAR_REFERENCE_PGA: f64 = 0.1;

/// Magnitude scaling `F_M`.
///
/// Quadratic below the hinge and linear above it; `M == Mh` takes the
/// quadratic branch.
pub fn magnitude_scaling(c: &CoefficientRow, fault: FaultType, magnitude: f64) -> f64 {
    let dm = magnitude - c.mh;
    let intercept = c.intercept(fault);
    if magnitude <= c.mh {
        intercept + c.e5 * dm + c.e6 * dm * dm
    } else {
        intercept + c.e7 * dm
    }
}

/// Distance with the fictitious-depth saturation applied.
pub fn effective_distance(c: &CoefficientRow, rjb: f64) -> f64 {
    (rjb * rjb + c.h * c.h).sqrt()
}

/// Distance scaling `F_D`: magnitude-dependent geometric spreading plus
/// anelastic attenuation.
pub fn distance_scaling(c: &CoefficientRow, magnitude: f64, rjb: f64) -> f64 {
    let r = effective_distance(c, rjb);
    (c.c1 + c.c2 * (magnitude - c.mref)) * (r / c.rref).ln() + c.c3 * (r - c.rref)
}

/// Linear site amplification `F_LIN`.
pub fn linear_site(c: &CoefficientRow, vs30: f64) -> f64 {
    c.blin * (vs30 / c.vref).ln()
}

/// Nonlinear slope `b_nl`, piecewise linear in `ln(V_S30)`.
pub fn nonlinear_slope(c: &CoefficientRow, vs30: f64) -> f64 {
    if vs30 <= c.v1 {
        c.b1
    } else if vs30 <= c.v2 {
        (c.b1 - c.b2) * (vs30 / c.v2).ln() / (c.v1 / c.v2).ln() + c.b2
    } else if vs30 < c.vref {
        c.b2 * (vs30 / c.vref).ln() / (c.v2 / c.vref).ln()
    } else {
        0.0
    }
}

/// Nonlinear site term `F_NL` driven by the reference-rock PGA (g).
///
/// Below `a1` the reference PGA is floored at `pga_low`; between `a1` and
/// `a2` a cubic smooths the transition to the log-linear branch.
pub fn nonlinear_site(c: &CoefficientRow, vs30: f64, pga4nl: f64) -> f64 {
    let bnl = nonlinear_slope(c, vs30);
    let floor = bnl * (c.pga_low / NONLINEAR_REFERENCE_PGA).ln();
    if pga4nl <= c.a1 {
        floor
    } else if pga4nl <= c.a2 {
        let dx = (c.a2 / c.a1).ln();
        let dy = bnl * (c.a2 / c.pga_low).ln();
        let quad = (3.0 * dy - bnl * dx) / (dx * dx);
        let cubic = -(2.0 * dy - bnl * dx) / (dx * dx * dx);
        let x = (pga4nl / c.a1).ln();
        floor + quad * x * x + cubic * x * x * x
    } else {
        bnl * (pga4nl / NONLINEAR_REFERENCE_PGA).ln()
    }
}

/// Site amplification `F_S = F_LIN + F_NL`.
pub fn site_amplification(c: &CoefficientRow, vs30: f64, pga4nl: f64) -> f64 {
    linear_site(c, vs30) + nonlinear_site(c, vs30, pga4nl)
}

/// Median PGA (g) on reference rock (`V_S30 = Vref`, `F_S = 0`).
pub fn reference_pga(pga: &CoefficientRow, fault: FaultType, magnitude: f64, rjb: f64) -> f64 {
    (magnitude_scaling(pga, fault, magnitude) + distance_scaling(pga, magnitude, rjb)).exp()
}

/// Natural-log median amplitude for one element.
pub fn log_mean(
    coefficients: &Coefficients<'_>,
    fault: FaultType,
    magnitude: f64,
    rjb: f64,
    vs30: f64,
) -> f64 {
    let target = coefficients.target;
    let pga4nl = reference_pga(coefficients.pga, fault, magnitude, rjb);
    magnitude_scaling(target, fault, magnitude)
        + distance_scaling(target, magnitude, rjb)
        + site_amplification(target, vs30, pga4nl)
}
