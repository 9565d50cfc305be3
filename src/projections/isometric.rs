//! Conversions between geodetic and isometric latitude.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::{utility::fixed_point, Error, Tolerance};

/// Computes the isometric latitude of a geodetic latitude `lat` (radians)
/// on an ellipsoid of first eccentricity `e`.
///
/// # Usage
///
/// ```
/// use lambert_wgs84::projections::isometric::latitude_iso_from_latitude;
///
/// assert!(latitude_iso_from_latitude(0.0, 0.08248325676).abs() < 1e-15);
/// assert!((latitude_iso_from_latitude(0.852147, 0.08248325676) - 0.9740177).abs() < 1e-6);
/// ```
pub fn latitude_iso_from_latitude(lat: f64, e: f64) -> f64 {
    let esin = e * lat.sin();
    ((FRAC_PI_4 + lat / 2.).tan() * ((1. - esin) / (1. + esin)).powf(e / 2.)).ln()
}

/// Recovers the geodetic latitude (radians) of an isometric latitude by
/// fixed-point iteration.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if successive estimates are still
/// `tolerance.epsilon()` apart after `tolerance.max_iterations()` steps.
///
/// # Usage
///
/// ```
/// use lambert_wgs84::Tolerance;
/// use lambert_wgs84::projections::isometric::{latitude_from_latitude_iso, latitude_iso_from_latitude};
///
/// let e = 0.08248325676;
/// let lat_iso = latitude_iso_from_latitude(0.852147, e);
/// let lat = latitude_from_latitude_iso(lat_iso, e, &Tolerance::default()).unwrap();
///
/// assert!((lat - 0.852147).abs() < 1e-10);
/// ```
pub fn latitude_from_latitude_iso(lat_iso: f64, e: f64, tolerance: &Tolerance) -> Result<f64, Error> {
    let exp_iso = lat_iso.exp();
    let seed = 2. * exp_iso.atan() - FRAC_PI_2;

    fixed_point("isometric latitude", seed, tolerance, |phi| {
        let esin = e * phi.sin();
        2. * (((1. + esin) / (1. - esin)).powf(e / 2.) * exp_iso).atan() - FRAC_PI_2
    })
}
