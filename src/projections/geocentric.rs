//! Geographic <--> geocentric cartesian conversions on a reference ellipsoid.

use crate::{
    constants::{A_CLARK_IGN, A_WGS84, E_CLARK_IGN, E_WGS84},
    utility::{fixed_point, GeoMath},
    Error, Tolerance,
};

/// Reference ellipsoid given by its semi-major axis and first eccentricity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    /// Semi-major axis in meters
    pub a: f64,
    /// First eccentricity
    pub e: f64,
}

impl Ellipsoid {
    /// Clark 1880 IGN, the ellipsoid of the NTF datum.
    pub const CLARK_IGN: Ellipsoid = Ellipsoid { a: A_CLARK_IGN, e: E_CLARK_IGN };
    pub const WGS84: Ellipsoid = Ellipsoid { a: A_WGS84, e: E_WGS84 };

    pub const fn new(a: f64, e: f64) -> Ellipsoid {
        Self { a, e }
    }

    /// Radius of curvature in the prime vertical at latitude `lat`.
    pub fn normal(&self, lat: f64) -> f64 {
        lambert_normal(lat, self.a, self.e)
    }
}

/// Radius of curvature in the prime vertical ("grande normale") at latitude
/// `lat` (radians) on an ellipsoid of semi-major axis `a` and eccentricity `e`.
///
/// # Usage
///
/// ```
/// use lambert_wgs84::projections::geocentric::lambert_normal;
///
/// let n = lambert_normal(0.977384381, 6378388.0, 0.08199189);
/// assert!((n - 6393174.9755).abs() < 1e-4);
/// ```
pub fn lambert_normal(lat: f64, a: f64, e: f64) -> f64 {
    let sin_lat = lat.sin();
    a / (1. - e * e * sin_lat * sin_lat).sqrt()
}

/// Converts a geographic position (radians, meters) into geocentric
/// cartesian coordinates `(X, Y, Z)` in meters.
///
/// # Usage
///
/// ```
/// use lambert_wgs84::projections::geocentric::{geographic_to_cartesian, Ellipsoid};
///
/// let ellipsoid = Ellipsoid::new(6378249.2, 0.08248325679);
/// let (x, y, z) = geographic_to_cartesian(0.01745329248, 0.02036217457, 100.0, &ellipsoid);
///
/// assert!((x - 6376064.6955).abs() < 1e-4);
/// assert!((y - 111294.6230).abs() < 1e-3);
/// assert!((z - 128984.7250).abs() < 1e-3);
/// ```
pub fn geographic_to_cartesian(lon: f64, lat: f64, height: f64, ellipsoid: &Ellipsoid) -> (f64, f64, f64) {
    let n = ellipsoid.normal(lat);
    let e2 = ellipsoid.e * ellipsoid.e;

    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    (
        (n + height) * cos_lat * cos_lon,
        (n + height) * cos_lat * sin_lon,
        (n * (1. - e2) + height) * sin_lat,
    )
}

/// Converts geocentric cartesian coordinates into a geographic position
/// `(lon, lat, height)`. The longitude is offset by `meridian` (radians).
///
/// Points on the polar axis have no defined longitude and are rejected.
///
/// # Errors
///
/// Returns [`Error::OutOfDomain`] for a point on the polar axis and
/// [`Error::NoConvergence`] if the latitude iteration exceeds its bound.
///
/// # Usage
///
/// ```
/// use lambert_wgs84::Tolerance;
/// use lambert_wgs84::projections::geocentric::{cartesian_to_geographic, geographic_to_cartesian, Ellipsoid};
///
/// let (x, y, z) = geographic_to_cartesian(0.04, 0.85, 120.0, &Ellipsoid::WGS84);
/// let (lon, lat, h) = cartesian_to_geographic(x, y, z, 0.0, &Ellipsoid::WGS84, &Tolerance::default()).unwrap();
///
/// assert!((lon - 0.04).abs() < 1e-10);
/// assert!((lat - 0.85).abs() < 1e-9);
/// assert!((h - 120.0).abs() < 1e-3);
/// ```
#[allow(clippy::similar_names)]
pub fn cartesian_to_geographic(
    x: f64,
    y: f64,
    z: f64,
    meridian: f64,
    ellipsoid: &Ellipsoid,
    tolerance: &Tolerance,
) -> Result<(f64, f64, f64), Error> {
    let a = ellipsoid.a;
    let e2 = ellipsoid.e * ellipsoid.e;

    let module = x.hypot(y);
    if module.is_zero() {
        return Err(Error::OutOfDomain(format!("cartesian point ({x}, {y}, {z}) lies on the polar axis")));
    }

    let lon = meridian + (y / x).atan();

    let radius = (x * x + y * y + z * z).sqrt();
    let seed = (z / (module * (1. - a * e2 / radius))).atan();

    let lat = fixed_point("cartesian latitude", seed, tolerance, |phi| {
        let sin_phi = phi.sin();
        (z / module / (1. - a * e2 * phi.cos() / (module * (1. - e2 * sin_phi * sin_phi).sqrt()))).atan()
    })?;

    let sin_lat = lat.sin();
    let height = module / lat.cos() - a / (1. - e2 * sin_lat * sin_lat).sqrt();

    Ok((lon, lat, height))
}
