//! Fixed geodetic constants shared by the projections and the datum pipeline.

use std::f64::consts::PI;

// Clark 1880 IGN semi-major axis a
pub const A_CLARK_IGN: f64 = 6_378_249.2;
// Clark 1880 IGN first eccentricity
#[allow(clippy::unreadable_literal)]
pub const E_CLARK_IGN: f64 = 0.08248325676;

// WGS84 semi-major axis a
pub const A_WGS84: f64 = 6_378_137.;
// WGS84 first eccentricity
#[allow(clippy::unreadable_literal)]
pub const E_WGS84: f64 = 0.08181919106;

/// Longitude origin of the Paris meridian, in radians.
pub const PARIS_MERIDIAN: f64 = 0.;
/// Offset between the Paris and Greenwich meridians, in radians.
#[allow(clippy::unreadable_literal)]
pub const GREENWICH_MERIDIAN: f64 = 0.04079234433;
/// Central meridian of Lambert 93 (3°E), in radians.
pub const IERS_MERIDIAN: f64 = 3. * PI / 180.;

/// Default convergence tolerance of the iterative latitude solvers.
pub const DEFAULT_EPS: f64 = 1e-10;
/// Default iteration bound of the latitude solvers. They converge in well
/// under ten steps on French territory.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

// Angle unit scale factors
pub(crate) const RADIAN_TO_DEGREE: f64 = 180. / PI;
pub(crate) const DEGREE_TO_RADIAN: f64 = PI / 180.;
pub(crate) const GRAD_TO_DEGREE: f64 = 180. / 200.;
pub(crate) const DEGREE_TO_GRAD: f64 = 200. / 180.;
pub(crate) const GRAD_TO_RADIAN: f64 = PI / 200.;
pub(crate) const RADIAN_TO_GRAD: f64 = 200. / PI;
