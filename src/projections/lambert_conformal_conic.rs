use crate::{
    projections::isometric::{latitude_from_latitude_iso, latitude_iso_from_latitude},
    utility::GeoMath,
    zone::{LambertParams, Zone},
    Error, Tolerance,
};

/// Lambert conformal conic projection of one zone.
///
/// The formulas only hold inside the zone's projection domain: a position
/// far from the zone may produce meaningless values. Non-finite results are
/// reported as [`Error::OutOfDomain`].
#[derive(Clone, Copy, Debug)]
pub struct LambertConformalConic {
    n: f64,
    c: f64,
    xs: f64,
    ys: f64,
}

impl LambertConformalConic {
    pub fn new(zone: Zone) -> LambertConformalConic {
        LambertConformalConic::from_params(zone.params())
    }

    pub fn from_params(params: &LambertParams) -> LambertConformalConic {
        Self {
            n: params.n,
            c: params.c,
            xs: params.xs,
            ys: params.ys,
        }
    }

    /// Projects a geographic position (radians) onto the Lambert plane.
    /// Longitudes are measured from `lon_meridian`, latitudes on an
    /// ellipsoid of eccentricity `e`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDomain`] if the projected coordinates are not
    /// finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambert_wgs84::Zone;
    /// use lambert_wgs84::projections::lambert_conformal_conic::LambertConformalConic;
    ///
    /// let lcc = LambertConformalConic::new(Zone::LambertI);
    /// let (x, y) = lcc.project(0.145512099, 0.872664626, 0.04079234433, 0.08248325676).unwrap();
    ///
    /// assert!((x - 1029705.083).abs() < 1e-2);
    /// assert!((y - 272723.849).abs() < 1e-2);
    /// ```
    pub fn project(&self, lon: f64, lat: f64, lon_meridian: f64, e: f64) -> Result<(f64, f64), Error> {
        let lat_iso = latitude_iso_from_latitude(lat, e);
        let r = self.c * (-self.n * lat_iso).exp();
        let (sin_gamma, cos_gamma) = (self.n * (lon - lon_meridian)).sin_cos();

        let x = self.xs + r * sin_gamma;
        let y = self.ys - r * cos_gamma;

        if !(x.is_finite() && y.is_finite()) {
            return Err(Error::OutOfDomain(format!("geographic position ({lon}, {lat}) has no Lambert projection")));
        }

        Ok((x, y))
    }

    /// Recovers the geographic position (radians) of a Lambert plane point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDomain`] for the pole of the cone, and
    /// [`Error::NoConvergence`] if the latitude iteration exceeds its bound.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambert_wgs84::{Tolerance, Zone};
    /// use lambert_wgs84::projections::lambert_conformal_conic::LambertConformalConic;
    ///
    /// let lcc = LambertConformalConic::new(Zone::LambertI);
    /// let tolerance = Tolerance::default().with_epsilon(1e-9).unwrap();
    /// let (lon, lat) = lcc
    ///     .unproject(1029705.083, 272723.849, 0.04079234433, 0.08248325676, &tolerance)
    ///     .unwrap();
    ///
    /// assert!((lon - 0.145512099).abs() < 1e-9);
    /// assert!((lat - 0.872664626).abs() < 1e-9);
    /// ```
    pub fn unproject(&self, x: f64, y: f64, lon_meridian: f64, e: f64, tolerance: &Tolerance) -> Result<(f64, f64), Error> {
        let dx = x - self.xs;
        let dy = y - self.ys;

        let r = dx.hypot(dy);
        if r.is_zero() {
            return Err(Error::OutOfDomain(format!("({x}, {y}) is the pole of the projection")));
        }

        let gamma = (dx / -dy).atan();
        let lon = lon_meridian + gamma / self.n;
        let lat_iso = -1. / self.n * (r / self.c).abs().ln();

        let lat = latitude_from_latitude_iso(lat_iso, e, tolerance)?;

        if !(lon.is_finite() && lat.is_finite()) {
            return Err(Error::OutOfDomain(format!("({x}, {y}) has no geographic position")));
        }

        Ok((lon, lat))
    }
}
