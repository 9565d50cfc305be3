//! Geocentric datum shifts.

/// Three parameter geocentric translation, in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeocentricTranslation {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl GeocentricTranslation {
    /// NTF (Clark 1880 IGN) to WGS84 translation used by the IGN for the
    /// legacy Lambert zones.
    pub const NTF_TO_WGS84: GeocentricTranslation = GeocentricTranslation { dx: -168., dy: -60., dz: 320. };

    pub const fn new(dx: f64, dy: f64, dz: f64) -> GeocentricTranslation {
        Self { dx, dy, dz }
    }

    /// Translates a geocentric cartesian position.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambert_wgs84::datum::GeocentricTranslation;
    ///
    /// let shift = GeocentricTranslation::NTF_TO_WGS84;
    /// assert_eq!(shift.apply((1000.0, 2000.0, 3000.0)), (832.0, 1940.0, 3320.0));
    /// assert_eq!(shift.inverse().apply(shift.apply((1.0, 2.0, 3.0))), (1.0, 2.0, 3.0));
    /// ```
    pub fn apply(&self, (x, y, z): (f64, f64, f64)) -> (f64, f64, f64) {
        (x + self.dx, y + self.dy, z + self.dz)
    }

    /// Translation going the opposite way.
    pub fn inverse(&self) -> GeocentricTranslation {
        Self {
            dx: -self.dx,
            dy: -self.dy,
            dz: -self.dz,
        }
    }
}
