use std::fmt::Display;

use tracing::warn;

use crate::{
    constants::GREENWICH_MERIDIAN,
    datum::GeocentricTranslation,
    projections::{
        geocentric::{cartesian_to_geographic, geographic_to_cartesian, Ellipsoid},
        lambert_conformal_conic::LambertConformalConic,
    },
    Error, Tolerance, Unit, Zone,
};

/// A coordinate triple tagged with its unit.
///
/// The meaning of the components depends on the unit:
/// * angular units: longitude, latitude, ellipsoidal height (meters)
/// * [`Unit::Meter`]: Lambert easting, northing, height, or geocentric
///   `X`, `Y`, `Z`
///
/// Conversions mutate the point in place and always leave the unit tag
/// describing the current values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    #[cfg_attr(feature = "serde", serde(alias = "lon", alias = "easting"))]
    pub(crate) x: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lat", alias = "northing"))]
    pub(crate) y: f64,
    #[cfg_attr(feature = "serde", serde(alias = "height", alias = "h", default))]
    pub(crate) z: f64,
    pub(crate) unit: Unit,
}

impl Point {
    /// Creates a point without checking its components.
    pub const fn new(x: f64, y: f64, z: f64, unit: Unit) -> Point {
        Self { x, y, z, unit }
    }

    /// Tries to create a point, rejecting NaN and infinite components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if a component is not finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambert_wgs84::{Point, Unit};
    ///
    /// let point = Point::create(2.228389, 48.824054, 0.0, Unit::Degree);
    /// assert!(point.is_ok());
    ///
    /// let invalid = Point::create(f64::NAN, 48.824054, 0.0, Unit::Degree);
    /// assert!(invalid.is_err());
    /// ```
    pub fn create(x: f64, y: f64, z: f64, unit: Unit) -> Result<Point, Error> {
        for (name, value) in [("x", x), ("y", y), ("z", z)] {
            if !value.is_finite() {
                return Err(Error::InvalidCoord(format!("{name} component {value} is not finite")));
            }
        }

        Ok(Point::new(x, y, z, unit))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    fn scale(&mut self, s: f64) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }

    /// Rescales the point to `target`. Points in a non-angular unit are left
    /// untouched, the tag is set to `target` in every case.
    fn convert(&mut self, target: Unit) {
        if let Some(s) = self.unit.scale_to(target) {
            self.scale(s);
        }
        self.unit = target;
    }

    /// Converts the coordinates from radian or grad to degree.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambert_wgs84::{Point, Unit};
    ///
    /// let mut point = Point::new(200.0, 100.0, 0.0, Unit::Grad);
    /// point.to_degree();
    ///
    /// assert_eq!(point.unit(), Unit::Degree);
    /// assert!((point.x() - 180.0).abs() < 1e-12);
    /// assert!((point.y() - 90.0).abs() < 1e-12);
    /// ```
    pub fn to_degree(&mut self) {
        self.convert(Unit::Degree);
    }

    /// Converts the coordinates from degree or radian to grad.
    pub fn to_grad(&mut self) {
        self.convert(Unit::Grad);
    }

    /// Converts the coordinates from degree or grad to radian.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambert_wgs84::{Point, Unit};
    ///
    /// let mut point = Point::new(180.0, 90.0, 0.0, Unit::Degree);
    /// point.to_radian();
    ///
    /// assert_eq!(point.unit(), Unit::Radian);
    /// assert!((point.x() - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    pub fn to_radian(&mut self) {
        self.convert(Unit::Radian);
    }

    fn require_unit(&self, operation: &'static str, expected: Unit) -> Result<(), Error> {
        if self.unit == expected {
            return Ok(());
        }

        warn!(operation, expected = %expected, found = %self.unit, "point left unchanged, unit precondition not met");
        Err(Error::InvalidUnit {
            operation,
            expected,
            found: self.unit,
        })
    }

    /// Converts geographic coordinates (radians) into geocentric cartesian
    /// coordinates (meters) on `ellipsoid`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnit`] if the point is not in radian. The
    /// point is left unchanged.
    pub fn to_cartesian(&mut self, ellipsoid: &Ellipsoid) -> Result<(), Error> {
        self.require_unit("to_cartesian", Unit::Radian)?;

        let (x, y, z) = geographic_to_cartesian(self.x, self.y, self.z, ellipsoid);
        *self = Point::new(x, y, z, Unit::Meter);

        Ok(())
    }

    /// Converts geocentric cartesian coordinates (meters) into geographic
    /// coordinates (radians) on `ellipsoid`, longitudes offset by `meridian`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnit`] if the point is not in meter, or the
    /// solver error of
    /// [`cartesian_to_geographic`](crate::projections::geocentric::cartesian_to_geographic).
    /// The point is left unchanged on error.
    pub fn to_geographic(&mut self, meridian: f64, ellipsoid: &Ellipsoid, tolerance: &Tolerance) -> Result<(), Error> {
        self.require_unit("to_geographic", Unit::Meter)?;

        let (lon, lat, height) = cartesian_to_geographic(self.x, self.y, self.z, meridian, ellipsoid, tolerance)?;
        *self = Point::new(lon, lat, height, Unit::Radian);

        Ok(())
    }

    /// Converts Lambert coordinates (meters) of `zone` into WGS84 geographic
    /// coordinates (radians), with the default [`Tolerance`].
    ///
    /// # Errors
    ///
    /// See [`Point::to_wgs84_with`].
    ///
    /// # Usage
    ///
    /// ```
    /// use lambert_wgs84::{Error, Point, Unit, Zone};
    ///
    /// let mut point = Point::new(668832.5384, 6950138.7285, 0.0, Unit::Meter);
    /// point.to_wgs84(Zone::Lambert93).unwrap();
    /// assert_eq!(point.unit(), Unit::Radian);
    ///
    /// // Already geographic: rejected and untouched
    /// let before = point;
    /// assert!(matches!(point.to_wgs84(Zone::Lambert93), Err(Error::InvalidUnit { .. })));
    /// assert_eq!(point, before);
    /// ```
    pub fn to_wgs84(&mut self, zone: Zone) -> Result<(), Error> {
        self.to_wgs84_with(zone, &Tolerance::default())
    }

    /// Converts Lambert coordinates (meters) of `zone` into WGS84 geographic
    /// coordinates (radians).
    ///
    /// Lambert 93 is WGS84 compatible and only needs the inverse projection.
    /// The other zones are unprojected on the NTF datum, then shifted to
    /// WGS84 through geocentric coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnit`] if the point is not in meter,
    /// [`Error::NoConvergence`] if a latitude solver exceeds
    /// `tolerance.max_iterations()`, or [`Error::OutOfDomain`] if the point
    /// lies outside the projection domain. The point is left unchanged on
    /// error.
    pub fn to_wgs84_with(&mut self, zone: Zone, tolerance: &Tolerance) -> Result<(), Error> {
        self.require_unit("to_wgs84", Unit::Meter)?;

        let lcc = LambertConformalConic::new(zone);
        let (lon, lat) = lcc.unproject(self.x, self.y, zone.inverse_meridian(), zone.eccentricity(), tolerance)?;

        if zone.is_wgs84_native() {
            *self = Point::new(lon, lat, self.z, Unit::Radian);
            return Ok(());
        }

        let cartesian = geographic_to_cartesian(lon, lat, self.z, &zone.ellipsoid());
        let (x, y, z) = GeocentricTranslation::NTF_TO_WGS84.apply(cartesian);
        let (lon, lat, height) = cartesian_to_geographic(x, y, z, GREENWICH_MERIDIAN, &Ellipsoid::WGS84, tolerance)?;

        *self = Point::new(lon, lat, height, Unit::Radian);
        Ok(())
    }

    /// Projects WGS84 geographic coordinates (radians) onto the Lambert plane
    /// of `zone`.
    ///
    /// Legacy zones are projected with the Clark IGN eccentricity directly,
    /// without the inverse of the datum shift applied by
    /// [`Point::to_wgs84`]. Round trips through both methods therefore agree
    /// to about 1e-3 degree only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnit`] if the point is not in radian, or
    /// [`Error::OutOfDomain`] if the projection is not finite. The point is
    /// left unchanged on error.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambert_wgs84::{Point, Unit, Zone};
    ///
    /// let mut point = Point::new(2.228389, 48.824054, 0.0, Unit::Degree);
    /// point.to_radian();
    /// point.to_lambert(Zone::Lambert93).unwrap();
    ///
    /// assert_eq!(point.unit(), Unit::Meter);
    /// assert!((point.x() - 643349.551).abs() < 1e-2);
    /// assert!((point.y() - 6858498.181).abs() < 1e-2);
    /// ```
    pub fn to_lambert(&mut self, zone: Zone) -> Result<(), Error> {
        self.require_unit("to_lambert", Unit::Radian)?;

        let lcc = LambertConformalConic::new(zone);
        let (x, y) = lcc.project(self.x, self.y, zone.forward_meridian(), zone.eccentricity())?;

        *self = Point::new(x, y, self.z, Unit::Meter);
        Ok(())
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let x = buf.format(self.x);
        let mut buf = ryu::Buffer::new();
        let y = buf.format(self.y);
        let mut buf = ryu::Buffer::new();
        let z = buf.format(self.z);
        write!(
            f,
            "{x} {y} {z} {}",
            self.unit,
        )
    }
}
