use std::{fmt::Display, str::FromStr};

use crate::{
    constants::{DEGREE_TO_GRAD, DEGREE_TO_RADIAN, GRAD_TO_DEGREE, GRAD_TO_RADIAN, RADIAN_TO_DEGREE, RADIAN_TO_GRAD},
    Error, ParseCoord,
};

/// Unit tag of a [`Point`](crate::Point). The angular units describe
/// geographic coordinates, [`Unit::Meter`] describes Lambert plane or
/// geocentric cartesian coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    Degree,
    Grad,
    Radian,
    Meter,
}

impl Unit {
    /// Multiplicative factor taking a value from `self` to `target`.
    ///
    /// Returns `None` when no rescale applies: the units are identical, or
    /// one of them is not angular.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambert_wgs84::Unit;
    ///
    /// assert_eq!(Unit::Grad.scale_to(Unit::Degree), Some(0.9));
    /// assert_eq!(Unit::Degree.scale_to(Unit::Degree), None);
    /// assert_eq!(Unit::Meter.scale_to(Unit::Radian), None);
    /// ```
    pub fn scale_to(self, target: Unit) -> Option<f64> {
        match (self, target) {
            (Unit::Radian, Unit::Degree) => Some(RADIAN_TO_DEGREE),
            (Unit::Grad, Unit::Degree) => Some(GRAD_TO_DEGREE),
            (Unit::Radian, Unit::Grad) => Some(RADIAN_TO_GRAD),
            (Unit::Degree, Unit::Grad) => Some(DEGREE_TO_GRAD),
            (Unit::Grad, Unit::Radian) => Some(GRAD_TO_RADIAN),
            (Unit::Degree, Unit::Radian) => Some(DEGREE_TO_RADIAN),
            _ => None,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Unit::Degree => "degree",
            Unit::Grad => "grad",
            Unit::Radian => "radian",
            Unit::Meter => "meter",
        };
        f.write_str(name)
    }
}

impl ParseCoord for Unit {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" | "°" => Ok(Unit::Degree),
            "grad" | "grads" | "gon" | "gons" | "gr" => Ok(Unit::Grad),
            "rad" | "radian" | "radians" => Ok(Unit::Radian),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Unit::Meter),
            _ => Err(Error::InvalidUnitName(value.to_string())),
        }
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse_coord(s)
    }
}
