#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]

//! Conversion of French Lambert zone coordinates (I, II, III, IV, II étendu
//! and 93) to and from geographic coordinates on the WGS84 ellipsoid.
//!
//! # Usage
//!
//! ```
//! use lambert_wgs84::{Point, Unit, Zone};
//!
//! let mut point = Point::new(668_832.5384, 6_950_138.7285, 0.0, Unit::Meter);
//! point.to_wgs84(Zone::Lambert93).unwrap();
//! point.to_degree();
//!
//! assert!((point.x() - 2.56865).abs() < 1e-5);
//! assert!((point.y() - 49.64961).abs() < 1e-5);
//! ```

use thiserror::Error;

pub mod constants;
pub mod datum;
pub mod point;
pub mod tolerance;
pub mod unit;
pub mod zone;

pub use point::Point;
pub use tolerance::Tolerance;
pub use unit::Unit;
pub use zone::{LambertParams, Zone};

pub mod projections {
    pub mod geocentric;
    pub mod isometric;
    pub mod lambert_conformal_conic;
}

pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Cannot run {operation} on a point in {found}, expected {expected}")]
    InvalidUnit {
        operation: &'static str,
        expected: Unit,
        found: Unit,
    },
    #[error("Unknown Lambert zone: {0}")]
    InvalidZone(String),
    #[error("Unknown unit: {0}")]
    InvalidUnitName(String),
    #[error("Tolerance is not valid: {0}")]
    InvalidTolerance(String),
    #[error("{solver} did not converge after {iterations} iterations (last delta {delta:e})")]
    NoConvergence {
        solver: &'static str,
        iterations: usize,
        delta: f64,
    },
    #[error("Point is outside the projection domain: {0}")]
    OutOfDomain(String),
}

pub trait ParseCoord {
    /// Parses a value from its textual representation.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] describing why `value` could not be parsed.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type from a string.
///
/// # Errors
///
/// Forwards the error of the target type's [`ParseCoord`] implementation.
///
/// # Usage
///
/// ```
/// use lambert_wgs84::{Unit, Zone};
///
/// let zone: Zone = lambert_wgs84::from_str("Lambert 93").unwrap();
/// assert_eq!(zone, Zone::Lambert93);
///
/// let unit: Unit = lambert_wgs84::from_str("gon").unwrap();
/// assert_eq!(unit, Unit::Grad);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
